use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use listwindow::{ConfigError, WindowConfig};

fn record(i: usize, name: &str, email: &str, role: Role) -> UserRecord {
    UserRecord {
        id: format!("id-{i}"),
        name: String::from(name),
        email: String::from(email),
        role,
        created_at: String::from("2024-01-01T00:00:00Z"),
    }
}

fn sample_directory() -> Directory {
    Directory::from_records(alloc::vec![
        record(0, "Ada Lovelace", "ada@calc.example", Role::Admin),
        record(1, "Grace Hopper", "grace@navy.example", Role::User),
        record(2, "Alan Turing", "alan@bletchley.example", Role::Moderator),
        record(3, "Barbara Liskov", "liskov@mit.example", Role::Editor),
        record(4, "Adele Goldberg", "adele@parc.example", Role::User),
    ])
}

fn big_directory(count: usize) -> Directory {
    let records = (0..count)
        .map(|i| {
            record(
                i,
                &format!("User {i}"),
                &format!("user{i}@corp.example"),
                Role::ALL[i % Role::ALL.len()],
            )
        })
        .collect();
    Directory::from_records(records)
}

#[test]
fn role_parses_and_displays() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()), Ok(role));
        assert_eq!(format!("{role}"), role.as_str());
    }
    assert_eq!(
        Role::from_str("root"),
        Err(RoleParseError(String::from("root")))
    );
}

#[test]
fn search_is_case_insensitive_over_name_and_email() {
    let dir = sample_directory();
    let mut q = DirectoryQuery::new();

    q.set_search("ADA");
    let hits = dir.filter(&q);
    // "ADA" matches Ada Lovelace by name and ada@calc.example by email.
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Ada Lovelace");

    q.set_search("  navy  ");
    let hits = dir.filter(&q);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Grace Hopper");
}

#[test]
fn blank_search_matches_everything() {
    let dir = sample_directory();
    let q = DirectoryQuery::new();
    assert_eq!(dir.filter(&q).len(), dir.len());
}

#[test]
fn role_filter_narrows_before_search() {
    let dir = sample_directory();
    let mut q = DirectoryQuery::new();

    q.set_role(RoleFilter::Only(Role::User));
    assert_eq!(dir.filter(&q).len(), 2);

    // "Ada" matches Ada Lovelace (admin) and Adele Goldberg (user); the role
    // filter keeps only the latter.
    q.set_search("ad");
    let hits = dir.filter(&q);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Adele Goldberg");
}

#[test]
fn filter_mutations_reset_the_page() {
    let mut q = DirectoryQuery::new();
    q.set_page(7);
    assert_eq!(
        q.pagination(),
        Pagination::Pages {
            page: 7,
            per_page: DEFAULT_PER_PAGE
        }
    );

    q.set_search("ada");
    assert_eq!(
        q.pagination(),
        Pagination::Pages {
            page: 1,
            per_page: DEFAULT_PER_PAGE
        }
    );

    q.set_page(3);
    q.set_role(RoleFilter::Only(Role::Admin));
    assert!(matches!(q.pagination(), Pagination::Pages { page: 1, .. }));

    q.set_page(3);
    q.set_per_page(20);
    assert_eq!(
        q.pagination(),
        Pagination::Pages {
            page: 1,
            per_page: 20
        }
    );
}

#[test]
fn set_page_is_inert_when_showing_all() {
    let mut q = DirectoryQuery::new();
    q.show_all();
    q.set_page(5);
    assert_eq!(q.pagination(), Pagination::All);
}

#[test]
fn page_bounds_clamp_past_the_end() {
    let mut q = DirectoryQuery::new();
    q.set_per_page(10);

    assert_eq!(q.page_bounds(25), 0..10);
    q.set_page(3);
    assert_eq!(q.page_bounds(25), 20..25);
    q.set_page(4);
    assert_eq!(q.page_bounds(25), 25..25);

    q.show_all();
    assert_eq!(q.page_bounds(25), 0..25);
}

#[test]
fn total_pages_uses_ceiling_division() {
    let mut q = DirectoryQuery::new();
    q.set_per_page(10);
    assert_eq!(q.total_pages(0), 0);
    assert_eq!(q.total_pages(10), 1);
    assert_eq!(q.total_pages(11), 2);

    q.show_all();
    assert_eq!(q.total_pages(0), 0);
    assert_eq!(q.total_pages(5000), 1);
}

#[test]
fn select_filters_then_paginates() {
    let dir = big_directory(100);
    let mut q = DirectoryQuery::new();
    q.set_role(RoleFilter::Only(Role::Admin)); // every 4th record
    q.set_per_page(10);
    q.set_page(2);

    let page = dir.select(&q);
    assert_eq!(page.len(), 10);
    // Second page of admins: the 11th admin is record 40.
    assert_eq!(page[0].id, "id-40");
    assert!(page.iter().all(|r| r.role == Role::Admin));
}

#[test]
fn select_with_show_all_returns_whole_selection() {
    let dir = big_directory(100);
    let mut q = DirectoryQuery::new();
    q.set_role(RoleFilter::Only(Role::Editor));
    q.show_all();
    assert_eq!(dir.select(&q).len(), 25);
}

#[test]
fn insert_front_puts_new_users_first() {
    let mut dir = sample_directory();
    dir.insert_front(record(99, "New Hire", "new@corp.example", Role::User));
    assert_eq!(dir.records()[0].id, "id-99");
    assert_eq!(dir.len(), 6);
    assert_eq!(dir.get_by_id("id-99").unwrap().name, "New Hire");
    assert!(dir.get_by_id("missing").is_none());
}

#[test]
fn view_rejects_zero_viewport() {
    let cfg = WindowConfig::new(48).unwrap();
    assert_eq!(
        DirectoryView::new(ViewMode::Table, cfg, 0).unwrap_err(),
        ConfigError::ZeroViewportHeight
    );
}

#[test]
fn view_windows_the_selection() {
    let dir = big_directory(5000);
    let mut q = DirectoryQuery::new();
    q.show_all();

    let cfg = WindowConfig::new(60).unwrap().with_overscan(10);
    let mut view = DirectoryView::new(ViewMode::Table, cfg, 600).unwrap();

    let selection = dir.select(&q);
    view.sync_count(selection.len());
    view.on_scroll(6000);

    let rows = view.rows(&selection);
    assert_eq!(rows.start_index, 90);
    assert_eq!(rows.items[0].id, "id-90");
    assert_eq!(rows.total_extent, 5000 * 60);
    assert_eq!(rows.translate_offset, 90 * 60);
}

#[test]
fn narrowing_the_query_never_leaves_stale_indices() {
    let dir = big_directory(5000);
    let mut q = DirectoryQuery::new();
    q.show_all();

    let cfg = WindowConfig::new(60).unwrap();
    let mut view = DirectoryView::new(ViewMode::Table, cfg, 600).unwrap();

    let all = dir.select(&q);
    view.sync_count(all.len());
    view.on_scroll(200_000);
    assert!(!view.rows(&all).is_empty());

    // A search narrows 5000 records down to one; the old offset is far past
    // the new content but the slice must stay in bounds.
    q.set_search("user 4999");
    let narrowed = dir.select(&q);
    assert_eq!(narrowed.len(), 1);
    view.sync_count(narrowed.len());

    let rows = view.rows(&narrowed);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.start_index, 0);
    assert_eq!(rows.total_extent, 60);
}

#[test]
fn table_and_card_views_scroll_independently() {
    let dir = big_directory(1000);
    let mut q = DirectoryQuery::new();
    q.show_all();
    let selection = dir.select(&q);

    let table_cfg = WindowConfig::new(48).unwrap();
    let card_cfg = WindowConfig::new(160).unwrap().with_overscan(2);
    let mut table = DirectoryView::new(ViewMode::Table, table_cfg, 600).unwrap();
    let mut card = DirectoryView::new(ViewMode::Card, card_cfg, 600).unwrap();

    table.sync_count(selection.len());
    card.sync_count(selection.len());

    table.on_scroll(4800);
    card.on_scroll(16_000);

    let t = table.rows(&selection);
    let c = card.rows(&selection);
    assert_eq!(t.start_index, 95);
    assert_eq!(c.start_index, 98);
    assert_ne!(t.total_extent, c.total_extent);

    // Switching modes back and forth keeps each view's own position.
    assert_eq!(table.controller().scroll_offset(), 4800);
    assert_eq!(card.controller().scroll_offset(), 16_000);
}

#[test]
fn overscrolled_events_are_clamped_not_errors() {
    let cfg = WindowConfig::new(60).unwrap();
    let mut view = DirectoryView::new(ViewMode::Card, cfg, 600).unwrap();
    view.sync_count(100);
    view.on_scroll(u64::MAX);
    assert_eq!(view.controller().scroll_offset(), 100 * 60 - 600);
}

#[test]
fn selection_is_borrowed_not_cloned() {
    let dir = sample_directory();
    let q = DirectoryQuery::new();
    let selection: Vec<&UserRecord> = dir.select(&q);
    assert!(core::ptr::eq(selection[0], &dir.records()[0]));
}
