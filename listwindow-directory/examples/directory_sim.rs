//! Simulates a user-directory screen: seed a few thousand records, run a
//! search, flip pagination off, and drive the virtualized table with scroll
//! events.
//!
//! Run with: `cargo run -p listwindow-directory --example directory_sim`

use listwindow::WindowConfig;
use listwindow_directory::{
    Directory, DirectoryQuery, DirectoryView, Role, RoleFilter, UserRecord, ViewMode,
};

fn seed(count: usize) -> Directory {
    let records = (0..count)
        .map(|i| UserRecord {
            id: format!("u-{i:05}"),
            name: format!("Member {i}"),
            email: format!("member{i}@example.org"),
            role: Role::ALL[i % Role::ALL.len()],
            created_at: format!("2023-{:02}-01T00:00:00Z", i % 12 + 1),
        })
        .collect();
    Directory::from_records(records)
}

fn main() {
    let mut dir = seed(5000);
    let mut query = DirectoryQuery::new();

    // Paginated browsing first.
    query.set_role(RoleFilter::Only(Role::Moderator));
    let page = dir.select(&query);
    let total = query.total_pages(dir.filter(&query).len());
    println!("page 1/{total}: {} moderators", page.len());

    // Switch to "show all" and hand the selection to a virtualized table.
    query.show_all();
    query.set_role(RoleFilter::All);
    query.set_search("member 42");
    let selection = dir.select(&query);
    println!("search narrowed to {} records", selection.len());

    query.set_search("");
    let selection = dir.select(&query);

    let config = WindowConfig::new(48).unwrap().with_overscan(10);
    let mut table = DirectoryView::new(ViewMode::Table, config, 720).unwrap();
    table.sync_count(selection.len());

    for offset in [0u64, 12_000, 50_000] {
        table.on_scroll(offset);
        let rows = table.rows(&selection);
        println!(
            "offset={offset:>6} materialized {} rows from #{} (translate {})",
            rows.len(),
            rows.start_index,
            rows.translate_offset
        );
    }

    // New users land at the top of the directory.
    dir.insert_front(UserRecord {
        id: "u-new".into(),
        name: "Fresh Face".into(),
        email: "fresh@example.org".into(),
        role: Role::User,
        created_at: "2024-06-01T00:00:00Z".into(),
    });
    let selection = dir.select(&query);
    table.sync_count(selection.len());
    table.on_scroll(0);
    let rows = table.rows(&selection);
    println!("first visible after add: {}", rows.items[0].name);
}
