//! Two independent lists on one screen: a table of short rows and a column of
//! tall cards, each with its own item height, overscan, and scroll state.
//!
//! Run with: `cargo run -p listwindow --example two_views`

use listwindow::{ScrollController, WindowConfig};

fn main() {
    let table_config = WindowConfig::new(48).unwrap();
    let card_config = WindowConfig::new(160).unwrap().with_overscan(2);

    let mut table = ScrollController::new(table_config, 600).unwrap();
    let mut cards = ScrollController::new(card_config, 600).unwrap();

    let items: Vec<u32> = (0..100_000).collect();
    table.set_count(items.len());
    cards.set_count(items.len());

    // The same user gesture lands on both containers at different offsets.
    table.set_scroll_offset(9_600);
    cards.set_scroll_offset(3_200);

    let t = table.slice(&items);
    let c = cards.slice(&items);
    println!(
        "table: {} rows starting at #{} (translate {})",
        t.len(),
        t.start_index,
        t.translate_offset
    );
    println!(
        "cards: {} cards starting at #{} (translate {})",
        c.len(),
        c.start_index,
        c.translate_offset
    );

    // Resizing one viewport leaves the other untouched.
    table.set_viewport_height(300);
    assert_eq!(cards.viewport_height(), 600);
    println!("table after resize: {} rows", table.slice(&items).len());
}
