//! Minimal usage: one controller, a big collection, a few scroll events.
//!
//! Run with: `cargo run -p listwindow --example basic`

use listwindow::{ScrollController, WindowConfig};

fn main() {
    let config = WindowConfig::new(60).expect("positive item height");
    let mut controller = ScrollController::new(config, 600).expect("positive viewport");

    let items: Vec<String> = (0..5000).map(|i| format!("row #{i}")).collect();
    controller.set_count(items.len());

    for offset in [0u64, 6_000, 150_000, u64::MAX] {
        controller.set_scroll_offset_clamped(offset);
        let window = controller.window();
        let slice = controller.slice(&items);
        println!(
            "offset={:>7} window=[{}..={}] extent={} translate={} materialized={}",
            controller.scroll_offset(),
            window.start_index,
            window.end_index,
            window.total_extent,
            window.translate_offset,
            slice.len(),
        );
    }
}
