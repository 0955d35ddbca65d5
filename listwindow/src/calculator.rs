//! Pure window computation.
//!
//! [`compute`] is a function of its inputs only: same inputs always yield the
//! same [`Window`]. The controller relies on this for memoization, and tests
//! rely on it for determinism.

use crate::{Window, WindowConfig};

/// Computes the render window for the given scroll state.
///
/// Integer division gives the floor of `scroll_offset / item_height`; the
/// start row is widened backwards by `overscan` and the end row forwards by
/// `overscan`, then both are clamped to `[0, count - 1]`.
///
/// Out-of-range scroll offsets are clamped rather than rejected: scroll
/// position can transiently exceed content bounds during fast scrolling or a
/// resize, so that is never an error. A `count` of zero yields an empty window
/// with zero extent regardless of the scroll offset.
pub fn compute(
    scroll_offset: u64,
    viewport_height: u32,
    config: &WindowConfig,
    count: usize,
) -> Window {
    let item_height = config.item_height() as u64;
    debug_assert!(item_height > 0, "WindowConfig guarantees a positive item height");

    let total_extent = count as u64 * item_height;
    if count == 0 {
        return Window {
            start_index: 0,
            end_index: 0,
            count: 0,
            total_extent: 0,
            translate_offset: 0,
        };
    }

    let overscan = config.overscan();
    let last = count - 1;

    let start_row = (scroll_offset / item_height) as usize;
    let start_index = start_row.saturating_sub(overscan).min(last);

    let end_row = (scroll_offset.saturating_add(viewport_height as u64) / item_height) as usize;
    let end_index = end_row.saturating_add(overscan).min(last);

    Window {
        start_index,
        end_index,
        count,
        total_extent,
        translate_offset: start_index as u64 * item_height,
    }
}
