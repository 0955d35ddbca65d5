use core::ops::Range;

/// Upper bound on the number of items materialized from a single window.
///
/// Applied when slicing, independent of overscan: even if overscan or viewport
/// math produces an unexpectedly large window, at most this many items are
/// handed to the rendering layer. Part of the contract, not an incidental
/// optimization — see [`Window::slice_bounds`].
pub const MAX_MATERIALIZED: usize = 250;

/// The contiguous index range of a collection currently materialized for
/// rendering, plus the positioning metadata the rendering layer needs.
///
/// Produced by [`crate::calculator::compute`]. `end_index` is inclusive; both
/// indexes are clamped to `[0, count - 1]`. When `count == 0` the window is
/// empty and both indexes are zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    /// Inclusive.
    pub end_index: usize,
    /// Collection length this window was computed against.
    pub count: usize,
    /// Full scrollable height implied by the entire collection, in pixels.
    pub total_extent: u64,
    /// Pixel offset at which to position the rendered run inside the
    /// full-extent spacer. Always `start_index * item_height`.
    pub translate_offset: u64,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of items in the window run (before the materialization cap).
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end_index - self.start_index + 1
        }
    }

    /// The index range to actually materialize.
    ///
    /// `start_index..start_index + 250` when the collection extends more than
    /// [`MAX_MATERIALIZED`] items past `end_index`, else
    /// `start_index..end_index + 1`. The cap can under-render when overscan
    /// pushes `end_index` far past `start_index + 250`; that asymmetry is
    /// deliberate and load-bearing for consumers that size buffers to the cap.
    pub fn slice_bounds(&self) -> Range<usize> {
        if self.is_empty() {
            return 0..0;
        }
        if self.count > self.end_index + MAX_MATERIALIZED {
            self.start_index..self.start_index + MAX_MATERIALIZED
        } else {
            self.start_index..self.end_index + 1
        }
    }
}

/// Output handed to the rendering layer: the materialized items plus where to
/// put them.
///
/// The consumer renders a spacer element of height `total_extent`, positions a
/// content block at `translate_offset`, and renders only `items` inside it.
#[derive(Debug)]
pub struct RenderSlice<'a, T> {
    pub items: &'a [T],
    /// Collection index of `items[0]`.
    pub start_index: usize,
    pub total_extent: u64,
    pub translate_offset: u64,
}

impl<T> Clone for RenderSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderSlice<'_, T> {}

impl<T: PartialEq> PartialEq for RenderSlice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
            && self.start_index == other.start_index
            && self.total_extent == other.total_extent
            && self.translate_offset == other.translate_offset
    }
}

impl<'a, T> RenderSlice<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates the materialized items paired with their collection indexes.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &'a T)> {
        let start = self.start_index;
        self.items.iter().enumerate().map(move |(i, it)| (start + i, it))
    }
}
