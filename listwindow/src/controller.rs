use core::cell::Cell;

use crate::{ConfigError, RenderSlice, Window, WindowConfig, calculator};

/// Memoization key: the full set of inputs [`calculator::compute`] depends on,
/// including the config fields that are immutable for a controller's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MemoKey {
    scroll_offset: u64,
    viewport_height: u32,
    count: usize,
    item_height: u32,
    overscan: usize,
}

/// A stateful wrapper around the window calculator.
///
/// Owns the current scroll offset and viewport height, recomputes the window
/// on read, and exposes the materialized slice plus positioning metadata to
/// the rendering layer. Everything is synchronous: the window returned by
/// [`ScrollController::window`] always reflects the most recent setter calls.
///
/// Two controllers never share memoized state, so independent lists on one
/// screen (say, a table of short rows next to a column of tall cards) each get
/// their own instance with their own config.
#[derive(Clone, Debug)]
pub struct ScrollController {
    config: WindowConfig,
    scroll_offset: u64,
    viewport_height: u32,
    count: usize,
    memo: Cell<Option<(MemoKey, Window)>>,
}

impl ScrollController {
    /// Creates a controller for a viewport of `viewport_height` pixels.
    ///
    /// A zero viewport height at construction is a configuration error; the
    /// window definition would be meaningless. Zero heights reported later by
    /// [`ScrollController::set_viewport_height`] (mid-resize measurements) are
    /// tolerated and clamped by the calculator instead.
    pub fn new(config: WindowConfig, viewport_height: u32) -> Result<Self, ConfigError> {
        if viewport_height == 0 {
            return Err(ConfigError::ZeroViewportHeight);
        }
        wdebug!(
            item_height = config.item_height(),
            overscan = config.overscan(),
            viewport_height,
            "ScrollController::new"
        );
        Ok(Self {
            config,
            scroll_offset: 0,
            viewport_height,
            count: 0,
            memo: Cell::new(None),
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Records a new scroll offset. No-op when the offset is unchanged, so
    /// rapid-fire duplicate scroll events cost nothing.
    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        wtrace!(offset, "set_scroll_offset");
        self.scroll_offset = offset;
    }

    /// Like [`ScrollController::set_scroll_offset`], but clamps to
    /// [`ScrollController::max_scroll_offset`] first. Useful for hosts whose
    /// scroll momentum can overshoot content bounds.
    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = offset.min(self.max_scroll_offset());
        self.set_scroll_offset(clamped);
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        if self.viewport_height == viewport_height {
            return;
        }
        wtrace!(viewport_height, "set_viewport_height");
        self.viewport_height = viewport_height;
    }

    /// Records a new collection length (e.g. a filter shrank the collection).
    ///
    /// The next read clamps the window to the new bounds; stale indices beyond
    /// the new length are never returned.
    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        wtrace!(count, "set_count");
        self.count = count;
    }

    /// Largest scroll offset that still shows a full viewport of content.
    pub fn max_scroll_offset(&self) -> u64 {
        let total = self.count as u64 * self.config.item_height() as u64;
        total.saturating_sub(self.viewport_height as u64)
    }

    /// Returns the current window, recomputing only when an input changed.
    ///
    /// Idempotent: two reads with no intervening setter return identical
    /// windows (and hit the memo).
    pub fn window(&self) -> Window {
        self.window_for_count(self.count)
    }

    /// Materializes the window over `items`, applying the run-length cap.
    ///
    /// The window is computed against `items.len()`, not the stored count, so
    /// the collection reference may change between reads (the surrounding
    /// state owner may replace it wholesale) and the slice stays in bounds.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> RenderSlice<'a, T> {
        let window = self.window_for_count(items.len());
        let bounds = window.slice_bounds();
        RenderSlice {
            start_index: bounds.start,
            items: &items[bounds],
            total_extent: window.total_extent,
            translate_offset: window.translate_offset,
        }
    }

    fn window_for_count(&self, count: usize) -> Window {
        let key = MemoKey {
            scroll_offset: self.scroll_offset,
            viewport_height: self.viewport_height,
            count,
            item_height: self.config.item_height(),
            overscan: self.config.overscan(),
        };
        if let Some((cached_key, cached)) = self.memo.get() {
            if cached_key == key {
                return cached;
            }
        }
        let window = calculator::compute(self.scroll_offset, self.viewport_height, &self.config, count);
        self.memo.set(Some((key, window)));
        window
    }
}
