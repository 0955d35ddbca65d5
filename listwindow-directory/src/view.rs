use listwindow::{ConfigError, RenderSlice, ScrollController, WindowConfig};

/// How a list is rendered on screen. Each mode implies a different uniform
/// item height, so each mode gets its own controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    Table,
    Card,
}

/// One on-screen list: a view mode plus its own scroll controller.
///
/// A directory screen typically keeps two of these alive (a table of short
/// rows and a card layout) and flips between them; each keeps its own scroll
/// offset, viewport, and memoized window, so switching back does not lose
/// position.
#[derive(Clone, Debug)]
pub struct DirectoryView {
    mode: ViewMode,
    controller: ScrollController,
}

impl DirectoryView {
    pub fn new(mode: ViewMode, config: WindowConfig, viewport_height: u32) -> Result<Self, ConfigError> {
        let controller = ScrollController::new(config, viewport_height)?;
        Ok(Self { mode, controller })
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn controller(&self) -> &ScrollController {
        &self.controller
    }

    /// Scroll event from the host container. Offsets past the content end are
    /// clamped; momentum overshoot is expected and never an error.
    pub fn on_scroll(&mut self, offset: u64) {
        dtrace!(offset, mode = ?self.mode, "DirectoryView::on_scroll");
        self.controller.set_scroll_offset_clamped(offset);
    }

    /// The host re-measured the scroll container.
    pub fn on_resize(&mut self, viewport_height: u32) {
        self.controller.set_viewport_height(viewport_height);
    }

    /// Tells the view how long the current selection is. Call after the query
    /// or the underlying directory changed.
    pub fn sync_count(&mut self, len: usize) {
        self.controller.set_count(len);
    }

    /// Materializes the window over the current selection.
    pub fn rows<'a, T>(&self, items: &'a [T]) -> RenderSlice<'a, T> {
        self.controller.slice(items)
    }
}
