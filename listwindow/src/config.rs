/// Default number of extra items rendered beyond the visible range, per side.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Errors raised when a window definition is meaningless.
///
/// These are configuration mistakes the consumer must prevent, so they are
/// rejected at construction time instead of being silently clamped. Transient
/// runtime anomalies (overscrolled offsets, a viewport measured as zero during
/// a resize) are clamped and never reported through this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("item height must be positive")]
    ZeroItemHeight,
    #[error("viewport height must be positive")]
    ZeroViewportHeight,
}

/// Configuration for a [`crate::ScrollController`].
///
/// Immutable for the controller's lifetime: changing the item height changes
/// the offset↔index mapping wholesale, so it requires a new controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    item_height: u32,
    overscan: usize,
}

impl WindowConfig {
    /// Creates a config for rows of a uniform `item_height` (in pixels).
    ///
    /// Overscan defaults to [`DEFAULT_OVERSCAN`].
    pub fn new(item_height: u32) -> Result<Self, ConfigError> {
        if item_height == 0 {
            return Err(ConfigError::ZeroItemHeight);
        }
        Ok(Self {
            item_height,
            overscan: DEFAULT_OVERSCAN,
        })
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }
}
