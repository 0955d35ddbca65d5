//! A headless fixed-height windowing engine for virtualized lists.
//!
//! Given a large ordered collection and a visible viewport, this crate computes
//! which contiguous slice of items to materialize so that rendering cost stays
//! bounded regardless of collection size.
//!
//! Two cooperating pieces form the core:
//! - [`calculator::compute`] — a pure function of (scroll offset, viewport
//!   height, config, collection length) → [`Window`]. No state, no side effects.
//! - [`ScrollController`] — a stateful wrapper that owns the current scroll
//!   offset, recomputes (and memoizes) the window on read, and hands the
//!   rendering layer a positioned [`RenderSlice`].
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport height (scroll container's client height)
//! - scroll offset updates (pixel offset of the scrollable container)
//! - a read-only, ordered view of the collection
//!
//! The consumer renders a spacer of height [`Window::total_extent`], positions
//! a content block at [`Window::translate_offset`], and renders only the items
//! in the slice. Item height is uniform and the scroll axis is vertical; for
//! variable heights or multi-axis grids you want a different engine.
//!
//! For the collection-owner side (records, filters, pagination), see the
//! `listwindow-directory` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod calculator;
mod config;
mod controller;
mod types;


pub use config::{ConfigError, DEFAULT_OVERSCAN, WindowConfig};
pub use controller::ScrollController;
pub use types::{MAX_MATERIALIZED, RenderSlice, Window};
