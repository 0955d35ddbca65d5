//! User-directory collection utilities for the `listwindow` crate.
//!
//! `listwindow` is the windowing core and never owns or mutates the
//! collection. This crate provides the collection-owner side of that boundary
//! for a user-directory screen:
//!
//! - user records with roles
//! - search / role filtering and pagination over a directory
//! - per-view wiring of a selection to a scroll controller
//!
//! It is framework-neutral: a UI layer supplies scroll offsets and viewport
//! heights, and renders whatever [`listwindow::RenderSlice`] hands back.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod directory;
mod query;
mod record;
mod view;

#[cfg(test)]
mod tests;

pub use directory::Directory;
pub use query::{DEFAULT_PER_PAGE, DirectoryQuery, Pagination, RoleFilter};
pub use record::{Role, RoleParseError, UserRecord};
pub use view::{DirectoryView, ViewMode};
