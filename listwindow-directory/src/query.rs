use alloc::string::String;
use core::ops::Range;

use crate::{Role, UserRecord};

/// Default page size when paginating.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Role facet of a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn matches(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(r) => *r == role,
        }
    }
}

/// Pagination facet of a query.
///
/// `All` disables paging entirely — the mode a host switches to when it hands
/// the full selection to a virtualized list instead of page controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pagination {
    All,
    Pages {
        /// 1-based.
        page: usize,
        per_page: usize,
    },
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::Pages {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Search, role filter, and pagination state for a directory screen.
///
/// Mutators that change which records match (search, role, page size) reset
/// the current page to 1, so a narrowed selection never points at a page past
/// its own end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectoryQuery {
    search: String,
    role: RoleFilter,
    pagination: Pagination,
}

impl DirectoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn role(&self) -> RoleFilter {
        self.role
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.reset_page();
    }

    pub fn set_role(&mut self, role: RoleFilter) {
        self.role = role;
        self.reset_page();
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.pagination = Pagination::Pages {
            page: 1,
            per_page: per_page.max(1),
        };
    }

    pub fn set_page(&mut self, page: usize) {
        if let Pagination::Pages { per_page, .. } = self.pagination {
            self.pagination = Pagination::Pages {
                page: page.max(1),
                per_page,
            };
        }
    }

    pub fn show_all(&mut self) {
        self.pagination = Pagination::All;
    }

    fn reset_page(&mut self) {
        if let Pagination::Pages { per_page, .. } = self.pagination {
            self.pagination = Pagination::Pages { page: 1, per_page };
        }
    }

    /// Whether `record` passes the role filter and the search term.
    ///
    /// The search is a case-insensitive substring match against name or
    /// email; a blank search matches everything. The role check runs first
    /// since it is the cheaper test.
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.matches_needle(record, &self.needle())
    }

    pub(crate) fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    pub(crate) fn matches_needle(&self, record: &UserRecord, needle: &str) -> bool {
        if !self.role.matches(record.role) {
            return false;
        }
        if needle.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(needle)
            || record.email.to_lowercase().contains(needle)
    }

    /// Index range of the current page within a selection of `filtered_len`
    /// records. Clamped: a page past the end yields an empty range.
    pub fn page_bounds(&self, filtered_len: usize) -> Range<usize> {
        match self.pagination {
            Pagination::All => 0..filtered_len,
            Pagination::Pages { page, per_page } => {
                let start = (page.max(1) - 1).saturating_mul(per_page).min(filtered_len);
                let end = start.saturating_add(per_page).min(filtered_len);
                start..end
            }
        }
    }

    /// Number of pages a selection of `filtered_len` records spans (0 when
    /// the selection is empty).
    pub fn total_pages(&self, filtered_len: usize) -> usize {
        match self.pagination {
            Pagination::All => usize::from(filtered_len > 0),
            Pagination::Pages { per_page, .. } => filtered_len.div_ceil(per_page),
        }
    }
}
