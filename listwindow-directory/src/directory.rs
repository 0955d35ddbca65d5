use alloc::vec::Vec;

use crate::{DirectoryQuery, UserRecord};

/// Owns the user records and runs selections over them.
///
/// This is the only place records are mutated; the windowing side sees
/// read-only slices produced by [`Directory::select`].
#[derive(Clone, Debug, Default)]
pub struct Directory {
    records: Vec<UserRecord>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<UserRecord>) -> Self {
        ddebug!(count = records.len(), "Directory::from_records");
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn push(&mut self, record: UserRecord) {
        dtrace!(id = %record.id, "Directory::push");
        self.records.push(record);
    }

    /// Inserts a record at the front, where a freshly added user shows up
    /// first in the list.
    pub fn insert_front(&mut self, record: UserRecord) {
        dtrace!(id = %record.id, "Directory::insert_front");
        self.records.insert(0, record);
    }

    pub fn get_by_id(&self, id: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records passing the query's search and role filters, in directory
    /// order, before pagination.
    pub fn filter<'a>(&'a self, query: &DirectoryQuery) -> Vec<&'a UserRecord> {
        let needle = query.needle();
        self.records
            .iter()
            .filter(|r| query.matches_needle(r, &needle))
            .collect()
    }

    /// The full selection pipeline: filter, then cut the current page.
    ///
    /// With [`crate::Pagination::All`] this returns the whole filtered set,
    /// which is what gets handed to a virtualized list.
    pub fn select<'a>(&'a self, query: &DirectoryQuery) -> Vec<&'a UserRecord> {
        let filtered = self.filter(query);
        let bounds = query.page_bounds(filtered.len());
        filtered[bounds].to_vec()
    }
}
