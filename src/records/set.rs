//! The session's record collection and its filters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::core::HierarchyLevel;

/// Multi-select filter over division, subdivision and level.
///
/// Each dimension matches any of its values; an empty dimension matches
/// everything. Dimensions combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub divisions: Vec<String>,
    pub subdivisions: Vec<String>,
    pub levels: Vec<HierarchyLevel>,
}

impl RecordFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty() && self.subdivisions.is_empty() && self.levels.is_empty()
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        (self.divisions.is_empty() || self.divisions.iter().any(|d| d == record.division()))
            && (self.subdivisions.is_empty()
                || self.subdivisions.iter().any(|s| s == record.subdivision()))
            && (self.levels.is_empty() || self.levels.contains(&record.hierarchy_level()))
    }
}

/// Records accumulated during one session, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.extend(records);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    /// Mutable access for manual edits; the record's setters keep its title
    /// consistent.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Record> {
        self.records.get_mut(idx)
    }

    /// Records passing `filter`, in insertion order.
    pub fn filtered<'a>(&'a self, filter: &'a RecordFilter) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |r| filter.matches(r))
    }

    /// Sorted unique division values.
    #[must_use]
    pub fn distinct_divisions(&self) -> Vec<&str> {
        self.distinct(Record::division)
    }

    /// Sorted unique subdivision values.
    #[must_use]
    pub fn distinct_subdivisions(&self) -> Vec<&str> {
        self.distinct(Record::subdivision)
    }

    /// Levels present in the set, lowest first.
    #[must_use]
    pub fn distinct_levels(&self) -> Vec<HierarchyLevel> {
        self.records
            .iter()
            .map(Record::hierarchy_level)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Count of records per level, lowest first, omitting absent levels.
    #[must_use]
    pub fn level_counts(&self) -> Vec<(HierarchyLevel, usize)> {
        let mut counts = [0usize; HierarchyLevel::ALL.len()];
        for record in &self.records {
            counts[record.hierarchy_level().rank()] += 1;
        }
        HierarchyLevel::all()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Record) -> &'a str) -> Vec<&'a str> {
        self.records
            .iter()
            .map(field)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
