//! Spin history: newest-first, capped ledger of outcomes.

use super::types::SpinRecord;
use crate::core::constants::HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: VecDeque<SpinRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored records (newest first), dropping anything past the cap
    pub fn from_records(records: Vec<SpinRecord>) -> Self {
        let mut records: VecDeque<SpinRecord> = records.into();
        records.truncate(HISTORY_LIMIT);
        Self { records }
    }

    /// Record a completed spin at the head of the ledger.
    /// The oldest entry is evicted once the ledger is full.
    pub fn append(&mut self, record: SpinRecord) {
        self.records.push_front(record);
        self.records.truncate(HISTORY_LIMIT);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest(&self) -> Option<&SpinRecord> {
        self.records.front()
    }

    /// All records, newest first
    pub fn iter(&self) -> impl Iterator<Item = &SpinRecord> {
        self.records.iter()
    }

    /// A player's most recent wins, newest first
    pub fn wins_for(&self, player_id: &str, limit: usize) -> Vec<&SpinRecord> {
        self.records
            .iter()
            .filter(|r| r.selected_owner_id == player_id)
            .take(limit)
            .collect()
    }
}
