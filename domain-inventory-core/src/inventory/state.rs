//! 库存状态：记录、搜索、多选与删除进度

use std::collections::HashSet;

use crate::types::{BulkDeleteResult, DomainRecord};

/// Records whose name contains `term` (trimmed, case-insensitive), in
/// their original order. A blank term matches everything.
pub fn filter_visible<'a>(records: &'a [DomainRecord], term: &str) -> Vec<&'a DomainRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Locally held inventory.
///
/// Records only change once the store has confirmed an operation.
/// Selections survive filter changes and may refer to rows that are
/// currently hidden.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    records: Vec<DomainRecord>,
    search_term: String,
    selected_ids: HashSet<String>,
    /// Ids with an outstanding single-row delete.
    pending_deletes: HashSet<String>,
    bulk_delete_in_flight: bool,
    support_validation_in_flight: bool,
}

impl InventoryState {
    /// Build from the initial listing; duplicate ids keep their first
    /// occurrence.
    pub fn new(records: Vec<DomainRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect();
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[DomainRecord] {
        &self.records
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selected_ids
    }

    pub fn pending_deletes(&self) -> &HashSet<String> {
        &self.pending_deletes
    }

    pub fn is_bulk_deleting(&self) -> bool {
        self.bulk_delete_in_flight
    }

    pub fn is_validating_support(&self) -> bool {
        self.support_validation_in_flight
    }

    pub fn record(&self, id: &str) -> Option<&DomainRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.pending_deletes.contains(id)
    }

    // ===== Filter =====

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn visible(&self) -> Vec<&DomainRecord> {
        filter_visible(&self.records, &self.search_term)
    }

    // ===== Selection =====

    /// Flip one id. Unknown ids are accepted and simply never match a row.
    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
    }

    /// Select or deselect every visible row; hidden rows keep their state.
    pub fn select_all_visible(&mut self, checked: bool) {
        let visible_ids: Vec<String> = self.visible().iter().map(|r| r.id.clone()).collect();
        if checked {
            self.selected_ids.extend(visible_ids);
        } else {
            for id in &visible_ids {
                self.selected_ids.remove(id);
            }
        }
    }

    pub fn all_visible_selected(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|r| self.selected_ids.contains(&r.id))
    }

    pub fn any_visible_selected(&self) -> bool {
        self.visible()
            .iter()
            .any(|r| self.selected_ids.contains(&r.id))
    }

    // ===== Single delete =====

    /// Whether a delete for this row may start now.
    pub fn can_delete(&self, id: &str) -> bool {
        !self.bulk_delete_in_flight && !self.pending_deletes.contains(id)
    }

    /// Mark `id` as being deleted. Returns `false` when the row is unknown,
    /// already being deleted, or a bulk delete is running.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if !self.can_delete(id) || self.record(id).is_none() {
            return false;
        }
        self.pending_deletes.insert(id.to_string())
    }

    /// Apply the store's answer to a single delete.
    pub fn finish_delete(&mut self, id: &str, succeeded: bool) {
        self.pending_deletes.remove(id);
        if succeeded {
            self.records.retain(|r| r.id != id);
            self.selected_ids.remove(id);
        }
    }

    // ===== Bulk delete =====

    /// Selected ids without a single delete of their own outstanding.
    fn bulk_delete_candidates(&self) -> impl Iterator<Item = &String> {
        self.selected_ids
            .iter()
            .filter(|id| !self.pending_deletes.contains(*id))
    }

    /// Whether a bulk delete would send at least one request right now.
    pub fn can_bulk_delete(&self) -> bool {
        !self.bulk_delete_in_flight && self.bulk_delete_candidates().next().is_some()
    }

    /// Snapshot the ids to delete and raise the in-flight flag.
    ///
    /// Rows that already have a single delete outstanding are left to it.
    /// Returns `None` (no-op) unless [`can_bulk_delete`](Self::can_bulk_delete).
    pub fn begin_bulk_delete(&mut self) -> Option<Vec<String>> {
        if !self.can_bulk_delete() {
            return None;
        }
        let mut ids: Vec<String> = self.bulk_delete_candidates().cloned().collect();
        // keep request order stable: list order first, then unknown ids
        ids.sort_by_key(|id| {
            self.records
                .iter()
                .position(|r| &r.id == id)
                .unwrap_or(usize::MAX)
        });
        self.bulk_delete_in_flight = true;
        Some(ids)
    }

    /// Commit a bulk delete only if every sub-request succeeded.
    pub fn finish_bulk_delete(&mut self, result: &BulkDeleteResult) {
        self.bulk_delete_in_flight = false;
        if !result.is_complete() {
            return;
        }
        let removed: HashSet<&str> = result.requested.iter().map(String::as_str).collect();
        self.records.retain(|r| !removed.contains(r.id.as_str()));
        self.selected_ids.clear();
    }

    // ===== Add =====

    /// Prepend a confirmed record and clear the whole selection.
    pub fn insert_created(&mut self, record: DomainRecord) {
        self.records.retain(|r| r.id != record.id);
        self.records.insert(0, record);
        self.selected_ids.clear();
    }

    // ===== Support validation =====

    pub fn begin_support_validation(&mut self) -> bool {
        if self.support_validation_in_flight {
            return false;
        }
        self.support_validation_in_flight = true;
        true
    }

    pub fn finish_support_validation(&mut self) {
        self.support_validation_in_flight = false;
    }
}
