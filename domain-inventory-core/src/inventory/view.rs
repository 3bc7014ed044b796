//! 视图模型：把库存状态投影成界面需要的数据

use crate::types::DomainStatus;

use super::dialog::DialogField;
use super::Inventory;

pub const EMPTY_FILTER_MESSAGE: &str = "No domains match this filter.";

const BULK_DELETE_LABEL: &str = "Delete Selected Domains";
const BULK_DELETE_BUSY_LABEL: &str = "Deleting…";
const SUPPORT_LABEL: &str = "Validate by Support";
const SUPPORT_BUSY_LABEL: &str = "Validating…";
const ADD_LABEL: &str = "Add Domain";
const ADD_BUSY_LABEL: &str = "Adding…";

/// Tri-state of the "select all visible" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRow {
    pub id: String,
    pub name: String,
    pub status: DomainStatus,
    pub status_label: &'static str,
    pub selected: bool,
    /// A single delete for this row is outstanding.
    pub deleting: bool,
    pub can_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub name_input: String,
    pub error: Option<String>,
    pub submit: ActionButton,
    pub can_cancel: bool,
    pub focus: Option<DialogField>,
}

/// Everything a presentation surface needs to draw the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub search_term: String,
    pub rows: Vec<DomainRow>,
    pub select_all: SelectAllState,
    pub selected_count: usize,
    pub empty_message: Option<&'static str>,
    pub bulk_delete: ActionButton,
    pub support_validation: ActionButton,
    pub add_domain: ActionButton,
    pub dialog: Option<DialogView>,
}

impl Inventory {
    pub fn view(&self) -> InventoryView {
        let domains = &self.domains;
        let rows: Vec<DomainRow> = domains
            .visible()
            .into_iter()
            .map(|r| DomainRow {
                id: r.id.clone(),
                name: r.name.clone(),
                status: r.status,
                status_label: r.status.label(),
                selected: domains.is_selected(&r.id),
                deleting: domains.is_deleting(&r.id),
                can_delete: domains.can_delete(&r.id),
            })
            .collect();

        let select_all = if domains.all_visible_selected() {
            SelectAllState::Checked
        } else if domains.any_visible_selected() {
            SelectAllState::Indeterminate
        } else {
            SelectAllState::Unchecked
        };

        let bulk_deleting = domains.is_bulk_deleting();
        let validating = domains.is_validating_support();

        let dialog = self.dialog.is_open().then(|| {
            let submitting = self.dialog.is_submitting();
            DialogView {
                name_input: self.dialog.name_input().to_string(),
                error: self.dialog.error().map(str::to_string),
                submit: ActionButton {
                    label: if submitting { ADD_BUSY_LABEL } else { ADD_LABEL },
                    enabled: !submitting,
                },
                can_cancel: !submitting,
                focus: self.dialog.focus(),
            }
        });

        InventoryView {
            search_term: domains.search_term().to_string(),
            empty_message: rows.is_empty().then_some(EMPTY_FILTER_MESSAGE),
            rows,
            select_all,
            selected_count: domains.selected_ids().len(),
            bulk_delete: ActionButton {
                label: if bulk_deleting {
                    BULK_DELETE_BUSY_LABEL
                } else {
                    BULK_DELETE_LABEL
                },
                enabled: domains.can_bulk_delete(),
            },
            support_validation: ActionButton {
                label: if validating {
                    SUPPORT_BUSY_LABEL
                } else {
                    SUPPORT_LABEL
                },
                enabled: !validating,
            },
            add_domain: ActionButton {
                label: ADD_LABEL,
                enabled: true,
            },
            dialog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryMessage;
    use crate::test_utils::seed_records;

    #[test]
    fn rows_follow_filter_with_labels() {
        let mut inv = Inventory::new(seed_records());
        inv.dispatch(InventoryMessage::SetSearchTerm("BETA".into()));
        let view = inv.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "beta.net");
        assert_eq!(view.rows[0].status_label, "Verified");
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn empty_filter_shows_message() {
        let mut inv = Inventory::new(seed_records());
        inv.dispatch(InventoryMessage::SetSearchTerm("nothing".into()));
        let view = inv.view();
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_message, Some(EMPTY_FILTER_MESSAGE));
        assert_eq!(view.select_all, SelectAllState::Unchecked);
    }

    #[test]
    fn select_all_tri_state() {
        let mut inv = Inventory::new(seed_records());
        assert_eq!(inv.view().select_all, SelectAllState::Unchecked);
        inv.dispatch(InventoryMessage::ToggleSelection("d1".into()));
        assert_eq!(inv.view().select_all, SelectAllState::Indeterminate);
        inv.dispatch(InventoryMessage::SelectAllVisible(true));
        assert_eq!(inv.view().select_all, SelectAllState::Checked);
    }

    #[test]
    fn buttons_reflect_busy_flags() {
        let mut inv = Inventory::new(seed_records());
        let idle = inv.view();
        assert_eq!(idle.bulk_delete.label, "Delete Selected Domains");
        assert!(!idle.bulk_delete.enabled);
        assert_eq!(idle.support_validation.label, "Validate by Support");
        assert!(idle.support_validation.enabled);

        inv.dispatch(InventoryMessage::SelectAllVisible(true));
        assert!(inv.view().bulk_delete.enabled);

        inv.dispatch(InventoryMessage::DeleteSelected);
        inv.dispatch(InventoryMessage::ValidateBySupport);
        let busy = inv.view();
        assert_eq!(busy.bulk_delete.label, "Deleting…");
        assert!(!busy.bulk_delete.enabled);
        assert_eq!(busy.support_validation.label, "Validating…");
        assert!(!busy.support_validation.enabled);
        assert!(busy.rows.iter().all(|r| !r.can_delete));
    }

    #[test]
    fn bulk_button_disabled_when_selection_is_already_deleting() {
        let mut inv = Inventory::new(seed_records());
        inv.dispatch(InventoryMessage::ToggleSelection("d1".into()));
        assert!(inv.view().bulk_delete.enabled);

        inv.dispatch(InventoryMessage::DeleteDomain("d1".into()));
        let view = inv.view();
        assert_eq!(view.selected_count, 1);
        assert_eq!(view.bulk_delete.label, "Delete Selected Domains");
        assert!(!view.bulk_delete.enabled);
        assert_eq!(inv.dispatch(InventoryMessage::DeleteSelected), None);
    }

    #[test]
    fn pending_row_is_marked() {
        let mut inv = Inventory::new(seed_records());
        inv.dispatch(InventoryMessage::DeleteDomain("d3".into()));
        let view = inv.view();
        let row = view.rows.iter().find(|r| r.id == "d3").unwrap();
        assert!(row.deleting);
        assert!(!row.can_delete);
        assert!(view.rows.iter().filter(|r| r.id != "d3").all(|r| r.can_delete));
    }

    #[test]
    fn dialog_projection() {
        let mut inv = Inventory::new(seed_records());
        assert!(inv.view().dialog.is_none());

        inv.dispatch(InventoryMessage::OpenAddDialog);
        inv.dispatch(InventoryMessage::UpdateDialogName("delta.com".into()));
        let editing = inv.view().dialog.unwrap();
        assert_eq!(editing.submit.label, "Add Domain");
        assert!(editing.can_cancel);
        assert_eq!(editing.focus, Some(DialogField::Name));

        inv.dispatch(InventoryMessage::SubmitAddDialog);
        let submitting = inv.view().dialog.unwrap();
        assert_eq!(submitting.submit.label, "Adding…");
        assert!(!submitting.submit.enabled);
        assert!(!submitting.can_cancel);
    }
}
