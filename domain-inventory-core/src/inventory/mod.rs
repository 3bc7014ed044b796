//! 域名库存状态机
//!
//! [`Inventory`] is a plain value changed only through
//! [`Inventory::dispatch`]. A transition may ask for remote work by
//! returning an [`Effect`]; the caller runs it (see
//! [`InventoryService`](crate::services::InventoryService)) and dispatches
//! the resulting completion message, in whatever order completions arrive.

mod dialog;
mod message;
mod state;
mod view;

pub use dialog::{AddDomainDialog, DialogField, DialogPhase, CREATE_FAILED_FALLBACK, EMPTY_NAME_ERROR};
pub use message::{CreateFailure, Effect, InventoryMessage};
pub use state::{filter_visible, InventoryState};
pub use view::{
    ActionButton, DialogView, DomainRow, InventoryView, SelectAllState, EMPTY_FILTER_MESSAGE,
};

use crate::types::DomainRecord;

/// Inventory plus the add-domain dialog.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub domains: InventoryState,
    pub dialog: AddDomainDialog,
}

impl Inventory {
    pub fn new(records: Vec<DomainRecord>) -> Self {
        Self {
            domains: InventoryState::new(records),
            dialog: AddDomainDialog::default(),
        }
    }

    /// Apply one message. Returns the remote work to start, if any.
    pub fn dispatch(&mut self, msg: InventoryMessage) -> Option<Effect> {
        match msg {
            InventoryMessage::SetSearchTerm(term) => {
                self.domains.set_search_term(term);
                None
            }
            InventoryMessage::ToggleSelection(id) => {
                self.domains.toggle_selection(&id);
                None
            }
            InventoryMessage::SelectAllVisible(checked) => {
                self.domains.select_all_visible(checked);
                None
            }
            InventoryMessage::DeleteDomain(id) => self
                .domains
                .begin_delete(&id)
                .then_some(Effect::DeleteDomain { id }),
            InventoryMessage::DeleteSelected => self
                .domains
                .begin_bulk_delete()
                .map(|ids| Effect::DeleteDomains { ids }),
            InventoryMessage::VerifyDomain(id) => {
                self.domains
                    .record(&id)
                    .cloned()
                    .map(|record| Effect::QueueVerification { record })
            }
            InventoryMessage::ValidateBySupport => self
                .domains
                .begin_support_validation()
                .then_some(Effect::ValidateBySupport),
            InventoryMessage::OpenAddDialog => {
                self.dialog.open();
                None
            }
            InventoryMessage::UpdateDialogName(value) => {
                self.dialog.update_name(value);
                None
            }
            InventoryMessage::SubmitAddDialog => self
                .dialog
                .begin_submit()
                .map(|name| Effect::CreateDomain { name }),
            InventoryMessage::CancelAddDialog => {
                self.dialog.cancel();
                None
            }
            InventoryMessage::DeleteFinished { id, result } => {
                self.domains.finish_delete(&id, result.is_ok());
                None
            }
            InventoryMessage::BulkDeleteFinished(result) => {
                self.domains.finish_bulk_delete(&result);
                None
            }
            InventoryMessage::CreateFinished(Ok(record)) => {
                self.domains.insert_created(record);
                self.dialog.finish_success();
                None
            }
            InventoryMessage::CreateFinished(Err(failure)) => {
                self.dialog.finish_failure(failure.message);
                None
            }
            InventoryMessage::SupportValidationFinished => {
                self.domains.finish_support_validation();
                None
            }
        }
    }
}
