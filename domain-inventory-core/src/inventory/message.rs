//! 库存消息与副作用定义

use crate::error::CoreError;
use crate::types::{BulkDeleteResult, DomainRecord};

/// Everything that can change an [`Inventory`](super::Inventory): user
/// intents and completions of remote calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryMessage {
    // ===== Intents =====
    SetSearchTerm(String),
    ToggleSelection(String),
    SelectAllVisible(bool),
    DeleteDomain(String),
    DeleteSelected,
    VerifyDomain(String),
    ValidateBySupport,
    OpenAddDialog,
    UpdateDialogName(String),
    SubmitAddDialog,
    CancelAddDialog,

    // ===== Completions =====
    DeleteFinished {
        id: String,
        /// `Err` carries the failure reason.
        result: Result<(), String>,
    },
    BulkDeleteFinished(BulkDeleteResult),
    CreateFinished(Result<DomainRecord, CreateFailure>),
    SupportValidationFinished,
}

/// Why a create failed, reduced to what the dialog shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFailure {
    /// Message supplied by the store, if any.
    pub message: Option<String>,
}

impl From<&CoreError> for CreateFailure {
    fn from(err: &CoreError) -> Self {
        Self {
            message: err.server_message().map(str::to_string),
        }
    }
}

/// Remote work requested by a transition. Completions come back as
/// [`InventoryMessage`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    DeleteDomain { id: String },
    DeleteDomains { ids: Vec<String> },
    CreateDomain { name: String },
    /// Fire-and-forget; produces no completion.
    QueueVerification { record: DomainRecord },
    ValidateBySupport,
}
