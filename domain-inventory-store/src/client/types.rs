//! Wire types for `/api/domains`

use serde::Deserialize;
use serde_json::Value;

use crate::types::{DomainRecord, DomainStatus};

/// A domain document as the store returns it. Ids may be strings or
/// numbers depending on the database adapter.
#[derive(Debug, Deserialize)]
pub(crate) struct WireDomain {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub status: Option<String>,
}

impl WireDomain {
    /// Convert to a record; documents without an id or a non-empty string
    /// name are dropped.
    pub fn into_record(self) -> Option<DomainRecord> {
        let id = match self.id {
            Value::String(s) if !s.is_empty() => s,
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let name = match self.name {
            Value::String(s) if !s.is_empty() => s,
            _ => return None,
        };
        Some(DomainRecord {
            id,
            name,
            status: DomainStatus::from_wire(self.status.as_deref()),
        })
    }
}

/// Paginated listing envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(default)]
    pub docs: Vec<WireDomain>,
}
