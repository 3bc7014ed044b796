use serde::{Deserialize, Serialize};

// ============ Domain ============

/// Verification state of a domain.
///
/// Serialized lowercase (`"pending"` / `"verified"`). Defaults to
/// [`Pending`](Self::Pending), which is also what the store assumes when a
/// document carries no status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    #[default]
    Pending,
    Verified,
}

impl DomainStatus {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
        }
    }

    /// Label shown next to a domain in listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending Verification",
        }
    }

    /// Lenient parse used for store documents: anything other than
    /// `"verified"` counts as pending.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("verified") => Self::Verified,
            _ => Self::Pending,
        }
    }
}

/// A domain held in the inventory.
///
/// `id` is assigned by the store and never changes; `name` is stored
/// normalized (see [`normalize_domain_name`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: DomainStatus,
}

impl DomainRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: DomainStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
        }
    }
}

/// Request body for creating a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomainRequest {
    pub name: String,
}

impl CreateDomainRequest {
    /// Builds a request with the name already normalized.
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_domain_name(name),
        }
    }
}

/// Canonical form of a user-entered domain name: surrounding whitespace
/// removed, lowercased.
pub fn normalize_domain_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ============ Listing ============

/// Parameters for the initial listing.
///
/// # Default
///
/// The default is `limit = 250`, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDomainsParams {
    /// Maximum number of documents to fetch.
    pub limit: u32,
    /// Sort expression understood by the store (`-field` for descending).
    pub sort: String,
}

impl Default for ListDomainsParams {
    fn default() -> Self {
        Self {
            limit: 250,
            sort: "-createdAt".to_string(),
        }
    }
}
