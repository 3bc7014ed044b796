use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CreateDomainRequest, DomainRecord, ListDomainsParams};

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 域名（用于 `DomainExists`）
    pub name: Option<String>,
    /// 域名 ID（用于 `DomainNotFound`）
    pub id: Option<String>,
}

impl ErrorContext {
    pub fn for_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            id: None,
        }
    }

    pub fn for_id(id: &str) -> Self {
        Self {
            name: None,
            id: Some(id.to_string()),
        }
    }
}

/// Remote domain store.
///
/// Every call either confirms the operation or fails with a
/// [`StoreError`](crate::StoreError); callers only mutate local state after
/// confirmation.
#[async_trait]
pub trait DomainStore: Send + Sync {
    /// Store identifier, used as a log prefix.
    fn id(&self) -> &'static str;

    /// Fetch the current domain list.
    async fn list_domains(&self, params: &ListDomainsParams) -> Result<Vec<DomainRecord>>;

    /// Create a domain and return the record as persisted by the store.
    async fn create_domain(&self, request: &CreateDomainRequest) -> Result<DomainRecord>;

    /// Delete a domain by id.
    async fn delete_domain(&self, id: &str) -> Result<()>;
}
