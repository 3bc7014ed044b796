//! `DomainStore` trait implementation

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::http_client::HttpUtils;
use crate::traits::{DomainStore, ErrorContext};
use crate::types::{CreateDomainRequest, DomainRecord, ListDomainsParams};

use super::HttpDomainStore;
use super::http::STORE_NAME;
use super::types::{ListResponse, WireDomain};

#[async_trait]
impl DomainStore for HttpDomainStore {
    fn id(&self) -> &'static str {
        STORE_NAME
    }

    async fn list_domains(&self, params: &ListDomainsParams) -> Result<Vec<DomainRecord>> {
        let mut url = self.collection_url()?;
        url.query_pairs_mut()
            .append_pair("depth", "0")
            .append_pair("limit", &params.limit.to_string())
            .append_pair("sort", &params.sort);

        let body = self.get(url, ErrorContext::default()).await?;
        let response: ListResponse = HttpUtils::parse_json(&body, self.id())?;

        let total = response.docs.len();
        let records: Vec<DomainRecord> = response
            .docs
            .into_iter()
            .filter_map(WireDomain::into_record)
            .collect();
        if records.len() < total {
            log::debug!(
                "[{}] Skipped {} documents without a usable id or name",
                self.id(),
                total - records.len()
            );
        }
        Ok(records)
    }

    async fn create_domain(&self, request: &CreateDomainRequest) -> Result<DomainRecord> {
        let url = self.collection_url()?;
        let body = self
            .post_json(url, request, ErrorContext::for_name(&request.name))
            .await?;
        let wire: WireDomain = HttpUtils::parse_json(&body, self.id())?;
        wire.into_record().ok_or_else(|| StoreError::ParseError {
            detail: "created document is missing id or name".to_string(),
        })
    }

    async fn delete_domain(&self, id: &str) -> Result<()> {
        let url = self.item_url(id)?;
        self.delete(url, ErrorContext::for_id(id)).await
    }
}
