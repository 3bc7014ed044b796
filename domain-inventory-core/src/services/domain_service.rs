//! 域名管理服务

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    BulkDeleteFailure, BulkDeleteResult, CreateDomainRequest, DomainRecord, ListDomainsParams,
};

/// 域名管理服务
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Identifier of the backing store, used as a log prefix
    #[must_use]
    pub fn store_id(&self) -> &'static str {
        self.ctx.domain_store.id()
    }

    /// 列出所有域名（重复 ID 只保留第一条）
    pub async fn list_domains(&self) -> CoreResult<Vec<DomainRecord>> {
        let records = self
            .ctx
            .domain_store
            .list_domains(&ListDomainsParams::default())
            .await?;

        let mut seen = HashSet::new();
        Ok(records
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect())
    }

    /// 创建域名
    ///
    /// 名称在发送前会被规范化（去空白、小写），空名称直接拒绝。
    pub async fn create_domain(&self, name: &str) -> CoreResult<DomainRecord> {
        let request = CreateDomainRequest::new(name);
        if request.name.is_empty() {
            return Err(CoreError::ValidationError(
                "Domain name is required".to_string(),
            ));
        }

        let record = self.ctx.domain_store.create_domain(&request).await?;
        log::info!("Domain added: {}", record.name);
        Ok(record)
    }

    /// 删除单个域名
    pub async fn delete_domain(&self, id: &str) -> CoreResult<()> {
        self.ctx.domain_store.delete_domain(id).await?;
        log::info!("Domain {id} removed");
        Ok(())
    }

    /// 批量删除域名
    ///
    /// 所有请求并发发出，等待全部完成后汇总；不会因为某一项失败而提前返回。
    pub async fn delete_domains(&self, ids: &[String]) -> BulkDeleteResult {
        // 并行删除所有域名
        let delete_futures: Vec<_> = ids
            .iter()
            .map(|id| {
                let store = self.ctx.domain_store.clone();
                let id = id.clone();
                async move {
                    match store.delete_domain(&id).await {
                        Ok(()) => Ok(id),
                        Err(e) => Err((id, e)),
                    }
                }
            })
            .collect();

        let results = futures::future::join_all(delete_futures).await;

        let mut deleted = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(id) => deleted.push(id),
                Err((id, e)) => {
                    if e.is_expected() {
                        log::warn!("Failed to delete domain {id}: {e}");
                    } else {
                        log::error!("Failed to delete domain {id}: {e}");
                    }
                    failures.push(BulkDeleteFailure {
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        BulkDeleteResult {
            requested: ids.to_vec(),
            deleted,
            failures,
        }
    }
}
