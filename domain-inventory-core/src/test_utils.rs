//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use domain_inventory_store::{DomainStore, Result as StoreResult, StoreError};
use tokio::sync::{Notify, RwLock};

use crate::services::ServiceContext;
use crate::types::{
    CreateDomainRequest, DomainRecord, DomainStatus, InventorySettings, ListDomainsParams,
};

/// `alpha.com`, `beta.net` (verified), `gamma.io`
pub fn seed_records() -> Vec<DomainRecord> {
    vec![
        DomainRecord::new("d1", "alpha.com", DomainStatus::Pending),
        DomainRecord::new("d2", "beta.net", DomainStatus::Verified),
        DomainRecord::new("d3", "gamma.io", DomainStatus::Pending),
    ]
}

// ===== MockDomainStore =====

pub struct MockDomainStore {
    domains: RwLock<Vec<DomainRecord>>,
    /// 删除这些 ID 时返回错误
    failing_deletes: RwLock<HashSet<String>>,
    /// 删除这些 ID 时先等待放行（用于控制完成顺序）
    delete_gates: RwLock<HashMap<String, Arc<Notify>>>,
    /// 如果 Some，list 时返回此错误
    list_error: RwLock<Option<StoreError>>,
    /// 如果 Some，create 时返回此错误
    create_error: RwLock<Option<StoreError>>,
    /// 如果 Some，下一次 create 返回此记录
    next_created: RwLock<Option<DomainRecord>>,
    delete_calls: RwLock<Vec<String>>,
    create_calls: RwLock<Vec<String>>,
    next_id: AtomicU32,
}

impl MockDomainStore {
    pub fn new(domains: Vec<DomainRecord>) -> Self {
        let next_id = u32::try_from(domains.len()).unwrap_or(0) + 1;
        Self {
            domains: RwLock::new(domains),
            failing_deletes: RwLock::new(HashSet::new()),
            delete_gates: RwLock::new(HashMap::new()),
            list_error: RwLock::new(None),
            create_error: RwLock::new(None),
            next_created: RwLock::new(None),
            delete_calls: RwLock::new(Vec::new()),
            create_calls: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(next_id),
        }
    }

    pub async fn fail_delete(&self, id: &str) {
        self.failing_deletes.write().await.insert(id.to_string());
    }

    /// Deletes of `id` block until the returned handle is notified.
    pub async fn hold_delete(&self, id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.delete_gates
            .write()
            .await
            .insert(id.to_string(), gate.clone());
        gate
    }

    pub async fn set_list_error(&self, err: Option<StoreError>) {
        *self.list_error.write().await = err;
    }

    pub async fn set_create_error(&self, err: Option<StoreError>) {
        *self.create_error.write().await = err;
    }

    pub async fn set_next_created(&self, record: DomainRecord) {
        *self.next_created.write().await = Some(record);
    }

    pub async fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.read().await.clone()
    }

    pub async fn create_calls(&self) -> Vec<String> {
        self.create_calls.read().await.clone()
    }

    pub async fn domains(&self) -> Vec<DomainRecord> {
        self.domains.read().await.clone()
    }
}

#[async_trait]
impl DomainStore for MockDomainStore {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_domains(&self, _params: &ListDomainsParams) -> StoreResult<Vec<DomainRecord>> {
        if let Some(err) = self.list_error.read().await.clone() {
            return Err(err);
        }
        Ok(self.domains.read().await.clone())
    }

    async fn create_domain(&self, request: &CreateDomainRequest) -> StoreResult<DomainRecord> {
        self.create_calls.write().await.push(request.name.clone());
        if let Some(err) = self.create_error.read().await.clone() {
            return Err(err);
        }

        let mut domains = self.domains.write().await;
        if domains.iter().any(|d| d.name == request.name) {
            return Err(StoreError::DomainExists {
                name: request.name.clone(),
                raw_message: Some("Value must be unique".to_string()),
            });
        }

        let record = match self.next_created.write().await.take() {
            Some(record) => record,
            None => DomainRecord::new(
                format!("d{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
                request.name.clone(),
                DomainStatus::Pending,
            ),
        };
        domains.insert(0, record.clone());
        Ok(record)
    }

    async fn delete_domain(&self, id: &str) -> StoreResult<()> {
        self.delete_calls.write().await.push(id.to_string());

        let gate = self.delete_gates.read().await.get(id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.failing_deletes.read().await.contains(id) {
            return Err(StoreError::ServerError {
                status: 500,
                raw_message: Some("Failed to delete domain".to_string()),
            });
        }

        let mut domains = self.domains.write().await;
        let before = domains.len();
        domains.retain(|d| d.id != id);
        if domains.len() == before {
            return Err(StoreError::DomainNotFound {
                id: id.to_string(),
                raw_message: None,
            });
        }
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用的 `ServiceContext`，同时返回 mock 存储以便断言
pub fn create_test_context(
    domains: Vec<DomainRecord>,
) -> (Arc<ServiceContext>, Arc<MockDomainStore>) {
    create_test_context_with_settings(
        domains,
        InventorySettings {
            support_validation_delay: std::time::Duration::from_millis(10),
        },
    )
}

pub fn create_test_context_with_settings(
    domains: Vec<DomainRecord>,
    settings: InventorySettings,
) -> (Arc<ServiceContext>, Arc<MockDomainStore>) {
    let store = Arc::new(MockDomainStore::new(domains));
    let ctx = Arc::new(ServiceContext::new(store.clone(), settings));
    (ctx, store)
}
