//! 业务逻辑服务层

mod domain_service;
mod inventory_service;
mod support_service;

pub use domain_service::DomainService;
pub use inventory_service::InventoryService;
pub use support_service::SupportService;

use std::sync::Arc;

use domain_inventory_store::DomainStore;

use crate::types::InventorySettings;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入具体的远程存储实现。
pub struct ServiceContext {
    /// 远程域名存储
    pub domain_store: Arc<dyn DomainStore>,
    /// 行为配置
    pub settings: InventorySettings,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(domain_store: Arc<dyn DomainStore>, settings: InventorySettings) -> Self {
        Self {
            domain_store,
            settings,
        }
    }
}
