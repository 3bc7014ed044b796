//! 类型定义模块

mod response;
mod settings;

pub use response::{BulkDeleteFailure, BulkDeleteResult};
pub use settings::InventorySettings;

// Re-export 存储库的公共类型
pub use domain_inventory_store::{
    normalize_domain_name, CreateDomainRequest, DomainRecord, DomainStatus, ListDomainsParams,
};
