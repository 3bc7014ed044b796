//! Backend 层：配置与业务服务
//!
//!     config_service.rs   配置文件加载 / 保存（AppConfig）
//!     core_service.rs     组装 domain-inventory-core，后台执行副作用
//!
//! 主循环从 CoreService 取回完成消息，再交给 Update 层。

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
