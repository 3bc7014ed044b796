//! 库存行为配置

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 默认支持验证耗时（毫秒）
const DEFAULT_SUPPORT_VALIDATION_DELAY_MS: u64 = 800;

/// Tunables for the inventory services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySettings {
    /// How long a support validation request takes to complete.
    pub support_validation_delay: Duration,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            support_validation_delay: Duration::from_millis(DEFAULT_SUPPORT_VALIDATION_DELAY_MS),
        }
    }
}
