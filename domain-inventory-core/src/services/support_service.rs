//! 验证与支持服务

use std::sync::Arc;

use crate::services::ServiceContext;
use crate::types::DomainRecord;

/// Verification requests and support validation.
///
/// Neither operation changes a domain's status; status only changes on the
/// store side and shows up on the next listing.
pub struct SupportService {
    ctx: Arc<ServiceContext>,
}

impl SupportService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 提交验证请求（不等待结果）
    #[allow(clippy::unused_self)]
    pub fn queue_verification(&self, record: &DomainRecord) {
        log::info!("Verification queued for {}", record.name);
    }

    /// 请求人工支持验证
    pub async fn validate_by_support(&self) {
        log::info!("Support validation requested");
        tokio::time::sleep(self.ctx.settings.support_validation_delay).await;
        log::info!("Support validation completed");
    }
}
