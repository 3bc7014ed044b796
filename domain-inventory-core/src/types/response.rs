//! 批量操作结果类型定义

use serde::{Deserialize, Serialize};

/// 批量删除中单个失败项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteFailure {
    /// 域名 ID
    pub id: String,
    /// 失败原因
    pub reason: String,
}

/// 批量删除结果
///
/// `requested` 是发起时的快照，`deleted` 与 `failures` 按完成顺序记录。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResult {
    /// 请求删除的域名 ID
    pub requested: Vec<String>,
    /// 已确认删除的域名 ID
    pub deleted: Vec<String>,
    /// 失败项
    pub failures: Vec<BulkDeleteFailure>,
}

impl BulkDeleteResult {
    /// 是否全部成功（空请求视为成功）
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
