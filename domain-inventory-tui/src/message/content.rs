//! 内容面板消息

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 选择 ==========
    /// 勾选 / 取消光标行
    ToggleRow,
    /// 全选 / 全不选可见行
    ToggleAll,

    // ========== 操作 ==========
    /// 删除光标行
    DeleteRow,
    /// 删除所有已选
    DeleteSelected,
    /// 验证光标行
    VerifyRow,
    /// 请求支持验证
    ValidateBySupport,
    /// 打开添加域名弹窗
    OpenAdd,

    // ========== 搜索 ==========
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
}
