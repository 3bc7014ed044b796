//! 应用主消息枚举

use domain_inventory_core::InventoryMessage;

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到搜索框
    FocusSearch,

    /// 离开搜索框，回到表格
    LeaveSearch,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台副作用完成
    Completed(InventoryMessage),

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
