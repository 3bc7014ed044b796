//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作和后台完成都通过 Message 来表达，Update 层据此更新 Model。
//!
//!     app.rs          AppMessage，主消息
//!     content.rs      内容面板（表格、搜索框）的子消息
//!     modal.rs        添加域名弹窗的子消息
//!
//! 两个来源：
//!     Event 层        handle_event(event, &app) -> AppMessage
//!     CoreService     后台完成的 InventoryMessage 包成 AppMessage::Completed

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
