//! Model 层：应用状态
//!
//!     App {
//!         should_quit     是否退出
//!         focus           Table / Search
//!         inventory       domain-inventory-core 的 Inventory（记录、选择、删除进度、添加弹窗）
//!         cursor          光标所在的可见行
//!         status_message  状态栏消息
//!         notice          替代表格显示的提示
//!     }
//!
//! 业务状态全部放在 Inventory 里，只能经 `Inventory::dispatch` 修改；
//! 这里只保存纯界面状态。

mod app;
mod focus;

pub use app::{App, SIGN_IN_NOTICE};
pub use focus::Focus;
