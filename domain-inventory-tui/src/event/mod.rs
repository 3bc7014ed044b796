//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!     handler.rs      poll_event / handle_event
//!     keymap.rs       快捷键绑定
//!
//! 分发顺序：
//!     1. 只处理 Press 事件
//!     2. 添加域名弹窗打开时，按键全部交给弹窗（Esc 关闭，Enter 提交，字符输入）
//!     3. Ctrl+c 退出
//!     4. 焦点在搜索框：字符进入搜索词，Esc / Enter 回到表格
//!     5. 焦点在表格：
//!             /           搜索
//!             ↑↓ j k      移动光标
//!             Space       勾选光标行
//!             a           全选 / 全不选可见行
//!             d           删除光标行
//!             D           删除已选
//!             v           验证光标行
//!             s           支持验证
//!             n / Alt+a   添加域名
//!             q           退出

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
