//! View 层：UI 渲染
//!
//! 只读取 Model，从不修改。业务数据一律取自 `Inventory::view()` 的投影，
//! 文案（按钮、状态、空列表提示）与核心库保持一致。
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ 标题栏                                        │
//!     ├──────────────────────────────────────────────┤
//!     │ ┌ Domains ─────────────────────────────────┐ │
//!     │ │ 搜索框                                    │ │
//!     │ │ 表格：[ ] / 名称 / 状态 / 操作            │ │
//!     │ │ 底部按钮                                  │ │
//!     │ └──────────────────────────────────────────┘ │
//!     ├──────────────────────────────────────────────┤
//!     │ 状态栏：快捷键提示 + 状态消息                 │
//!     └──────────────────────────────────────────────┘
//!
//! 添加域名弹窗最后绘制，覆盖在最上层。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
