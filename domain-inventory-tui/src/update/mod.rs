//! Update 层：状态更新
//!
//! 接收 AppMessage，修改 Model，并把需要的后台工作返回给主循环：
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Option<Effect>
//!                                                      ↑↑↑↑↑↑↑↑↑↑↑↑↑↑
//!                                                      主循环交给 CoreService::spawn
//!
//!     content.rs      表格、搜索框 → InventoryMessage
//!     modal.rs        添加域名弹窗 → InventoryMessage
//!
//! 所有业务状态变化都经由 `Inventory::dispatch`，这里不直接改 Inventory 的字段。

mod content;
mod modal;

use domain_inventory_core::{Effect, InventoryMessage};

use crate::message::AppMessage;
use crate::model::{App, Focus};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Effect> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::FocusSearch => {
            app.focus = Focus::Search;
            None
        }

        AppMessage::LeaveSearch => {
            app.focus = Focus::Table;
            None
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Completed(done) => {
            report_completion(app, &done);
            dispatch(app, done)
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}

/// 交给状态机，然后修正光标
fn dispatch(app: &mut App, msg: InventoryMessage) -> Option<Effect> {
    let effect = app.inventory.dispatch(msg);
    app.clamp_cursor();
    effect
}

/// 后台完成时更新状态栏
fn report_completion(app: &mut App, done: &InventoryMessage) {
    match done {
        InventoryMessage::DeleteFinished { id, result } => match result {
            Ok(()) => app.set_status(format!("Domain {id} removed")),
            Err(reason) => app.set_status(format!("Failed to delete domain {id}: {reason}")),
        },
        InventoryMessage::BulkDeleteFinished(result) => {
            if result.is_complete() {
                app.set_status("Selected domains deleted");
            } else {
                app.set_status(format!(
                    "Failed to delete selected domains: {} of {} failed",
                    result.failures.len(),
                    result.requested.len()
                ));
            }
        }
        InventoryMessage::CreateFinished(Ok(record)) => {
            app.set_status(format!("Domain added: {}", record.name));
        }
        InventoryMessage::SupportValidationFinished => {
            app.set_status("Support validation completed");
        }
        _ => {}
    }
}
