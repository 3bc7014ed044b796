//! 添加域名弹窗消息处理

use domain_inventory_core::{Effect, InventoryMessage};

use super::dispatch;
use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Effect> {
    if !app.inventory.dialog.is_open() {
        return None;
    }
    let submitting = app.inventory.dialog.is_submitting();

    match msg {
        ModalMessage::Close => dispatch(app, InventoryMessage::CancelAddDialog),
        ModalMessage::Confirm => dispatch(app, InventoryMessage::SubmitAddDialog),
        // 提交中输入框只读
        ModalMessage::Input(_) | ModalMessage::Backspace if submitting => None,
        ModalMessage::Input(ch) => {
            let mut name = app.inventory.dialog.name_input().to_string();
            name.push(ch);
            dispatch(app, InventoryMessage::UpdateDialogName(name))
        }
        ModalMessage::Backspace => {
            let mut name = app.inventory.dialog.name_input().to_string();
            name.pop();
            dispatch(app, InventoryMessage::UpdateDialogName(name))
        }
    }
}
