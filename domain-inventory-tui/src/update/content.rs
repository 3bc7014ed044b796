//! 内容面板消息处理

use domain_inventory_core::{Effect, InventoryMessage};

use super::dispatch;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Effect> {
    match msg {
        ContentMessage::SelectPrevious => {
            app.cursor = app.cursor.saturating_sub(1);
            None
        }
        ContentMessage::SelectNext => {
            if app.cursor + 1 < app.visible_len() {
                app.cursor += 1;
            }
            None
        }
        ContentMessage::SelectFirst => {
            app.cursor = 0;
            None
        }
        ContentMessage::SelectLast => {
            app.cursor = app.visible_len().saturating_sub(1);
            None
        }

        ContentMessage::ToggleRow => {
            let id = app.cursor_id()?;
            dispatch(app, InventoryMessage::ToggleSelection(id))
        }
        ContentMessage::ToggleAll => {
            let checked = !app.inventory.domains.all_visible_selected();
            dispatch(app, InventoryMessage::SelectAllVisible(checked))
        }

        ContentMessage::DeleteRow => {
            let id = app.cursor_id()?;
            if !app.inventory.domains.can_delete(&id) {
                app.set_status("Delete already in progress");
                return None;
            }
            dispatch(app, InventoryMessage::DeleteDomain(id))
        }
        ContentMessage::DeleteSelected => {
            let effect = dispatch(app, InventoryMessage::DeleteSelected);
            let domains = &app.inventory.domains;
            if effect.is_none() && !domains.is_bulk_deleting() {
                let status = if domains.selected_ids().is_empty() {
                    "No domains selected"
                } else {
                    "Selected domains are already being deleted"
                };
                app.set_status(status);
            }
            effect
        }
        ContentMessage::VerifyRow => {
            let id = app.cursor_id()?;
            let effect = dispatch(app, InventoryMessage::VerifyDomain(id));
            if let Some(Effect::QueueVerification { record }) = &effect {
                app.set_status(format!("Verification queued for {}", record.name));
            }
            effect
        }
        ContentMessage::ValidateBySupport => {
            let effect = dispatch(app, InventoryMessage::ValidateBySupport);
            if effect.is_some() {
                app.set_status("Support validation requested");
            }
            effect
        }
        ContentMessage::OpenAdd => dispatch(app, InventoryMessage::OpenAddDialog),

        ContentMessage::SearchInput(ch) => {
            let mut term = app.inventory.domains.search_term().to_string();
            term.push(ch);
            set_search(app, term)
        }
        ContentMessage::SearchBackspace => {
            let mut term = app.inventory.domains.search_term().to_string();
            term.pop();
            set_search(app, term)
        }
        ContentMessage::ClearSearch => set_search(app, String::new()),
    }
}

fn set_search(app: &mut App, term: String) -> Option<Effect> {
    app.cursor = 0;
    dispatch(app, InventoryMessage::SetSearchTerm(term))
}
