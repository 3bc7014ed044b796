//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize 等事件下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 弹窗打开时优先处理弹窗输入
    if app.inventory.dialog.is_open() {
        return handle_modal_keys(key, app.inventory.dialog.is_submitting());
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.focus.is_search() {
        handle_search_keys(key)
    } else {
        handle_table_keys(key)
    }
}

/// 搜索框内的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::LeaveSearch;
    }
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearSearch);
    }

    match key.code {
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        KeyCode::Char(ch) if is_plain(&key) => {
            AppMessage::Content(ContentMessage::SearchInput(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 表格中的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    let bindings = [
        (DefaultKeymap::QUIT, AppMessage::Quit),
        (DefaultKeymap::SEARCH, AppMessage::FocusSearch),
        (DefaultKeymap::BACK, AppMessage::ClearStatus),
        (DefaultKeymap::TOGGLE_ROW, AppMessage::Content(ContentMessage::ToggleRow)),
        (DefaultKeymap::TOGGLE_ALL, AppMessage::Content(ContentMessage::ToggleAll)),
        (DefaultKeymap::ACTION_ADD, AppMessage::Content(ContentMessage::OpenAdd)),
        (DefaultKeymap::ACTION_ADD_ALT, AppMessage::Content(ContentMessage::OpenAdd)),
        (DefaultKeymap::ACTION_DELETE, AppMessage::Content(ContentMessage::DeleteRow)),
        (
            DefaultKeymap::ACTION_DELETE_SELECTED,
            AppMessage::Content(ContentMessage::DeleteSelected),
        ),
        (DefaultKeymap::ACTION_VERIFY, AppMessage::Content(ContentMessage::VerifyRow)),
        (
            DefaultKeymap::ACTION_SUPPORT,
            AppMessage::Content(ContentMessage::ValidateBySupport),
        ),
    ];
    if let Some((_, msg)) = bindings.into_iter().find(|(binding, _)| binding.matches(&key)) {
        return msg;
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
///
/// 提交中的弹窗不能关闭，此时 Ctrl+C 直接退出。
fn handle_modal_keys(key: KeyEvent, submitting: bool) -> AppMessage {
    if submitting && DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    // Esc 和 Ctrl+C 关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Modal(ModalMessage::Confirm);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch) if is_plain(&key) => AppMessage::Modal(ModalMessage::Input(ch)),
        _ => AppMessage::Noop,
    }
}

/// 无修饰键（Shift 除外）
fn is_plain(key: &KeyEvent) -> bool {
    (key.modifiers - KeyModifiers::SHIFT).is_empty()
}
