//! 快捷键映射

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift，终端对大写字母是否带 Shift 标记并不统一。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers - KeyModifiers::SHIFT
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 搜索
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const CLEAR_SEARCH: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));

    // 选择
    pub const TOGGLE_ROW: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const TOGGLE_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('a'));

    // 操作
    pub const ACTION_ADD: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const ACTION_ADD_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const ACTION_DELETE_SELECTED: KeyBinding = KeyBinding::key(KeyCode::Char('D'));
    pub const ACTION_VERIFY: KeyBinding = KeyBinding::key(KeyCode::Char('v'));
    pub const ACTION_SUPPORT: KeyBinding = KeyBinding::key(KeyCode::Char('s'));

    // 弹窗
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
