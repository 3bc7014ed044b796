//! 应用主状态

use domain_inventory_core::{CoreError, Inventory};
use domain_inventory_store::StoreError;

use super::Focus;

/// 未登录时显示的提示
pub const SIGN_IN_NOTICE: &str = "Please sign in to manage your content.";

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: Focus,

    /// 库存状态机
    pub inventory: Inventory,

    /// 光标在可见行中的位置
    pub cursor: usize,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 替代表格显示的提示（例如未登录）
    pub notice: Option<&'static str>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(inventory: Inventory) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Table,
            inventory,
            cursor: 0,
            status_message: None,
            notice: None,
        }
    }

    /// 未登录：空列表加提示
    pub fn signed_out() -> Self {
        let mut app = Self::new(Inventory::default());
        app.notice = Some(SIGN_IN_NOTICE);
        app
    }

    /// 初始加载失败：未授权显示登录提示，其余写入状态栏
    pub fn load_failed(err: &CoreError) -> Self {
        if matches!(err, CoreError::Store(StoreError::Unauthorized { .. })) {
            return Self::signed_out();
        }
        let mut app = Self::default();
        if err.is_transport() {
            app.set_status(format!("Unable to reach the domain store: {err}"));
        } else {
            app.set_status(format!("Failed to load domains: {err}"));
        }
        app
    }

    /// 光标所在行的记录 ID
    pub fn cursor_id(&self) -> Option<String> {
        self.inventory
            .domains
            .visible()
            .get(self.cursor)
            .map(|r| r.id.clone())
    }

    pub fn visible_len(&self) -> usize {
        self.inventory.domains.visible().len()
    }

    /// 可见行变化后把光标拉回范围内
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Inventory::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_load_shows_sign_in_notice() {
        let app = App::load_failed(&CoreError::from(StoreError::Unauthorized {
            raw_message: None,
        }));
        assert_eq!(app.notice, Some(SIGN_IN_NOTICE));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn unreachable_store_is_reported_as_such() {
        let app = App::load_failed(&CoreError::from(StoreError::NetworkError {
            detail: "connection refused".into(),
        }));
        assert!(app.notice.is_none());
        let status = app.status_message.unwrap();
        assert!(status.starts_with("Unable to reach the domain store"), "{status}");
    }

    #[test]
    fn server_failure_keeps_generic_status() {
        let app = App::load_failed(&CoreError::from(StoreError::ServerError {
            status: 500,
            raw_message: None,
        }));
        let status = app.status_message.unwrap();
        assert!(status.starts_with("Failed to load domains"), "{status}");
    }
}
