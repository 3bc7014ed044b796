//! 焦点状态定义

/// 当前接收输入的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 域名表格
    #[default]
    Table,
    /// 搜索框
    Search,
}

impl Focus {
    pub fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }
}
