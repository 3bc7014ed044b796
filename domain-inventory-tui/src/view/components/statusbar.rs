//! 状态栏

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

const TABLE_HINTS: &str = "/ search  Space select  a all  d delete  D delete selected  v verify  s support  n add  q quit";
const SEARCH_HINTS: &str = "type to filter  Ctrl+u clear  Esc done";
const DIALOG_HINTS: &str = "Enter add  Esc cancel";

/// 渲染状态栏：左侧状态消息，其后是当前上下文的快捷键提示
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let hints = if app.inventory.dialog.is_open() {
        DIALOG_HINTS
    } else if app.focus.is_search() {
        SEARCH_HINTS
    } else {
        TABLE_HINTS
    };

    let mut spans = Vec::new();
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(format!(" {message} "), Style::default().fg(c.selected_fg).bg(c.highlight)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(format!(" {hints}"), Style::default().fg(c.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
