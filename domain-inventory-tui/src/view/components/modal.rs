//! 添加域名弹窗

use domain_inventory_core::inventory::DialogView;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::view::theme::colors;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 10;

/// 渲染弹窗（居中，覆盖在最上层）
pub fn render(dialog: &DialogView, frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(frame.area(), MODAL_WIDTH, MODAL_HEIGHT);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Add Domain ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 输入框
            Constraint::Min(1),    // 错误信息
            Constraint::Length(1), // 按钮
        ])
        .split(inner);

    let input = Paragraph::new(dialog.name_input.as_str()).block(
        Block::default()
            .title(" Domain name ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if dialog.focus.is_some() {
                c.border_focused
            } else {
                c.border
            })),
    );
    frame.render_widget(input, rows[0]);

    if let Some(error) = &dialog.error {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(c.error))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, rows[1]);
    }

    let cancel_style = if dialog.can_cancel {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(c.muted)
    };
    let buttons = Line::from(vec![
        Span::styled(format!("[Enter] {}", dialog.submit.label), c.button(dialog.submit.enabled)),
        Span::raw("   "),
        Span::styled("[Esc] Cancel", cancel_style),
    ]);
    frame.render_widget(Paragraph::new(buttons), rows[2]);

    if dialog.submit.enabled {
        let offset = u16::try_from(dialog.name_input.width()).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            rows[0].x.saturating_add(1).saturating_add(offset),
            rows[0].y + 1,
        ));
    }
}

/// 计算居中区域，不超过外部区域
fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [area] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}
