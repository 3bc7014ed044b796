//! 域名列表页面

use domain_inventory_core::inventory::{ActionButton, DomainRow, SelectAllState};
use domain_inventory_core::types::DomainStatus;
use domain_inventory_core::InventoryView;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::colors;

const DELETING_LABEL: &str = "Deleting…";

/// 渲染域名列表页面
pub fn render(app: &App, view: &InventoryView, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 搜索框
            Constraint::Min(1),    // 表格
            Constraint::Length(1), // 底部按钮
        ])
        .split(area);

    render_search(app, view, frame, chunks[0]);

    if let Some(message) = view.empty_message {
        render_empty(message, frame, chunks[1]);
    } else {
        render_table(app, view, frame, chunks[1]);
    }

    render_actions(view, frame, chunks[2]);
}

/// 整页提示（未登录等）
pub fn render_notice(notice: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {notice}"), Style::default().fg(c.warning)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_search(app: &App, view: &InventoryView, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus.is_search();
    let border_style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let text = if view.search_term.is_empty() && !focused {
        Span::styled("Press / to search domains", Style::default().fg(c.muted))
    } else {
        Span::styled(view.search_term.as_str(), Style::default().fg(c.fg))
    };

    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(search, area);

    if focused {
        let offset = u16::try_from(view.search_term.width()).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            area.x.saturating_add(1).saturating_add(offset),
            area.y + 1,
        ));
    }
}

/// 渲染空状态
fn render_empty(message: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_table(app: &App, view: &InventoryView, frame: &mut Frame, area: Rect) {
    let c = colors();

    let header = Row::new(vec![
        Cell::from(select_all_marker(view.select_all)),
        Cell::from("Domain"),
        Cell::from("Status"),
        Cell::from(""),
    ])
    .style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view.rows.iter().map(domain_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(22),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .row_highlight_style(c.cursor_row());

    let mut state = TableState::default();
    state.select(Some(app.cursor));

    frame.render_stateful_widget(table, area, &mut state);
}

fn domain_row(row: &DomainRow) -> Row<'_> {
    let c = colors();

    let status_color = match row.status {
        DomainStatus::Verified => c.success,
        DomainStatus::Pending => c.warning,
    };

    let action = if row.deleting {
        Cell::from(Span::styled(DELETING_LABEL, Style::default().fg(c.error)))
    } else {
        Cell::from("")
    };

    let name_style = if row.can_delete {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(c.muted)
    };

    Row::new(vec![
        Cell::from(if row.selected { "[x]" } else { "[ ]" }),
        Cell::from(Span::styled(row.name.as_str(), name_style)),
        Cell::from(Span::styled(row.status_label, Style::default().fg(status_color))),
        action,
    ])
}

fn select_all_marker(state: SelectAllState) -> &'static str {
    match state {
        SelectAllState::Unchecked => "[ ]",
        SelectAllState::Indeterminate => "[-]",
        SelectAllState::Checked => "[x]",
    }
}

/// 底部按钮
fn render_actions(view: &InventoryView, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = Vec::new();
    for (key, button) in [
        ("D", &view.bulk_delete),
        ("s", &view.support_validation),
        ("n", &view.add_domain),
    ] {
        spans.extend(button_spans(key, button));
        spans.push(Span::raw("  "));
    }
    if view.selected_count > 0 {
        spans.push(Span::styled(
            format!("{} selected", view.selected_count),
            Style::default().fg(c.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn button_spans(key: &'static str, button: &ActionButton) -> [Span<'static>; 2] {
    let c = colors();
    [
        Span::styled(format!(" {key} "), Style::default().fg(c.muted)),
        Span::styled(format!("[{}]", button.label), c.button(button.enabled)),
    ]
}
