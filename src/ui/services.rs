//! Services screen: the infinite card rail, pagination dots, and the
//! detail side panel.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::i18n::{t, t_services};
use crate::state::AppState;
use crate::theme::theme;

use super::helpers::{dots_line, panel, render_rail};

/// Card geometry in cells.
const CARD_WIDTH: u16 = 26;
const CARD_GAP: u16 = 2;

/// Render the services screen.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.page_rows = area.height;
    let th = theme();
    let services = t_services(app, "services.items");

    let header = Rect { height: 2.min(area.height), ..area };
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                t(app, "services.title"),
                Style::default().fg(th.brand).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                t(app, "services.subtitle"),
                Style::default().fg(th.faint),
            )),
        ]),
        header,
    );

    let rail_h = 10u16.min(area.height.saturating_sub(3));
    let rail_area = Rect {
        x: area.x,
        y: area.y + 2,
        width: area.width,
        height: rail_h,
    };
    render_rail(
        f,
        &mut app.services_rail,
        rail_area,
        CARD_WIDTH,
        CARD_GAP,
        |f, logical, card, active| {
            let Some(svc) = services.get(logical) else {
                return;
            };
            let border = if active { th.brand } else { th.border };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(th.surface));
            f.render_widget(block, card);
            let inner = Rect {
                x: card.x + 1,
                y: card.y + 1,
                width: card.width.saturating_sub(2),
                height: card.height.saturating_sub(2),
            };
            if inner.width == 0 || inner.height == 0 {
                return;
            }
            let mut lines = vec![
                Line::from(Span::styled(
                    svc.title.to_string(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    svc.description.to_string(),
                    Style::default().fg(th.subtext),
                )),
            ];
            if !svc.tags.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(
                    svc.tags
                        .iter()
                        .map(|tag| {
                            Span::styled(
                                format!("[{tag}] "),
                                Style::default().fg(th.accent),
                            )
                        })
                        .collect::<Vec<_>>(),
                ));
            }
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        },
    );

    if area.height > rail_h + 2 {
        let dots = Rect {
            x: area.x,
            y: area.y + 2 + rail_h,
            width: area.width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(dots_line(app.services_rail.rail.n(), app.services_rail.current())),
            dots,
        );
    }

    if let Some(key) = app.services_detail.clone()
        && let Some(svc) = services.iter().find(|s| s.key == key)
    {
        let top = 3 + rail_h + 1;
        if area.height > top {
            let detail = Rect {
                x: area.x,
                y: area.y + top,
                width: area.width,
                height: area.height - top,
            };
            f.render_widget(panel(svc.title), detail);
            let inner = Rect {
                x: detail.x + 2,
                y: detail.y + 1,
                width: detail.width.saturating_sub(4),
                height: detail.height.saturating_sub(2),
            };
            let body = svc.long_description.unwrap_or(svc.description);
            let mut lines = vec![Line::from(Span::styled(
                body.to_string(),
                Style::default().fg(th.text),
            ))];
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                t(app, "services.detail.hint"),
                Style::default().fg(th.faint),
            )));
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
    }
}
