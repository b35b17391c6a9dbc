//! Gallery screen: the office photo strip.
//!
//! Terminal "photos" are framed placeholder cards carrying their caption;
//! the strip shares the carousel engine with the services rail, just with
//! a deeper clone buffer.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::i18n::{t, t_list};
use crate::state::AppState;
use crate::theme::theme;

use super::helpers::{dots_line, render_rail};

const PHOTO_WIDTH: u16 = 30;
const PHOTO_GAP: u16 = 2;

/// Render the gallery screen.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.page_rows = area.height;
    let th = theme();
    let captions = t_list(app, "gallery.captions");

    let header = Rect { height: 1.min(area.height), ..area };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            t(app, "gallery.title"),
            Style::default().fg(th.brand).add_modifier(Modifier::BOLD),
        ))),
        header,
    );

    let rail_h = 12u16.min(area.height.saturating_sub(2));
    let rail_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: rail_h,
    };
    render_rail(
        f,
        &mut app.gallery_rail,
        rail_area,
        PHOTO_WIDTH,
        PHOTO_GAP,
        |f, logical, card, active| {
            let border = if active { th.brand } else { th.border };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border));
            f.render_widget(block, card);
            let inner = Rect {
                x: card.x + 1,
                y: card.y + 1,
                width: card.width.saturating_sub(2),
                height: card.height.saturating_sub(2),
            };
            if inner.width == 0 || inner.height < 3 {
                return;
            }
            // Placeholder "print" texture with the caption beneath it.
            let texture_rows = inner.height.saturating_sub(2);
            let mut lines: Vec<Line> = (0..texture_rows)
                .map(|row| {
                    let fill = if row % 2 == 0 { "░" } else { "▒" };
                    Line::from(Span::styled(
                        fill.repeat(inner.width as usize),
                        Style::default().fg(th.brand_dim),
                    ))
                })
                .collect();
            lines.push(Line::default());
            lines.push(
                Line::from(Span::styled(
                    captions.get(logical).cloned().unwrap_or_default(),
                    Style::default().fg(th.subtext),
                ))
                .centered(),
            );
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        },
    );

    if area.height > rail_h + 1 {
        let dots = Rect {
            x: area.x,
            y: area.y + 1 + rail_h,
            width: area.width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(dots_line(app.gallery_rail.rail.n(), app.gallery_rail.current())),
            dots,
        );
    }
}
