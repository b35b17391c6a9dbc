//! Provider directory and individual profiles.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::i18n::t;
use crate::insurance::{PROVIDERS, provider_by_id};
use crate::state::AppState;
use crate::theme::theme;

use super::helpers::panel;

/// Render the providers screen: the list, or one open profile.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.page_rows = area.height;
    match app.provider_detail.and_then(provider_by_id) {
        Some(p) => render_profile(f, app, area, p),
        None => render_list(f, app, area),
    }
}

fn render_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    f.render_widget(panel(&t(app, "provider.title")), area);
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let mut lines: Vec<Line> = Vec::new();
    for (i, p) in PROVIDERS.iter().enumerate() {
        let selected = i == app.provider_selected;
        let marker = if selected { "› " } else { "  " };
        let name_style = if selected {
            Style::default().fg(th.brand).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(th.accent)),
            Span::styled(p.name.to_string(), name_style),
            Span::raw("  "),
            Span::styled(t(app, p.specialty_key), Style::default().fg(th.subtext)),
            Span::raw("  "),
            Span::styled(
                p.languages.join(" · "),
                Style::default().fg(th.faint),
            ),
        ]));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        t(app, "provider.accepting"),
        Style::default().fg(th.success),
    )));
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_profile(
    f: &mut Frame,
    app: &mut AppState,
    area: Rect,
    p: &crate::insurance::Provider,
) {
    let th = theme();
    f.render_widget(panel(p.name), area);
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let mut lines = vec![
        Line::from(Span::styled(
            t(app, p.specialty_key),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(t(app, p.bio_key), Style::default().fg(th.text))),
        Line::default(),
        Line::from(Span::styled(
            t(app, "provider.plans"),
            Style::default().fg(th.brand).add_modifier(Modifier::BOLD),
        )),
    ];
    let plans = crate::insurance::search(Some(p.id), "");
    lines.push(Line::from(Span::styled(
        plans.join(" · "),
        Style::default().fg(th.subtext),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        t(app, "provider.back"),
        Style::default().fg(th.faint),
    )));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
