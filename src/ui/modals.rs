//! Modal overlay rendering: insurance lookup, language picker, alerts.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::i18n::{Lang, t, t_fmt};
use crate::state::{AppState, Modal};
use crate::theme::theme;

use super::helpers::{centered_rect, panel};

/// Render whichever modal is open, on top of the active screen.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    match app.modal.clone() {
        Modal::None => {}
        Modal::Insurance(look) => render_insurance(f, app, area, &look),
        Modal::Language { selected } => render_language(f, app, area, selected),
        Modal::Alert { message } => render_alert(f, app, area, &message),
    }
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    }
}

fn render_insurance(
    f: &mut Frame,
    app: &AppState,
    area: Rect,
    look: &crate::state::InsuranceLookup,
) {
    let th = theme();
    let boxed = centered_rect(area.width.saturating_sub(10).min(64), 18, area);
    f.render_widget(Clear, boxed);
    f.render_widget(panel(&t(app, "insurance.title")), boxed);
    let inner = inner(boxed);
    if inner.width == 0 {
        return;
    }
    let provider = look
        .provider_name()
        .map_or_else(|| t(app, "insurance.all_providers"), ToString::to_string);
    let results = look.results();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", t(app, "insurance.provider_label")),
                Style::default().fg(th.subtext),
            ),
            Span::styled(
                format!("‹ {provider} ›"),
                Style::default().fg(th.brand).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{}: ", t(app, "insurance.search_label")),
                Style::default().fg(th.subtext),
            ),
            Span::styled(look.query.clone(), Style::default().fg(th.text)),
            Span::styled("▏".to_string(), Style::default().fg(th.accent)),
        ]),
        Line::default(),
    ];
    if results.is_empty() {
        lines.push(Line::from(Span::styled(
            t(app, "insurance.no_results"),
            Style::default().fg(th.warning),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            t_fmt(app, "insurance.results", &[("count", &results.len())]),
            Style::default().fg(th.faint),
        )));
        let room = inner.height.saturating_sub(4) as usize;
        for plan in results.iter().take(room) {
            lines.push(Line::from(Span::styled(
                format!("  ✓ {plan}"),
                Style::default().fg(th.success),
            )));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        t(app, "insurance.hint"),
        Style::default().fg(th.faint),
    )));
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_language(f: &mut Frame, app: &AppState, area: Rect, selected: Lang) {
    let th = theme();
    let boxed = centered_rect(36, 7, area);
    f.render_widget(Clear, boxed);
    f.render_widget(panel(&t(app, "language.title")), boxed);
    let inner = inner(boxed);
    let mut lines = Vec::new();
    for lang in [Lang::En, Lang::Es] {
        let marker = if lang == selected { "› " } else { "  " };
        let style = if lang == selected {
            Style::default().fg(th.brand).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext)
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(th.accent)),
            Span::styled(lang.label().to_string(), style),
        ]));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_alert(f: &mut Frame, app: &AppState, area: Rect, message: &str) {
    let th = theme();
    let boxed = centered_rect(50, 7, area);
    f.render_widget(Clear, boxed);
    f.render_widget(panel(&t(app, "app.title")), boxed);
    f.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(th.danger))
            .wrap(Wrap { trim: true }),
        inner(boxed),
    );
}
