//! About screen: clinic history, mission, values, and animated statistics.

use std::time::Instant;

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::{t, t_list};
use crate::state::{AppState, Section};
use crate::theme::theme;

use super::helpers::{panel, paragraph, reveal_style, section_rect};

const BODY: (u16, u16) = (0, 8);
const MISSION: (u16, u16) = (9, 6);
const VALUES: (u16, u16) = (16, 8);
const STATS: (u16, u16) = (25, 6);

/// Render the about screen.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.page_rows = STATS.0 + STATS.1 + 1;
    app.record_section(Section::AboutBody, BODY.0, BODY.1);
    app.record_section(Section::AboutValues, VALUES.0, VALUES.1);
    app.record_section(Section::AboutStats, STATS.0, STATS.1);
    let now = Instant::now();

    if let Some(rect) = section_rect(area, BODY.0, BODY.1, app.scroll_top) {
        let progress = app.reveal_about.progress(now);
        f.render_widget(panel(&t(app, "about.title")), rect);
        paragraph(f, &t(app, "about.body"), reveal_style(progress), inset(rect));
    }
    if let Some(rect) = section_rect(area, MISSION.0, MISSION.1, app.scroll_top) {
        f.render_widget(panel(&t(app, "about.mission.title")), rect);
        paragraph(
            f,
            &t(app, "about.mission.body"),
            Style::default().fg(theme().subtext),
            inset(rect),
        );
    }
    if let Some(rect) = section_rect(area, VALUES.0, VALUES.1, app.scroll_top) {
        render_values(f, app, rect, now);
    }
    if let Some(rect) = section_rect(area, STATS.0, STATS.1, app.scroll_top) {
        render_stats(f, app, rect, now);
    }
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    }
}

fn render_values(f: &mut Frame, app: &mut AppState, area: Rect, now: Instant) {
    let progress = app.reveal_values.progress(now);
    f.render_widget(panel(&t(app, "about.values.title")), area);
    let values = t_list(app, "about.values");
    let lines: Vec<Line> = values
        .iter()
        .map(|v| Line::from(Span::styled(format!("✓ {v}"), reveal_style(progress))))
        .collect();
    f.render_widget(Paragraph::new(lines), inset(area));
}

fn render_stats(f: &mut Frame, app: &mut AppState, area: Rect, now: Instant) {
    let th = theme();
    f.render_widget(panel(""), area);
    let labels = [
        t(app, "about.stats.years"),
        t(app, "about.stats.patients"),
        t(app, "about.stats.providers"),
    ];
    let inner = inset(area);
    let col_w = inner.width / 3;
    for (i, (stat, label)) in app.stats.iter().zip(labels.iter()).enumerate() {
        let col = Rect {
            x: inner.x + col_w * i as u16,
            y: inner.y,
            width: col_w.min(inner.width.saturating_sub(col_w * i as u16)),
            height: inner.height,
        };
        if col.width == 0 {
            continue;
        }
        let value = Line::from(Span::styled(
            stat.value(now).to_string(),
            Style::default().fg(th.brand).add_modifier(Modifier::BOLD),
        ))
        .centered();
        let caption = Line::from(Span::styled(
            label.clone(),
            Style::default().fg(th.faint),
        ))
        .centered();
        f.render_widget(Paragraph::new(vec![value, caption]), col);
    }
}
