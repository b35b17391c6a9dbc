//! Landing screen: staged hero banner, mission, and a services preview.

use std::time::Instant;

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::{t, t_list, t_services};
use crate::reveal::HeroStage;
use crate::state::{AppState, Section};
use crate::theme::theme;

use super::helpers::{dots_line, panel, paragraph, render_rail, reveal_style, section_rect};

/// Page rows occupied by each section (top, height).
const HERO: (u16, u16) = (0, 12);
const MISSION: (u16, u16) = (13, 7);
const PREVIEW: (u16, u16) = (21, 9);

/// Render the home screen.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.page_rows = PREVIEW.0 + PREVIEW.1 + 1;
    app.record_section(Section::Mission, MISSION.0, MISSION.1);
    app.record_section(Section::ServicesPreview, PREVIEW.0, PREVIEW.1);

    if let Some(rect) = section_rect(area, HERO.0, HERO.1, app.scroll_top) {
        render_hero(f, app, rect);
    }
    if let Some(rect) = section_rect(area, MISSION.0, MISSION.1, app.scroll_top) {
        render_mission(f, app, rect);
    }
    if let Some(rect) = section_rect(area, PREVIEW.0, PREVIEW.1, app.scroll_top) {
        render_preview(f, app, rect);
    }
}

/// The rotating banner with its staged entrance.
fn render_hero(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let titles = t_list(app, "home.banner.titles");
    let subtitles = t_list(app, "home.banner.subtitles");
    let eyebrow = t(app, "home.eyebrow");
    let cta_contact = t(app, "home.cta.contact");
    let cta_services = t(app, "home.cta.services");
    let stage = app.hero_seq.stage();
    let shows = |s: HeroStage| stage >= s;

    let rail_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let card_width = area.width.saturating_sub(6).max(20);
    render_rail(f, &mut app.hero_rail, rail_area, card_width, 2, |f, logical, card, _active| {
        f.render_widget(panel(""), card);
        let inner = Rect {
            x: card.x + 2,
            y: card.y + 1,
            width: card.width.saturating_sub(4),
            height: card.height.saturating_sub(2),
        };
        if inner.width == 0 || inner.height < 4 {
            return;
        }
        let mut lines: Vec<Line> = Vec::new();
        if shows(HeroStage::Eyebrow) {
            lines.push(Line::from(Span::styled(
                eyebrow.clone(),
                Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::default());
        }
        lines.push(Line::default());
        if shows(HeroStage::Headline) {
            lines.push(Line::from(Span::styled(
                titles.get(logical).cloned().unwrap_or_default(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::default());
        }
        if shows(HeroStage::Body) {
            lines.push(Line::from(Span::styled(
                subtitles.get(logical).cloned().unwrap_or_default(),
                Style::default().fg(th.subtext),
            )));
        } else {
            lines.push(Line::default());
        }
        lines.push(Line::default());
        if shows(HeroStage::Ctas) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {cta_contact} "),
                    Style::default().fg(th.base).bg(th.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(" {cta_services} "),
                    Style::default().fg(th.brand).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        f.render_widget(Paragraph::new(lines), inner);
    });

    let dots = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(dots_line(app.hero_rail.rail.n(), app.hero_rail.current())),
        dots,
    );
}

/// Mission paragraph, fading in on first visibility.
fn render_mission(f: &mut Frame, app: &mut AppState, area: Rect) {
    let progress = app.reveal_mission.progress(Instant::now());
    f.render_widget(panel(&t(app, "home.mission.title")), area);
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    paragraph(f, &t(app, "home.mission.body"), reveal_style(progress), inner);
}

/// One-line-per-service preview of the rail.
fn render_preview(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let progress = app.reveal_services_preview.progress(Instant::now());
    f.render_widget(panel(&t(app, "home.services.title")), area);
    let services = t_services(app, "services.items");
    let inner_h = area.height.saturating_sub(2);
    let mut lines: Vec<Line> = Vec::new();
    for svc in services.iter().take(inner_h as usize) {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}: ", svc.title), reveal_style(progress)),
            Span::styled(
                svc.description.to_string(),
                Style::default().fg(super::helpers::fade(th.mantle, th.faint, progress)),
            ),
        ]));
    }
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: inner_h,
    };
    f.render_widget(Paragraph::new(lines), inner);
}
