//! Screen rendering.
//!
//! `ui()` draws one frame: the navigation bar, the active screen, the
//! keybind footer, and any modal overlay on top. Screens record their
//! section geometry into [`AppState`] while rendering so the tick handler
//! can run the reveal visibility checks without re-measuring.

mod about;
mod contact;
mod gallery;
pub mod helpers;
mod home;
mod modals;
mod provider;
mod services;

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::i18n::t;
use crate::state::{AppState, Screen};
use crate::theme::theme;

/// Render one frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_rows = u16::from(app.show_footer);
    let nav_rows = 2u16.min(area.height);
    let content = Rect {
        x: area.x,
        y: area.y + nav_rows,
        width: area.width,
        height: area.height.saturating_sub(nav_rows + footer_rows),
    };
    app.content_rows = content.height;

    render_nav(f, app, Rect { height: nav_rows, ..area });
    match app.screen {
        Screen::Home => home::render(f, app, content),
        Screen::About => about::render(f, app, content),
        Screen::Services => services::render(f, app, content),
        Screen::Gallery => gallery::render(f, app, content),
        Screen::Contact => contact::render(f, app, content),
        Screen::Providers => provider::render(f, app, content),
        Screen::ComingSoon => render_coming_soon(f, app, content),
    }
    if app.show_footer && area.height > nav_rows {
        let footer = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        render_footer(f, app, footer);
    }
    modals::render(f, app, area);
}

/// Top navigation bar: clinic name plus the screen tabs.
fn render_nav(f: &mut Frame, app: &AppState, area: Rect) {
    if area.height == 0 {
        return;
    }
    let th = theme();
    let mut spans: Vec<Span> = vec![
        Span::styled(
            t(app, "app.title"),
            Style::default().fg(th.brand).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for (i, screen) in Screen::ALL.iter().enumerate() {
        let label = format!("{} {}", i + 1, t(app, screen.nav_key()));
        let style = if *screen == app.screen {
            Style::default()
                .fg(th.base)
                .bg(th.brand)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    let mut lines = vec![Line::from(spans)];
    if area.height > 1 {
        lines.push(Line::from(Span::styled(
            t(app, "app.tagline"),
            Style::default().fg(th.faint),
        )));
    }
    f.render_widget(Paragraph::new(lines), area);
}

/// Footer: transient status toast when set, otherwise the hint line.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let (text, color) = match &app.status {
        Some(toast) => (toast.clone(), th.accent),
        None => (t(app, app.screen.footer_key()), th.faint),
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            crate::util::ellipsize(&text, area.width as usize),
            Style::default().fg(color),
        ))),
        area,
    );
}

/// Placeholder screen for pages still being written.
fn render_coming_soon(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    app.page_rows = area.height;
    let boxed = helpers::centered_rect(44, 5, area);
    f.render_widget(helpers::panel(&t(app, "soon.title")), boxed);
    let inner = Rect {
        x: boxed.x + 2,
        y: boxed.y + 2,
        width: boxed.width.saturating_sub(4),
        height: 1,
    };
    helpers::paragraph(f, &t(app, "soon.body"), Style::default().fg(th.subtext), inner);
}
