//! Contact screen: the appointment request form and its outcome panels.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::i18n::{t, t_fmt, t_list};
use crate::state::{AppState, ContactField, SubmitStatus};
use crate::theme::theme;

use super::helpers::{centered_rect, panel, paragraph};

/// Render the contact screen.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.page_rows = area.height;
    if let SubmitStatus::Success { name } = app.submit_status.clone() {
        render_success(f, app, area, &name);
        return;
    }
    render_form(f, app, area);
    if let SubmitStatus::Failed { message } = app.submit_status.clone() {
        render_error_banner(f, message, area);
    }
}

fn field_line(
    app: &AppState,
    field: ContactField,
    label: &str,
    value: String,
) -> Line<'static> {
    let th = theme();
    let focused = app.contact_field == field;
    let marker = if focused { "› " } else { "  " };
    let label_style = if focused {
        Style::default().fg(th.brand).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.subtext)
    };
    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(th.accent)),
        Span::styled(format!("{label:<28}"), label_style),
        Span::styled(value, Style::default().fg(th.text)),
    ];
    if focused && app.form.text_field(field).is_some() {
        spans.push(Span::styled("▏".to_string(), Style::default().fg(th.accent)));
    }
    Line::from(spans)
}

fn render_form(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    f.render_widget(panel(&t(app, "contact.title")), area);
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let reasons = t_list(app, "contact.reasons");
    let appointments = t_list(app, "contact.appointments");
    let reason_label = app
        .form
        .reason
        .and_then(|r| reasons.get(r.label_index()).cloned())
        .unwrap_or_else(|| "-".to_string());
    let appt_label = appointments
        .get(app.form.appointment.label_index())
        .cloned()
        .unwrap_or_default();
    let submit_label = if app.submit_status == SubmitStatus::Submitting {
        t(app, "contact.sending")
    } else {
        t(app, "contact.submit")
    };
    let submit_style = if app.contact_field == ContactField::Submit {
        Style::default().fg(th.base).bg(th.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.accent)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            t(app, "contact.intro"),
            Style::default().fg(th.faint),
        )),
        Line::default(),
        field_line(app, ContactField::Name, &t(app, "contact.name"), app.form.name.clone()),
        field_line(app, ContactField::Email, &t(app, "contact.email"), app.form.email.clone()),
        field_line(app, ContactField::Phone, &t(app, "contact.phone"), app.form.phone.clone()),
        field_line(app, ContactField::Reason, &t(app, "contact.reason"), format!("‹ {reason_label} ›")),
        field_line(
            app,
            ContactField::Appointment,
            &t(app, "contact.appointment"),
            format!("‹ {appt_label} ›"),
        ),
        field_line(app, ContactField::Doctor, &t(app, "contact.doctor"), app.form.doctor.clone()),
        field_line(app, ContactField::Message, &t(app, "contact.message"), app.form.message.clone()),
        Line::default(),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {submit_label} "), submit_style),
        ]),
    ];
    if let Some(err) = app.form_error {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            t(app, err.message_key()),
            Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
        )));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_success(f: &mut Frame, app: &mut AppState, area: Rect, name: &str) {
    let th = theme();
    let boxed = centered_rect(56, 8, area);
    f.render_widget(panel(&t(app, "contact.success.title")), boxed);
    let inner = Rect {
        x: boxed.x + 2,
        y: boxed.y + 1,
        width: boxed.width.saturating_sub(4),
        height: boxed.height.saturating_sub(2),
    };
    let body = t_fmt(app, "contact.success.body", &[("name", &name)]);
    let lines = vec![
        Line::from(Span::styled(body, Style::default().fg(th.success))),
        Line::default(),
        Line::from(Span::styled(
            t(app, "contact.success.dismiss"),
            Style::default().fg(th.faint),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_error_banner(f: &mut Frame, message: String, area: Rect) {
    let th = theme();
    if area.height < 3 {
        return;
    }
    let banner = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    paragraph(
        f,
        &message,
        Style::default().fg(th.base).bg(th.danger).add_modifier(Modifier::BOLD),
        banner,
    );
}
