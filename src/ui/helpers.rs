//! Small rendering helpers shared by every screen.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::carousel::Carousel;
use crate::theme::theme;

/// Interpolate between two RGB colors; the terminal stand-in for opacity
/// during an entrance transition.
pub fn fade(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) = (from, to) else {
        return if t < 0.5 { from } else { to };
    };
    let mix = |a: u8, b: u8| -> u8 {
        (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
    };
    Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Text style for a section at the given entrance progress: faint while
/// arriving, full foreground once shown.
pub fn reveal_style(progress: f32) -> Style {
    let th = theme();
    Style::default().fg(fade(th.mantle, th.text, progress))
}

/// A bordered panel in the house style.
pub fn panel(title: &str) -> Block<'static> {
    let th = theme();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.border))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(th.brand),
        ))
}

/// Centered sub-rectangle of fixed size, clamped to `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Pagination dots for an `n`-item rail.
pub fn dots_line(n: usize, current: usize) -> Line<'static> {
    let th = theme();
    let mut spans: Vec<Span> = Vec::with_capacity(n * 2);
    for i in 0..n {
        let (glyph, color) = if i == current {
            ("●", th.brand)
        } else {
            ("○", th.brand_dim)
        };
        spans.push(Span::styled(glyph.to_string(), Style::default().fg(color)));
        if i + 1 < n {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans).centered()
}

/// What: Map a page section into the visible viewport.
///
/// Inputs:
/// - `area`: the content area on screen
/// - `top`, `height`: the section's rows within the full page
/// - `scroll`: first page row currently shown
///
/// Output:
/// - The clipped on-screen rectangle, or `None` when fully off-screen.
pub fn section_rect(area: Rect, top: u16, height: u16, scroll: u16) -> Option<Rect> {
    let view_bottom = scroll + area.height;
    let bottom = top + height;
    if bottom <= scroll || top >= view_bottom {
        return None;
    }
    let y0 = top.max(scroll);
    let y1 = bottom.min(view_bottom);
    Some(Rect {
        x: area.x,
        y: area.y + (y0 - scroll),
        width: area.width,
        height: y1 - y0,
    })
}

/// What: Render a horizontal card rail with its clone buffers.
///
/// Inputs:
/// - `f`: frame
/// - `rail`: the carousel (re-measured against `area` first)
/// - `area`: rectangle the rail scrolls inside
/// - `item_width`, `gap`: card geometry in cells
/// - `draw_card`: paints one card; receives the logical index, the card
///   rect, and whether the card is the centered one
///
/// Output: none.
///
/// Details:
/// - Every physical slot that intersects the viewport is drawn; cards
///   sliding past an edge are clipped to the rail rectangle, so clone
///   content at a wrap boundary renders exactly like the original it
///   duplicates.
pub fn render_rail<FDraw>(
    f: &mut Frame,
    rail: &mut Carousel,
    area: Rect,
    item_width: u16,
    gap: u16,
    mut draw_card: FDraw,
) where
    FDraw: FnMut(&mut Frame, usize, Rect, bool),
{
    if area.width == 0 || area.height == 0 {
        return;
    }
    rail.ensure_layout(f32::from(item_width), f32::from(gap), f32::from(area.width));
    if !rail.rail.is_ready() {
        return;
    }
    let offset = rail.rail.offset();
    let snap = rail.rail.snap();
    let centered = rail.rail.nearest_slot();
    for slot in 0..rail.rail.physical_len() {
        let x = (slot as f32) * snap - offset;
        let right = x + f32::from(item_width);
        if right <= 0.0 || x >= f32::from(area.width) {
            continue;
        }
        let lx = x.max(0.0).round() as u16;
        let rx = right.min(f32::from(area.width)).round() as u16;
        if rx <= lx {
            continue;
        }
        let card = Rect {
            x: area.x + lx,
            y: area.y,
            width: rx - lx,
            height: area.height,
        };
        let logical = rail.rail.slot_item(slot);
        draw_card(f, logical, card, slot == centered);
    }
}

/// Render a plain paragraph into a rect with the given style.
pub fn paragraph(f: &mut Frame, text: &str, style: Style, area: Rect) {
    f.render_widget(
        Paragraph::new(text.to_string())
            .style(style)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Color fade endpoints and midpoint
    ///
    /// - Input: Black to white at t = 0, 0.5, 1
    /// - Output: Black, mid gray, white
    fn helpers_fade() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(fade(black, white, 0.0), black);
        assert_eq!(fade(black, white, 1.0), white);
        let Color::Rgb(r, g, b) = fade(black, white, 0.5) else {
            panic!("rgb expected");
        };
        assert!(r == g && g == b && (126..=130).contains(&r));
    }

    #[test]
    /// What: Section clipping against the scrolled viewport
    ///
    /// - Input: Sections above, inside, straddling, and below the view
    /// - Output: None, full rect, clipped rect, None
    fn helpers_section_rect() {
        let area = Rect::new(0, 5, 80, 20);
        assert!(section_rect(area, 0, 4, 10).is_none());
        let full = section_rect(area, 12, 5, 10).expect("visible");
        assert_eq!((full.y, full.height), (7, 5));
        let clipped = section_rect(area, 8, 6, 10).expect("straddles top");
        assert_eq!((clipped.y, clipped.height), (5, 4));
        assert!(section_rect(area, 31, 4, 10).is_none());
    }

    #[test]
    /// What: Centered rect clamps to the host area
    ///
    /// - Input: An oversized request in a small area
    /// - Output: Fits inside the area
    fn helpers_centered_rect() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(60, 20, area);
        assert!(r.width <= 40 && r.height <= 10);
        let r2 = centered_rect(20, 4, area);
        assert_eq!((r2.x, r2.y), (10, 3));
    }
}
