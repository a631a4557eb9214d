//! The rotating tagline itself, drawn per variant.
//!
//! Fade: one line in muted gray that drifts up a row as it disappears.
//! Cross-fade: every tagline stacked on the same row; each cell shows the
//! most opaque glyph. Gradient: cyan to purple across the line, dropping
//! two rows and dimming as it disappears.

use crate::app::state::{AppState, MountState};
use crate::cycler::{StackItem, TaglineView, Variant};
use crate::ui::theme::{blend, gradient_at, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use std::time::Instant;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Below this opacity nothing is drawn.
const MIN_ALPHA: f32 = 0.02;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
    frame.render_widget(Block::default().style(Theme::background()), area);

    let (Some(mount), Some(view)) = (&state.mount, state.view()) else {
        return;
    };
    let baseline = area.y + area.height / 2;

    match view {
        TaglineView::Single { text, .. } => {
            let alpha = mount.animation.opacity(now);
            if alpha < MIN_ALPHA {
                return;
            }
            match mount.timing.variant {
                Variant::Gradient => render_gradient(frame, area, baseline, text, alpha),
                _ => render_fade(frame, area, baseline, text, alpha),
            }
        }
        TaglineView::Stack(items) => render_stack(frame, area, baseline, &items, mount, now),
    }
}

/// One-row rect at `baseline + offset`, if that row is inside `area`.
fn row(area: Rect, baseline: u16, offset: i32) -> Option<Rect> {
    let y = i32::from(baseline) + offset;
    if y < i32::from(area.y) || y >= i32::from(area.bottom()) {
        return None;
    }
    Some(Rect::new(area.x, y as u16, area.width, 1))
}

/// First column of a `text_width`-wide line centered in `width` columns.
///
/// Every variant goes through this, so switching variants never shifts the
/// tagline sideways. Odd leftovers go to the left margin.
fn center_col(width: u16, text_width: usize) -> u16 {
    let half_text = u16::try_from(text_width / 2).unwrap_or(u16::MAX);
    (width / 2).saturating_sub(half_text)
}

/// `rect` narrowed to start where `text` is centered.
fn centered(rect: Rect, text: &str) -> Rect {
    let x = center_col(rect.width, text.width());
    Rect::new(rect.x + x, rect.y, rect.width - x, rect.height)
}

fn render_fade(frame: &mut Frame, area: Rect, baseline: u16, text: &str, alpha: f32) {
    let offset = -((1.0 - alpha).round() as i32);
    let Some(rect) = row(area, baseline, offset) else {
        return;
    };
    let style = Style::default()
        .fg(blend(Theme::TEXT_MUTED, Theme::BG, alpha))
        .bg(Theme::BG);
    let paragraph = Paragraph::new(Line::from(Span::styled(text, style)));
    frame.render_widget(paragraph, centered(rect, text));
}

fn render_gradient(frame: &mut Frame, area: Rect, baseline: u16, text: &str, alpha: f32) {
    let offset = ((1.0 - alpha) * 2.0).round() as i32;
    let Some(rect) = row(area, baseline, offset) else {
        return;
    };

    let count = text.chars().count();
    let last = count.saturating_sub(1).max(1) as f32;
    let blurred = alpha < 0.6;
    let spans: Vec<Span> = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let color = blend(gradient_at(&Theme::GRADIENT, i as f32 / last), Theme::BG, alpha);
            let mut style = Style::default().fg(color).bg(Theme::BG);
            if blurred {
                style = style.add_modifier(Modifier::DIM);
            }
            Span::styled(ch.to_string(), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), centered(rect, text));
}

fn render_stack(
    frame: &mut Frame,
    area: Rect,
    baseline: u16,
    items: &[StackItem<'_>],
    mount: &MountState,
    now: Instant,
) {
    let Some(rect) = row(area, baseline, 0) else {
        return;
    };
    let width = rect.width as usize;

    // (glyph, opacity) per column, most opaque wins
    let mut cells: Vec<Option<(char, f32)>> = vec![None; width];
    for (i, item) in items.iter().enumerate() {
        let alpha = mount.animation.opacity_of(i, now);
        if alpha < MIN_ALPHA {
            continue;
        }
        let mut col = center_col(rect.width, item.text.width()) as usize;
        for ch in item.text.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if col + w > width {
                break;
            }
            if ch != ' ' && cells[col].map_or(true, |(_, a)| alpha > a) {
                cells[col] = Some((ch, alpha));
            }
            col += w;
        }
    }

    let mut spans = Vec::with_capacity(width);
    let mut skip = 0;
    for cell in cells {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        match cell {
            Some((ch, alpha)) => {
                skip = ch.width().unwrap_or(1).saturating_sub(1);
                let style = Style::default()
                    .fg(blend(Theme::TEXT_MUTED, Theme::BG, alpha))
                    .bg(Theme::BG);
                spans.push(Span::styled(ch.to_string(), style));
            }
            None => spans.push(Span::styled(" ", Theme::background())),
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), rect);
}
