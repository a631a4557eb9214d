use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows reserved for the tagline: the baseline plus room for the
/// enter/exit offsets above and below it.
pub const TAGLINE_HEIGHT: u16 = 5;

pub struct HeroLayout {
    pub banner: Rect,
    pub tagline: Rect,
    pub status_bar: Option<Rect>,
}

pub fn compute_layout(area: Rect, banner_height: u16, show_status_bar: bool) -> HeroLayout {
    // Main vertical split: content | status bar
    let (content, status_bar) = if show_status_bar {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Hero
                Constraint::Length(1), // Status bar
            ])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    // Hero block, vertically centered
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(banner_height),
            Constraint::Length(TAGLINE_HEIGHT),
            Constraint::Fill(1),
        ])
        .split(content);

    HeroLayout {
        banner: chunks[1],
        tagline: chunks[2],
        status_bar,
    }
}
