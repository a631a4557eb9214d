mod banner;
mod layout;
mod status_bar;
mod tagline;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use std::time::Instant;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::Theme::background()), area);

    let hero = layout::compute_layout(
        area,
        banner::height(state),
        state.config.ui.show_status_bar,
    );

    banner::render(frame, hero.banner, state);
    tagline::render(frame, hero.tagline, state, Instant::now());
    if let Some(status_area) = hero.status_bar {
        status_bar::render(frame, status_area, state);
    }
}
