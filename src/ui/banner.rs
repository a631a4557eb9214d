use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn height(state: &AppState) -> u16 {
    if state.config.ui.subtitle.is_some() {
        3
    } else {
        2
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let ui = &state.config.ui;
    let mut lines = vec![Line::from(Span::styled(ui.title.as_str(), Theme::title()))];
    if let Some(subtitle) = &ui.subtitle {
        lines.push(Line::from(Span::styled(subtitle.as_str(), Theme::subtitle())));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Theme::background());
    frame.render_widget(paragraph, area);
}
