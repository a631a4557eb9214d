use crate::app::state::AppState;
use crate::cycler::Variant;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Mounted variant
    parts.push(Span::styled(
        format!(" {} ", state.variant()),
        Theme::status_accent(),
    ));

    // Position and period
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Key help, right-aligned
    let current = state.variant();
    let mut hints: Vec<Span> = Vec::new();
    for (key, variant) in ["1", "2", "3"].into_iter().zip(Variant::ALL) {
        let style = if variant == current {
            Theme::status_accent()
        } else {
            Theme::status_hint()
        };
        hints.push(Span::styled(format!(" [{}] {}", key, variant), style));
    }
    hints.push(Span::styled(" [q] quit ", Theme::status_hint()));

    // Pad to fill remaining space
    let used: usize = parts.iter().chain(hints.iter()).map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.extend(hints);

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::cycler::{TaglineList, Timing};
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    #[test]
    fn test_status_bar_contents() {
        let mut state = AppState::new(AppConfig::default(), TaglineList::default());
        let id = state.allocate_mount_id();
        state.mounted(id, Timing::for_variant(Variant::CrossFade), Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, &state);
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        let text: String = (0..100).map(|x| buf[(x, 0)].symbol()).collect();

        assert!(text.starts_with(" cross-fade "));
        assert!(text.contains("1/12 · every 4.0s"));
        assert!(text.trim_end().ends_with("[q] quit"));
    }
}
