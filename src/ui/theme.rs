use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(17, 24, 39);
    pub const BG_ELEVATED: Color = Color::Rgb(31, 41, 55);
    pub const TEXT_PRIMARY: Color = Color::Rgb(243, 244, 246);
    pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);
    pub const TEXT_DIM: Color = Color::Rgb(107, 114, 128);
    pub const ACCENT_CYAN: Color = Color::Rgb(34, 211, 238);
    pub const ACCENT_BLUE: Color = Color::Rgb(96, 165, 250);
    pub const ACCENT_PURPLE: Color = Color::Rgb(192, 132, 252);

    pub const GRADIENT: [Color; 3] = [Self::ACCENT_CYAN, Self::ACCENT_BLUE, Self::ACCENT_PURPLE];

    pub fn background() -> Style {
        Style::default().bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::TEXT_DIM)
            .bg(Self::BG)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_accent() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }
}

/// Mix `fg` over `bg` at `alpha` in `[0, 1]`. Non-RGB colors snap at 0.5.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}

/// Color at `t` in `[0, 1]` along a multi-stop gradient.
pub fn gradient_at(stops: &[Color], t: f32) -> Color {
    match stops {
        [] => Color::Reset,
        [only] => *only,
        _ => {
            let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
            let i = (scaled.floor() as usize).min(stops.len() - 2);
            blend(stops[i + 1], stops[i], scaled - i as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend() {
        let white = Color::Rgb(255, 255, 255);
        let black = Color::Rgb(0, 0, 0);
        assert_eq!(blend(white, black, 1.0), white);
        assert_eq!(blend(white, black, 0.0), black);
        assert_eq!(blend(white, black, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(blend(Color::Red, black, 0.7), Color::Red);
        assert_eq!(blend(Color::Red, black, 0.2), black);
    }

    #[test]
    fn test_gradient_stops() {
        assert_eq!(gradient_at(&Theme::GRADIENT, 0.0), Theme::ACCENT_CYAN);
        assert_eq!(gradient_at(&Theme::GRADIENT, 0.5), Theme::ACCENT_BLUE);
        assert_eq!(gradient_at(&Theme::GRADIENT, 1.0), Theme::ACCENT_PURPLE);
        assert_eq!(gradient_at(&[Color::Red], 0.3), Color::Red);
    }
}
