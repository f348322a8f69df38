pub mod styles;

use iced::theme::Palette;
use iced::{Theme, color};

pub mod tokens {
    pub const RADIUS_SM: f32 = 6.0;
    pub const RADIUS_MD: f32 = 10.0;
    pub const RADIUS_LG: f32 = 14.0;

    pub const MODAL_PADDING: f32 = 28.0;
    pub const MODAL_MAX_WIDTH: f32 = 460.0;

    pub const TEXT_MUTED: iced::Color =
        iced::Color::from_rgb(142.0 / 255.0, 142.0 / 255.0, 147.0 / 255.0);
    pub const DANGER: iced::Color = iced::Color::from_rgb(1.0, 69.0 / 255.0, 58.0 / 255.0);

    pub fn card_bg(is_dark: bool) -> iced::Color {
        if is_dark {
            iced::Color::from_rgba8(44, 44, 46, 0.72)
        } else {
            iced::Color::from_rgba8(255, 255, 255, 0.72)
        }
    }
}

pub fn light_theme() -> Theme {
    Theme::custom(
        "SDKMAN UI Light".to_string(),
        Palette {
            background: color!(0x00f4_f4f2),
            text: color!(0x001f_1d1b),
            primary: color!(0x00d0_6a00),
            success: color!(0x0030_a14e),
            danger: color!(0x00e5_3935),
            warning: color!(0x00f5_a300),
        },
    )
}

pub fn dark_theme() -> Theme {
    Theme::custom(
        "SDKMAN UI Dark".to_string(),
        Palette {
            background: color!(0x001d_1c1a),
            text: color!(0x00f2_f1ee),
            primary: color!(0x00ff_9f0a),
            success: color!(0x0032_d74b),
            danger: color!(0x00ff_453a),
            warning: color!(0x00ff_d60a),
        },
    )
}

pub(crate) fn is_dark(theme: &Theme) -> bool {
    theme.palette().background.r < 0.5
}
