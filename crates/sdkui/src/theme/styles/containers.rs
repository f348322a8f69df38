use iced::widget::{container, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::theme::{is_dark, tokens};

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    }
}

pub fn card_container(theme: &Theme) -> container::Style {
    let dark = is_dark(theme);

    container::Style {
        background: Some(Background::Color(tokens::card_bg(dark))),
        border: rounded(tokens::RADIUS_LG),
        shadow: Shadow {
            color: Color {
                a: if dark { 0.25 } else { 0.06 },
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 1.0),
            blur_radius: 16.0,
        },
        text_color: None,
        snap: false,
    }
}

pub fn modal_container(theme: &Theme) -> container::Style {
    let dark = is_dark(theme);

    container::Style {
        background: Some(Background::Color(if dark {
            Color::from_rgb8(44, 44, 46)
        } else {
            Color::WHITE
        })),
        border: rounded(tokens::RADIUS_LG),
        shadow: Shadow {
            color: Color {
                a: if dark { 0.4 } else { 0.15 },
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        text_color: None,
        snap: false,
    }
}

pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.4,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

pub fn error_toast(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(if is_dark(theme) {
            Color::from_rgb8(58, 36, 36)
        } else {
            Color::from_rgb8(255, 235, 233)
        })),
        text_color: Some(tokens::DANGER),
        border: Border {
            radius: tokens::RADIUS_MD.into(),
            width: 1.0,
            color: Color {
                a: 0.3,
                ..tokens::DANGER
            },
        },
        shadow: Shadow {
            color: Color {
                a: 0.12,
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 10.0,
        },
        snap: false,
    }
}

pub fn search_input(theme: &Theme, _status: text_input::Status) -> text_input::Style {
    let palette = theme.palette();

    text_input::Style {
        background: Background::Color(if is_dark(theme) {
            Color::from_rgb8(44, 44, 46)
        } else {
            Color::from_rgb8(236, 236, 232)
        }),
        border: rounded(tokens::RADIUS_MD),
        icon: palette.text,
        placeholder: Color {
            a: 0.4,
            ..palette.text
        },
        value: palette.text,
        selection: Color {
            a: 0.3,
            ..palette.primary
        },
    }
}

pub fn version_row_hovered(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(if is_dark(theme) {
            Color::from_rgba8(255, 255, 255, 0.04)
        } else {
            Color::from_rgba8(0, 0, 0, 0.03)
        })),
        border: rounded(tokens::RADIUS_SM),
        ..Default::default()
    }
}
