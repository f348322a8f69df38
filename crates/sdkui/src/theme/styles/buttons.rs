use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use super::{darken, lighten};
use crate::theme::{is_dark, tokens};

#[derive(Clone, Copy)]
struct Tint {
    text: Color,
    bg: Color,
    bg_hovered: Color,
    bg_pressed: Color,
    radius: f32,
}

impl Tint {
    fn of(color: Color, radius: f32) -> Self {
        Self {
            text: color,
            bg: Color { a: 0.12, ..color },
            bg_hovered: Color { a: 0.2, ..color },
            bg_pressed: Color { a: 0.28, ..color },
            radius,
        }
    }
}

fn tinted_button(tint: Tint, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(tint.bg)),
        text_color: tint.text,
        border: Border {
            radius: tint.radius.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        snap: false,
    };
    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(tint.bg_hovered)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(tint.bg_pressed)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: tint.bg.a * 0.5,
                ..tint.bg
            })),
            text_color: Color {
                a: 0.4,
                ..tint.text
            },
            ..base
        },
    }
}

pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.palette().primary;

    let base = button::Style {
        background: Some(Background::Color(primary)),
        text_color: Color::WHITE,
        border: Border {
            radius: tokens::RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color { a: 0.15, ..primary },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(lighten(primary, 0.05))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(darken(primary, 0.05))),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color { a: 0.4, ..primary })),
            text_color: Color {
                a: 0.6,
                ..Color::WHITE
            },
            shadow: Shadow::default(),
            ..base
        },
    }
}

pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let (bg, bg_hovered, bg_pressed) = if is_dark(theme) {
        (
            Color::from_rgba8(255, 255, 255, 0.1),
            Color::from_rgba8(255, 255, 255, 0.15),
            Color::from_rgba8(255, 255, 255, 0.2),
        )
    } else {
        (
            Color::from_rgba8(0, 0, 0, 0.05),
            Color::from_rgba8(0, 0, 0, 0.08),
            Color::from_rgba8(0, 0, 0, 0.12),
        )
    };

    tinted_button(
        Tint {
            text: theme.palette().text,
            bg,
            bg_hovered,
            bg_pressed,
            radius: tokens::RADIUS_MD,
        },
        status,
    )
}

pub fn danger_button(_theme: &Theme, status: button::Status) -> button::Style {
    tinted_button(Tint::of(tokens::DANGER, tokens::RADIUS_MD), status)
}

/// Compact role buttons inside a version row.
pub fn row_action_button(theme: &Theme, status: button::Status) -> button::Style {
    tinted_button(Tint::of(theme.palette().primary, tokens::RADIUS_SM), status)
}

pub fn ghost_button(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: Color { a: 0.6, ..text },
        border: Border {
            radius: tokens::RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            text_color: text,
            background: Some(Background::Color(Color { a: 0.05, ..text })),
            ..base
        },
        button::Status::Pressed => button::Style {
            text_color: text,
            background: Some(Background::Color(Color { a: 0.1, ..text })),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: Color { a: 0.3, ..text },
            ..base
        },
    }
}
