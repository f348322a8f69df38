use iced::widget::container;
use iced::{Background, Border, Color, Theme};

use crate::theme::tokens;

fn tinted_badge(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..color })),
        text_color: Some(color),
        border: Border {
            radius: tokens::RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

pub fn badge_global(theme: &Theme) -> container::Style {
    tinted_badge(theme.palette().primary)
}

pub fn badge_local(theme: &Theme) -> container::Style {
    tinted_badge(theme.palette().success)
}

/// Installed, but gone from the remote catalog.
pub fn badge_local_only(_theme: &Theme) -> container::Style {
    tinted_badge(tokens::TEXT_MUTED)
}
