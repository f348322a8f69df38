mod badges;
mod buttons;
mod containers;

pub use badges::*;
pub use buttons::*;
pub use containers::*;

pub(crate) fn lighten(color: iced::Color, amount: f32) -> iced::Color {
    iced::Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}

pub(crate) fn darken(color: iced::Color, amount: f32) -> iced::Color {
    iced::Color {
        r: (color.r - amount).max(0.0),
        g: (color.g - amount).max(0.0),
        b: (color.b - amount).max(0.0),
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::{darken, lighten};

    #[test]
    fn lighten_and_darken_clamp_channels() {
        let color = iced::Color::from_rgba(0.95, 0.5, 0.02, 0.8);

        let light = lighten(color, 0.1);
        let dark = darken(color, 0.1);

        assert!((light.r - 1.0).abs() < f32::EPSILON);
        assert!((light.g - 0.6).abs() < 0.0001);
        assert!(dark.b.abs() < f32::EPSILON);
        assert!((dark.a - 0.8).abs() < f32::EPSILON);
    }
}
