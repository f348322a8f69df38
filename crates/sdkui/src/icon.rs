use image::{Rgba, RgbaImage};

const SIZE: u32 = 64;
const BADGE: Rgba<u8> = Rgba([255, 149, 0, 255]);
const MARK: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Orange disc with a white ring, drawn at startup so no asset has to ship
/// with the binary.
fn render() -> RgbaImage {
    #[allow(clippy::cast_precision_loss)]
    let center = (SIZE as f32 - 1.0) / 2.0;
    let radius = center;

    RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        #[allow(clippy::cast_precision_loss)]
        let distance = ((x as f32 - center).powi(2) + (y as f32 - center).powi(2)).sqrt();
        let ring = distance > radius * 0.42 && distance < radius * 0.62;

        if distance > radius {
            CLEAR
        } else if ring {
            MARK
        } else {
            BADGE
        }
    })
}

pub fn window_icon() -> Option<iced::window::Icon> {
    match iced::window::icon::from_rgba(render().into_raw(), SIZE, SIZE) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("Failed to build window icon: {e}");
            None
        }
    }
}
