use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::tokens;

pub fn view() -> Element<'static, Message> {
    container(
        column![
            text("SDKMAN UI").size(28),
            text("Looking for SDKMAN...")
                .size(14)
                .color(tokens::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
