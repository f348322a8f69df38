use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::MissingState;
use crate::theme::{styles, tokens};

const INSTALL_HINT: &str = "curl -s \"https://get.sdkman.io\" | bash";

pub fn view(state: &MissingState) -> Element<'_, Message> {
    let location = match &state.sdkman_dir {
        Some(dir) => format!("No working installation at {}", dir.display()),
        None => "No SDKMAN directory was found.".to_string(),
    };

    let mut content = column![
        text("SDKMAN! not found").size(22),
        Space::new().height(4),
        text(location).size(14).color(tokens::TEXT_MUTED),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    if let Some(reason) = &state.reason {
        content = content.push(text(reason.as_str()).size(13).color(tokens::DANGER));
    }

    content = content
        .push(Space::new().height(12))
        .push(text("Install it with:").size(13))
        .push(
            container(text(INSTALL_HINT).size(13).font(iced::Font::MONOSPACE))
                .padding([8, 14])
                .style(styles::card_container),
        )
        .push(Space::new().height(16))
        .push(
            button(text("Try again").size(13))
                .on_press(Message::RetryDetection)
                .style(styles::primary_button)
                .padding([10, 20]),
        );

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(24)
        .into()
}
