use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::MainState;
use crate::theme::{styles, tokens};

fn subtitle(state: &MainState) -> String {
    let installed = state.selection.installed_count();
    match &state.sdkman_version {
        Some(version) => format!("SDKMAN {version} \u{b7} {installed} installed"),
        None => format!("SDKMAN \u{b7} {installed} installed"),
    }
}

pub(super) fn header_view(state: &MainState) -> Element<'_, Message> {
    let title = column![
        text(state.selection.candidate()).size(22),
        text(subtitle(state)).size(13).color(tokens::TEXT_MUTED),
    ]
    .spacing(2);

    let can_refresh = !state.loading && !state.is_busy();
    let refresh_label = if state.loading {
        "Refreshing..."
    } else {
        "Refresh"
    };

    row![
        title,
        Space::new().width(Length::Fill),
        button(text(refresh_label).size(13))
            .on_press_maybe(can_refresh.then_some(Message::Refresh))
            .style(styles::ghost_button)
            .padding([6, 12]),
    ]
    .align_y(Alignment::Center)
    .into()
}
