use iced::widget::{Space, button, container, row, text, text_input, toggler};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::MainState;
use crate::theme::styles;

pub const SEARCH_INPUT_ID: &str = "search-input";

fn placeholder(candidate: &str) -> String {
    if candidate == "java" {
        "Search by vendor, version or identifier (e.g. 'tem', '21')...".to_string()
    } else {
        format!("Search {candidate} versions...")
    }
}

pub(super) fn search_bar_view(state: &MainState) -> Element<'_, Message> {
    let input = text_input(&placeholder(state.selection.candidate()), &state.search_query)
        .id(SEARCH_INPUT_ID)
        .on_input(Message::SearchChanged)
        .padding(12)
        .size(14)
        .style(styles::search_input);

    let clear: Element<Message> = if state.search_query.is_empty() {
        Space::new().into()
    } else {
        button(text("Clear").size(12))
            .on_press(Message::SearchChanged(String::new()))
            .style(styles::ghost_button)
            .padding([4, 10])
            .into()
    };

    let field = iced::widget::stack![
        input,
        container(clear)
            .align_x(iced::alignment::Horizontal::Right)
            .align_y(iced::alignment::Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).right(6.0)),
    ];

    row![
        container(field).width(Length::Fill),
        toggler(state.installed_only)
            .label("Installed only")
            .text_size(13)
            .size(18)
            .on_toggle(Message::InstalledOnlyToggled),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}
