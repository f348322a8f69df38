mod header;
mod modals;
mod search;
mod table;

use iced::Element;
use iced::widget::column;

use crate::message::Message;
use crate::settings::AppSettings;
use crate::state::MainState;
use crate::widgets::toast_container;

pub fn view<'a>(state: &'a MainState, settings: &'a AppSettings) -> Element<'a, Message> {
    let content: Element<Message> = column![
        header::header_view(state),
        search::search_bar_view(state),
        table::version_table_view(state),
    ]
    .spacing(12)
    .padding(24)
    .into();

    let with_modal = match &state.modal {
        Some(modal) => modals::modal_overlay(content, modal, state.selection.candidate()),
        None => content,
    };

    toast_container::view(with_modal, &state.toasts, settings.max_visible_toasts)
}
