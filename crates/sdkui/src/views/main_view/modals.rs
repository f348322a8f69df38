use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Element, Length};

use sdkui_core::{Action, Confirmation, Intent, SelectionState};

use crate::message::Message;
use crate::state::Modal;
use crate::theme::{styles, tokens};

pub(super) fn modal_overlay<'a>(
    content: Element<'a, Message>,
    modal: &'a Modal,
    candidate: &'a str,
) -> Element<'a, Message> {
    let modal_content = match modal {
        Modal::Confirm { intent, from, to } => confirm_view(candidate, intent, *from, *to),
    };

    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .style(styles::modal_backdrop)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::CloseModal);

    let modal_container = mouse_area(
        container(modal_content)
            .style(styles::modal_container)
            .padding(iced::Padding::new(tokens::MODAL_PADDING))
            .max_width(tokens::MODAL_MAX_WIDTH),
    )
    .on_press(Message::NoOp);

    let modal_layer = container(modal_container)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .width(Length::Fill)
        .height(Length::Fill);

    iced::widget::stack![content, backdrop, modal_layer].into()
}

fn action_hint(action: Action) -> Option<&'static str> {
    match action {
        Action::Install => Some("Downloading and unpacking can take a few minutes."),
        Action::SetLocal => {
            Some("The shell that started SDKMAN UI switches to it once the window closes.")
        }
        Action::SetGlobal | Action::Uninstall => None,
    }
}

fn confirm_view<'a>(
    candidate: &'a str,
    intent: &'a Intent,
    from: SelectionState,
    to: SelectionState,
) -> Element<'a, Message> {
    let mut body = column![
        text(format!("{} {}?", intent.action.label(), intent.identifier)).size(20),
        Space::new().height(12),
        text(format!(
            "{candidate} {} goes from {from} to {to}.",
            intent.identifier
        ))
        .size(14),
    ]
    .spacing(4)
    .width(Length::Fill);

    if let Some(hint) = action_hint(intent.action) {
        body = body.push(text(hint).size(12).color(tokens::TEXT_MUTED));
    }

    let confirm_style = if intent.action == Action::Uninstall {
        styles::danger_button as fn(&iced::Theme, button::Status) -> button::Style
    } else {
        styles::primary_button
    };

    body.push(Space::new().height(24))
        .push(
            row![
                button(text("Cancel").size(13))
                    .on_press(Message::Confirm(Confirmation::Cancel))
                    .style(styles::secondary_button)
                    .padding([10, 20]),
                Space::new().width(Length::Fill),
                button(text("Yes, and close").size(13))
                    .on_press(Message::Confirm(Confirmation::ConfirmAndExit))
                    .style(styles::secondary_button)
                    .padding([10, 20]),
                button(text("Yes").size(13))
                    .on_press(Message::Confirm(Confirmation::Confirm))
                    .style(confirm_style)
                    .padding([10, 20]),
            ]
            .spacing(12),
        )
        .into()
}
