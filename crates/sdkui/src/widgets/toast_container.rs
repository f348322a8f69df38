use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::Toast;
use crate::theme::styles;

const TOAST_WIDTH: f32 = 380.0;

/// Newest first, at most `max_visible`.
fn visible_toasts(toasts: &[Toast], max_visible: usize) -> impl Iterator<Item = &Toast> {
    toasts.iter().rev().take(max_visible)
}

pub fn view<'a>(
    content: Element<'a, Message>,
    toasts: &'a [Toast],
    max_visible: usize,
) -> Element<'a, Message> {
    if toasts.is_empty() || max_visible == 0 {
        return content;
    }

    let stack = visible_toasts(toasts, max_visible)
        .fold(column![].spacing(8), |stack, toast| {
            stack.push(toast_view(toast))
        })
        .width(Length::Fixed(TOAST_WIDTH));

    let layer = container(stack)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20);

    iced::widget::stack![content, layer].into()
}

fn toast_view(toast: &Toast) -> Element<'_, Message> {
    container(
        row![
            text(toast.message.as_str()).size(13).width(Length::Fill),
            Space::new().width(8),
            button(text("Dismiss").size(12))
                .on_press(Message::DismissToast(toast.id))
                .style(styles::ghost_button)
                .padding([2, 8]),
        ]
        .align_y(Alignment::Center),
    )
    .padding([10, 14])
    .style(styles::error_toast)
    .into()
}
