use iced::widget::{Space, button, column, container, mouse_area, row, scrollable, text, toggler};
use iced::{Alignment, Element, Length};

use sdkui_core::{Action, Control, Intent, VersionRow};

use crate::message::Message;
use crate::state::MainState;
use crate::theme::{styles, tokens};

const VENDOR_WIDTH: f32 = 110.0;
const VERSION_WIDTH: f32 = 110.0;
const DIST_WIDTH: f32 = 60.0;
const ROLE_BUTTON_WIDTH: f32 = 96.0;

struct RowContext {
    busy: bool,
    in_flight: bool,
    hovered: bool,
}

/// Label and style of a role button for a given control state.
fn role_button_label(action: Action, control: Control) -> &'static str {
    match (action, control) {
        (Action::SetGlobal, Control::Disabled) => "Global",
        (Action::SetGlobal, _) => "Use globally",
        (Action::SetLocal, Control::Disabled) => "Local",
        (Action::SetLocal, _) => "Use here",
        (Action::Install | Action::Uninstall, _) => action.label(),
    }
}

fn install_action(row: &VersionRow) -> Action {
    if row.state.is_installed() {
        Action::Uninstall
    } else {
        Action::Install
    }
}

pub(super) fn version_table_view(state: &MainState) -> Element<'_, Message> {
    let rows = state.visible_rows();

    if rows.is_empty() {
        let message = if state.loading {
            "Loading versions..."
        } else if state.selection.rows().is_empty() {
            "No versions available."
        } else {
            "No versions match the current filters."
        };
        return container(text(message).size(14).color(tokens::TEXT_MUTED))
            .center_x(Length::Fill)
            .padding(32)
            .style(styles::card_container)
            .into();
    }

    let hovered = if state.modal.is_some() {
        None
    } else {
        state.hovered.as_ref()
    };

    let mut list = column![column_headings()].spacing(2);
    for row in rows {
        let ctx = RowContext {
            busy: state.is_busy(),
            in_flight: state.is_in_flight(&row.record.identifier),
            hovered: hovered == Some(&row.record.identifier),
        };
        list = list.push(version_row_view(row, &ctx));
    }

    container(scrollable(list.padding(8)).height(Length::Fill))
        .style(styles::card_container)
        .height(Length::Fill)
        .into()
}

fn column_headings() -> Element<'static, Message> {
    let heading = |label: &'static str| text(label).size(12).color(tokens::TEXT_MUTED);

    row![
        container(heading("Vendor")).width(Length::Fixed(VENDOR_WIDTH)),
        container(heading("Version")).width(Length::Fixed(VERSION_WIDTH)),
        container(heading("Dist")).width(Length::Fixed(DIST_WIDTH)),
        container(heading("Identifier")).width(Length::Fill),
        heading("Installed"),
        Space::new().width(Length::Fixed(ROLE_BUTTON_WIDTH * 2.0 + 8.0)),
    ]
    .spacing(8)
    .padding([4, 8])
    .into()
}

fn version_row_view<'a>(row: &'a VersionRow, ctx: &RowContext) -> Element<'a, Message> {
    let record = &row.record;

    let mut cells = row![
        container(text(record.vendor.as_str()).size(13)).width(Length::Fixed(VENDOR_WIDTH)),
        container(text(record.version.as_str()).size(14)).width(Length::Fixed(VERSION_WIDTH)),
        container(text(record.dist.as_str()).size(13).color(tokens::TEXT_MUTED))
            .width(Length::Fixed(DIST_WIDTH)),
        container(text(record.identifier.as_str()).size(13).font(iced::Font::MONOSPACE))
            .width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    cells = push_badges(cells, row, ctx);
    cells = cells.push(install_toggle(row, ctx));
    cells = cells.push(role_button(row, Action::SetGlobal, row.controls.global, ctx));
    cells = cells.push(role_button(row, Action::SetLocal, row.controls.local, ctx));

    let row_style = if ctx.hovered {
        styles::version_row_hovered
    } else {
        |_: &_| iced::widget::container::Style::default()
    };

    let identifier = record.identifier.clone();
    mouse_area(
        container(cells.padding([6, 8]))
            .style(row_style)
            .width(Length::Fill),
    )
    .on_enter(Message::VersionRowHovered(Some(identifier)))
    .on_exit(Message::VersionRowHovered(None))
    .into()
}

fn push_badges<'a>(
    mut cells: iced::widget::Row<'a, Message>,
    row: &VersionRow,
    ctx: &RowContext,
) -> iced::widget::Row<'a, Message> {
    let badge = |label: &'static str| container(text(label).size(11)).padding([2, 6]);

    if ctx.in_flight {
        cells = cells.push(text("Working...").size(12).color(tokens::TEXT_MUTED));
    }
    if row.state.is_global() {
        cells = cells.push(badge("global").style(styles::badge_global));
    }
    if row.state.is_local() {
        cells = cells.push(badge("local").style(styles::badge_local));
    }
    if !row.record.available {
        cells = cells.push(badge("local only").style(styles::badge_local_only));
    }
    cells
}

fn install_toggle<'a>(row: &VersionRow, ctx: &RowContext) -> Element<'a, Message> {
    let toggle = toggler(row.state.is_installed()).size(18);

    match row.controls.install {
        Control::Hidden => Space::new().width(Length::Shrink).into(),
        Control::Enabled if !ctx.busy => {
            let intent = Intent::new(install_action(row), row.record.identifier.clone());
            toggle
                .on_toggle(move |_| Message::RequestAction(intent.clone()))
                .into()
        }
        Control::Enabled | Control::Disabled => toggle.into(),
    }
}

fn role_button<'a>(
    row: &VersionRow,
    action: Action,
    control: Control,
    ctx: &RowContext,
) -> Element<'a, Message> {
    if !control.is_visible() {
        return Space::new().width(Length::Fixed(ROLE_BUTTON_WIDTH)).into();
    }

    let on_press = (control.is_enabled() && !ctx.busy)
        .then(|| Message::RequestAction(Intent::new(action, row.record.identifier.clone())));

    button(
        container(text(role_button_label(action, control)).size(12))
            .center_x(Length::Fill),
    )
    .on_press_maybe(on_press)
    .style(styles::row_action_button)
    .width(Length::Fixed(ROLE_BUTTON_WIDTH))
    .padding([4, 8])
    .into()
}
