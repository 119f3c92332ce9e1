use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{
        Column, Container, Text, button, column, container, container::Style, row, text,
        text::IntoFragment,
    },
};
use iced_widget::container::bordered_box;

use crate::{
    core::{Navigation, Tab},
    gui::Message,
};

const SIDEBAR_WIDTH: f32 = 220.0;
const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

fn sidebar_style(theme: &Theme) -> Style {
    let mut rgba = theme.palette().background.into_rgba8();
    rgba[0] = rgba[0].saturating_sub(16);
    rgba[1] = rgba[1].saturating_sub(16);
    rgba[2] = rgba[2].saturating_sub(16);
    Style::default().background(Color::from_rgb8(rgba[0], rgba[1], rgba[2]))
}

fn nav_item<'a>(tab: Tab, navigation: &Navigation) -> Element<'a, Message> {
    let active = navigation.is_active(tab);
    let content: Element<'a, Message> = if navigation.is_collapsed() {
        text("•").into()
    } else {
        row![text("•"), text(tab.label())].spacing(10).into()
    };
    button(content)
        .width(Length::Fill)
        .style(move |theme, status| {
            if active {
                button::primary(theme, status)
            } else {
                button::text(theme, status)
            }
        })
        .on_press(Message::SelectTab(tab))
        .into()
}

/// Brand, collapse toggle and one entry per tab.
pub fn sidebar<'a>(navigation: &Navigation, brand: &'a str) -> Element<'a, Message> {
    let collapsed = navigation.is_collapsed();
    let toggle = button(text(if collapsed { "›" } else { "‹" }))
        .style(button::text)
        .on_press(Message::ToggleSidebar);
    let top: Element<'a, Message> = if collapsed {
        toggle.into()
    } else {
        row![text(brand).size(20).width(Length::Fill), toggle]
            .align_y(Center)
            .into()
    };
    let items: Vec<Element<'a, Message>> = Tab::ALL
        .into_iter()
        .map(|tab| nav_item(tab, navigation))
        .collect();
    let width = if collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    container(column![top, Column::with_children(items).spacing(4)].spacing(24))
        .padding(12)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    row![
        sidebar.into(),
        container(main_content.into())
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .into()
}

/// Page frame with a title above `body`.
pub fn page<'a, Message: 'a>(
    title: &'a str,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(column![text(title).size(28), body.into()].spacing(20))
        .padding(24)
        .width(Length::Fill)
        .into()
}

pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(14)
        .width(Length::Fill)
        .style(|theme: &Theme| bordered_box(theme).border(border::rounded(8)))
}

pub fn avatar<'a, Message: 'a>(initials: String) -> Element<'a, Message> {
    container(text(initials).size(16))
        .center_x(Length::Fixed(44.0))
        .center_y(Length::Fixed(44.0))
        .style(|theme: &Theme| {
            bordered_box(theme)
                .border(border::rounded(22))
                .background(theme.palette().primary)
        })
        .into()
}

pub fn label<'a>(content: impl IntoFragment<'a>) -> Text<'a> {
    text(content).size(13)
}

pub fn muted<'a>(content: impl IntoFragment<'a>) -> Text<'a> {
    text(content).style(text::secondary)
}
