use iced::{
    Element, Task,
    widget::{button, column},
};

use crate::{
    core::Tab,
    gui::{
        AppState, Message,
        screens::{Screen, ScreenMessage},
        widgets::{muted, page},
    },
};

#[derive(Debug, Clone)]
pub struct HomeScreen;

#[derive(Debug, Clone)]
pub enum HomeMessage {}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Navigate(Tab),
}

impl From<ParentMessage> for Message {
    fn from(message: ParentMessage) -> Self {
        match message {
            ParentMessage::Navigate(tab) => Message::SelectTab(tab),
        }
    }
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        page(
            "Home",
            column![
                muted(format!("Welcome to {}.", state.catalog.clinic_name)),
                button("Book an Appointment")
                    .style(button::primary)
                    .on_press(ScreenMessage::ParentMessage(ParentMessage::Navigate(
                        Tab::Services
                    ))),
            ]
            .spacing(20),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
