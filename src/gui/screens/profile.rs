use std::convert::Infallible;

use iced::{
    Element, Task,
    widget::{column, row, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{avatar, card, muted, page},
};

#[derive(Debug, Clone)]
pub struct ProfileScreen;

impl Screen for ProfileScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let profile = &state.catalog.profile;
        page(
            "My Profile",
            column![
                card(
                    row![
                        avatar(profile.avatar.clone()),
                        column![text(&profile.name).size(18), muted(&profile.email)].spacing(4),
                    ]
                    .spacing(16)
                )
                .max_width(400),
                text(&profile.about),
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
