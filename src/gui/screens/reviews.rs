use std::convert::Infallible;

use iced::{
    Element, Task,
    widget::{Column, column, row, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{avatar, card, muted, page},
};

#[derive(Debug, Clone)]
pub struct ReviewsScreen;

impl Screen for ReviewsScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let reviews: Vec<Element<'a, ScreenMessage<Self>>> = state
            .catalog
            .reviews
            .iter()
            .map(|review| {
                card(
                    row![
                        avatar(review.avatar()),
                        column![text(&review.name).size(18), muted(&review.text)].spacing(4),
                    ]
                    .spacing(16),
                )
                .into()
            })
            .collect();
        page("Patient Reviews", Column::with_children(reviews).spacing(12))
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
