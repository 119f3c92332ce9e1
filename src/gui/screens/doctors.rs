use iced::{
    Element, Task,
    widget::{Column, Row, button, column, row, text},
};

use crate::{
    core::{Catalog, Paginator},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{avatar, card, muted, page},
    },
    models::Doctor,
};

/// Paginated doctor directory.
#[derive(Debug, Clone)]
pub struct DoctorsScreen {
    doctors: Vec<Doctor>,
    pub paginator: Paginator,
}

#[derive(Debug, Clone)]
pub enum DoctorsMessage {
    Prev,
    Next,
    GoTo(usize),
}

impl DoctorsScreen {
    pub fn new(catalog: &Catalog) -> Self {
        let doctors = catalog.doctors();
        let paginator = Paginator::new(doctors.len(), catalog.page_size);
        Self { doctors, paginator }
    }

    pub fn visible(&self) -> &[Doctor] {
        self.paginator.slice(&self.doctors)
    }
}

fn on(message: DoctorsMessage) -> ScreenMessage<DoctorsScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl Screen for DoctorsScreen {
    type Message = DoctorsMessage;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let cards: Vec<Element<'a, ScreenMessage<Self>>> = self
            .visible()
            .iter()
            .map(|doctor| {
                card(
                    row![
                        avatar(doctor.initials()),
                        column![text(&doctor.name).size(18), muted(&doctor.email)].spacing(4),
                    ]
                    .spacing(16),
                )
                .into()
            })
            .collect();

        let current = self.paginator.page();
        let numbers: Vec<Element<'a, ScreenMessage<Self>>> = self
            .paginator
            .page_numbers()
            .map(|number| {
                button(text(number.to_string()))
                    .style(move |theme, status| {
                        if number == current {
                            button::primary(theme, status)
                        } else {
                            button::secondary(theme, status)
                        }
                    })
                    .on_press(on(DoctorsMessage::GoTo(number)))
                    .into()
            })
            .collect();

        let controls = row![
            button("Prev")
                .style(button::secondary)
                .on_press_maybe(self.paginator.has_prev().then(|| on(DoctorsMessage::Prev))),
            Row::with_children(numbers).spacing(6),
            button("Next")
                .style(button::secondary)
                .on_press_maybe(self.paginator.has_next().then(|| on(DoctorsMessage::Next))),
        ]
        .spacing(6);

        page(
            "Doctors",
            column![Column::with_children(cards).spacing(12), controls].spacing(20),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DoctorsMessage::Prev => self.paginator.prev(),
            DoctorsMessage::Next => self.paginator.next(),
            DoctorsMessage::GoTo(number) => self.paginator.go_to(number),
        };
        Task::none()
    }
}
