use iced::{
    Element, Task,
    widget::{button, column, text, text_input},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{label, muted, page},
};

/// Contact details and a message form. The form only holds local text.
#[derive(Debug, Clone, Default)]
pub struct ContactScreen {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    NameChanged(String),
    MessageChanged(String),
    Send,
}

impl Screen for ContactScreen {
    type Message = ContactMessage;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let contact = &state.catalog.contact;
        let form = column![
            label("Your Name"),
            text_input("Enter your name", &self.name)
                .on_input(|value| ScreenMessage::ScreenMessage(ContactMessage::NameChanged(value))),
            label("Your Message"),
            text_input("Write your message", &self.message).on_input(|value| {
                ScreenMessage::ScreenMessage(ContactMessage::MessageChanged(value))
            }),
            button("Send Message")
                .style(button::primary)
                .on_press(ScreenMessage::ScreenMessage(ContactMessage::Send)),
        ]
        .spacing(8)
        .max_width(400);

        page(
            "Contact Us",
            column![
                muted("We'd love to hear from you! Reach us at:"),
                text(format!("Email: {}", contact.email)),
                text(format!("Phone: {}", contact.phone)),
                text(format!("Address: {}", contact.address)),
                form,
            ]
            .spacing(12),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ContactMessage::NameChanged(name) => self.name = name,
            ContactMessage::MessageChanged(message) => self.message = message,
            ContactMessage::Send => {
                log::info!("contact form is not connected to a backend; nothing sent");
            }
        }
        Task::none()
    }
}
