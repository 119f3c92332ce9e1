pub mod contact;
pub mod doctors;
pub mod home;
pub mod profile;
pub mod reviews;
pub mod services;

use iced::{Element, Task};

use crate::{
    core::Tab,
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// The page currently mounted in the content area.
#[derive(Debug, Clone)]
pub enum ScreenData {
    Home(home::HomeScreen),
    Services(services::ServicesScreen),
    Doctors(doctors::DoctorsScreen),
    Reviews(reviews::ReviewsScreen),
    Contact(contact::ContactScreen),
    Profile(profile::ProfileScreen),
}

impl ScreenData {
    /// Mount a fresh page for `tab`; nothing carries over from a previous visit.
    pub fn for_tab(tab: Tab, state: &AppState) -> Self {
        match tab {
            Tab::Home => ScreenData::Home(home::HomeScreen),
            Tab::Services => ScreenData::Services(services::ServicesScreen::new(&state.catalog)),
            Tab::Doctors => ScreenData::Doctors(doctors::DoctorsScreen::new(&state.catalog)),
            Tab::Reviews => ScreenData::Reviews(reviews::ReviewsScreen),
            Tab::Contact => ScreenData::Contact(contact::ContactScreen::default()),
            Tab::Profile => ScreenData::Profile(profile::ProfileScreen),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ScreenData::Home(_) => Tab::Home,
            ScreenData::Services(_) => Tab::Services,
            ScreenData::Doctors(_) => Tab::Doctors,
            ScreenData::Reviews(_) => Tab::Reviews,
            ScreenData::Contact(_) => Tab::Contact,
            ScreenData::Profile(_) => Tab::Profile,
        }
    }

    pub fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Message> {
        match self {
            ScreenData::Home(screen) => screen.view(state).map(Message::Home),
            ScreenData::Services(screen) => screen.view(state).map(Message::Services),
            ScreenData::Doctors(screen) => screen.view(state).map(Message::Doctors),
            ScreenData::Reviews(screen) => screen.view(state).map(Message::Reviews),
            ScreenData::Contact(screen) => screen.view(state).map(Message::Contact),
            ScreenData::Profile(screen) => screen.view(state).map(Message::Profile),
        }
    }

    /// Route a page message to the mounted page. Messages for a page that is no
    /// longer mounted are dropped.
    pub fn update(&mut self, message: Message, state: &mut AppState) -> Task<Message> {
        match (self, message) {
            (ScreenData::Home(page), Message::Home(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page.update(msg, state).map(Message::Home),
                ScreenMessage::ParentMessage(parent) => Task::done(parent.into()),
            },
            (ScreenData::Services(page), Message::Services(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state).map(Message::Services)
            }
            (ScreenData::Doctors(page), Message::Doctors(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state).map(Message::Doctors)
            }
            (ScreenData::Contact(page), Message::Contact(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state).map(Message::Contact)
            }
            (_, message) => {
                log::trace!("dropping message for unmounted page: {message:?}");
                Task::none()
            }
        }
    }
}
