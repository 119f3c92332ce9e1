use crate::{
    core::Tab,
    gui::screens::{
        ScreenMessage, contact::ContactScreen, doctors::DoctorsScreen, home::HomeScreen,
        profile::ProfileScreen, reviews::ReviewsScreen, services::ServicesScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    ToggleSidebar,
    Home(ScreenMessage<HomeScreen>),
    Services(ScreenMessage<ServicesScreen>),
    Doctors(ScreenMessage<DoctorsScreen>),
    Reviews(ScreenMessage<ReviewsScreen>),
    Contact(ScreenMessage<ContactScreen>),
    Profile(ScreenMessage<ProfileScreen>),
}
