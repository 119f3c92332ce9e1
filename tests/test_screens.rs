//! Page state behind the GUI: tab switching, remounting and page updates.

#![cfg(feature = "gui")]

mod common;

use smilestudio::gui::{
    AppState, Message, SmileStudioApp,
    screens::{
        Screen, ScreenData, ScreenMessage,
        contact::{ContactMessage, ContactScreen},
        doctors::{DoctorsMessage, DoctorsScreen},
        home::ParentMessage,
        services::{ServicesMessage, ServicesScreen, day_style},
    },
};
use iced::{Theme, widget::button};

use common::*;

fn services_month(app: &SmileStudioApp) -> u8 {
    match app.screen() {
        ScreenData::Services(screen) => screen.calendar.month_index(),
        other => panic!("expected services page, got {:?}", other.tab()),
    }
}

#[test]
fn test_starts_on_services() {
    let app = SmileStudioApp::new(AppState::default());
    assert_eq!(app.screen().tab(), Tab::Services);
    assert_eq!(app.state().navigation.active(), Tab::Services);
}

#[test]
fn test_select_tab_mounts_page() {
    let mut app = SmileStudioApp::new(AppState::default());
    let _ = app.update(Message::SelectTab(Tab::Doctors));
    assert_eq!(app.screen().tab(), Tab::Doctors);
    assert_eq!(app.state().navigation.active(), Tab::Doctors);

    let _ = app.update(Message::ToggleSidebar);
    assert!(app.state().navigation.is_collapsed());
    assert_eq!(app.screen().tab(), Tab::Doctors);
}

#[test]
fn test_page_state_is_dropped_on_tab_switch() {
    let mut app = SmileStudioApp::new(AppState::default());
    let _ = app.update(Message::Services(ScreenMessage::ScreenMessage(
        ServicesMessage::NextMonth,
    )));
    assert_eq!(services_month(&app), 7);

    // reselecting the active tab keeps the page
    let _ = app.update(Message::SelectTab(Tab::Services));
    assert_eq!(services_month(&app), 7);

    let _ = app.update(Message::SelectTab(Tab::Home));
    let _ = app.update(Message::SelectTab(Tab::Services));
    assert_eq!(services_month(&app), 6);
}

#[test]
fn test_messages_for_unmounted_page_are_dropped() {
    let mut app = SmileStudioApp::new(AppState::default());
    let _ = app.update(Message::Doctors(ScreenMessage::ScreenMessage(
        DoctorsMessage::Next,
    )));
    assert_eq!(app.screen().tab(), Tab::Services);
    assert_eq!(services_month(&app), 6);
}

#[test]
fn test_services_updates() {
    let mut state = AppState::default();
    let mut screen = ServicesScreen::new(&state.catalog);
    assert_eq!(screen.service.as_deref(), Some("Teeth Whitening"));
    assert_eq!(screen.doctor.as_deref(), Some("Dr. Anika Rahman"));
    assert_eq!(screen.times_heading(), "Available Times on July 5, 2024");

    let _ = screen.update(ServicesMessage::DaySelected(None), &mut state);
    assert_eq!(screen.calendar.selected_date(), Some(ymd(2024, 7, 5)));

    let _ = screen.update(ServicesMessage::DaySelected(Some(ymd(2024, 7, 18))), &mut state);
    assert_eq!(screen.times_heading(), "Available Times on July 18, 2024");

    let _ = screen.update(ServicesMessage::SlotSelected("12:00 PM".to_string()), &mut state);
    assert_eq!(screen.slots.selected_label(), Some("10:30 AM"));
    let _ = screen.update(ServicesMessage::SlotSelected("3:00 PM".to_string()), &mut state);
    assert_eq!(screen.slots.selected_label(), Some("3:00 PM"));

    let _ = screen.update(ServicesMessage::DoctorSelected("Dr. Kamal Hasan".to_string()), &mut state);
    assert_eq!(screen.doctor.as_deref(), Some("Dr. Kamal Hasan"));

    for _ in 0..12 {
        let _ = screen.update(ServicesMessage::NextMonth, &mut state);
    }
    assert_eq!(screen.calendar.month_index(), 11);
    assert_eq!(screen.calendar.year(), 2024);
}

#[test]
fn test_doctors_updates() {
    let mut state = AppState::default();
    let mut screen = DoctorsScreen::new(&state.catalog);
    assert_eq!(screen.visible().len(), 6);

    let _ = screen.update(DoctorsMessage::GoTo(99), &mut state);
    assert_eq!(screen.paginator.page(), 4);
    assert_eq!(screen.visible().len(), 5);

    let _ = screen.update(DoctorsMessage::Next, &mut state);
    assert_eq!(screen.paginator.page(), 4);
    let _ = screen.update(DoctorsMessage::Prev, &mut state);
    assert_eq!(screen.paginator.page(), 3);
}

#[test]
fn test_contact_fields_are_local() {
    let mut state = AppState::default();
    let mut screen = ContactScreen::default();
    let _ = screen.update(ContactMessage::NameChanged("Rumi".to_string()), &mut state);
    let _ = screen.update(ContactMessage::MessageChanged("Hello".to_string()), &mut state);
    let _ = screen.update(ContactMessage::Send, &mut state);
    assert_eq!(screen.name, "Rumi");
    assert_eq!(screen.message, "Hello");
}

#[test]
fn test_home_shortcut_opens_services() {
    let state = AppState::new(Catalog::default(), Tab::Home, false);
    let mut app = SmileStudioApp::new(state);
    assert_eq!(app.screen().tab(), Tab::Home);

    // the shortcut is routed through a follow-up task, so the page is unchanged until it runs
    let _ = app.update(Message::Home(ScreenMessage::ParentMessage(
        ParentMessage::Navigate(Tab::Services),
    )));
    assert_eq!(app.screen().tab(), Tab::Home);

    let follow_up: Message = ParentMessage::Navigate(Tab::Services).into();
    assert!(matches!(follow_up, Message::SelectTab(Tab::Services)));
    let _ = app.update(follow_up);
    assert_eq!(app.screen().tab(), Tab::Services);
    assert_eq!(services_month(&app), 6);
}

#[test]
fn test_selected_promo_day_keeps_highlight() {
    let theme = Theme::Light;
    let status = button::Status::Active;
    let both = day_style(true, true)(&theme, status);
    let selected = day_style(true, false)(&theme, status);

    assert_eq!(both.border.color, theme.palette().success);
    assert_ne!(both.border, selected.border);
    assert_eq!(both.background, selected.background);
}
