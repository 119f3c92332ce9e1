use iced::{Element, Task, Theme};

use super::{AppState, Message, screens::ScreenData, widgets};

pub struct SmileStudioApp {
    state: AppState,
    screen: ScreenData,
}

impl SmileStudioApp {
    pub fn new(state: AppState) -> Self {
        let screen = ScreenData::for_tab(state.navigation.active(), &state);
        Self { state, screen }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> &ScreenData {
        &self.screen
    }

    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            self.state.catalog.clinic_name,
            self.state.navigation.active()
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTab(tab) => {
                if self.state.navigation.set_active(tab) {
                    self.screen = ScreenData::for_tab(tab, &self.state);
                }
                Task::none()
            }
            Message::ToggleSidebar => {
                self.state.navigation.toggle_collapsed();
                Task::none()
            }
            message => self.screen.update(message, &mut self.state),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        widgets::layout(
            widgets::sidebar(&self.state.navigation, &self.state.catalog.clinic_name),
            self.screen.view(&self.state),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Open the application window and block until it is closed.
pub fn run(state: AppState) -> iced::Result {
    log::info!(
        "starting {} on the {} tab",
        state.catalog.clinic_name,
        state.navigation.active().key()
    );
    iced::application(
        move || SmileStudioApp::new(state.clone()),
        SmileStudioApp::update,
        SmileStudioApp::view,
    )
    .title(SmileStudioApp::title)
    .theme(SmileStudioApp::theme)
    .run()
}
