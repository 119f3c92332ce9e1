mod app;
mod message;
mod state;
pub mod screens;
mod widgets;

pub use app::{SmileStudioApp, run};
pub use message::Message;
pub use state::AppState;
