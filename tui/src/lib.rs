mod app;
pub use app::{App, AppState, AppView, GenerationOutcome};

pub mod logging;
pub mod preferences;
pub mod print;
pub mod theme;
pub mod views;
pub use views::*;
