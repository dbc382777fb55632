mod app_state;
mod input_controller;
mod quiz_session;

pub use app_state::*;
pub use input_controller::*;
pub use quiz_session::*;
