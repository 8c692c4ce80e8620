//! Command Handlers

mod audio_handlers;
mod script_handlers;

pub use audio_handlers::GenerateAudioHandler;
pub use script_handlers::{AssignVoicesHandler, ExtractDialogueHandler};
