//! HTTP Handlers

mod audio;
mod ping;
mod script;
mod transcript;
mod voice;

pub use audio::*;
pub use ping::*;
pub use script::*;
pub use transcript::*;
pub use voice::*;
