//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：剧本解析、音色分配、音频生成

mod audio_commands;
mod script_commands;

pub mod handlers;

pub use audio_commands::*;
pub use script_commands::*;
