//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Audio Context: 载荷解码、PCM 拼接、WAV 封装
//! - Script Context: 对白、语气、音色分配、合成计划

pub mod audio;
pub mod script;
