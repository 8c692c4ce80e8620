//! Audio Context - 音频拼装限界上下文
//!
//! 职责:
//! - base64 载荷解码
//! - PCM 片段拼接
//! - WAV 容器封装

mod concat;
mod errors;
mod payload;
mod value_objects;
mod wav;

pub use concat::concatenate;
pub use errors::AudioError;
pub use payload::{decode_base64, decode_payload, encode_payload};
pub use value_objects::{AudioSpec, PcmBuffer, RawAudioPayload, WavFile, WAV_HEADER_LEN};
pub use wav::{encode_wav, inspect_wav, WavInfo};
