//! Audio Context - Value Objects

use serde::{Deserialize, Serialize};

/// WAV 文件头固定长度
pub const WAV_HEADER_LEN: usize = 44;

/// 外部合成服务返回的 base64 音频载荷
///
/// 仅在网络响应与解码之间短暂存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAudioPayload(String);

impl RawAudioPayload {
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 去除空白后是否为空
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// PCM 音频参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSpec {
    /// 采样率（Hz）
    pub sample_rate: u32,
    /// 声道数
    pub channels: u16,
    /// 位深度
    pub bits_per_sample: u16,
}

impl AudioSpec {
    /// 合成服务输出格式：24kHz / 单声道 / 16 位
    pub const SPEECH_24K_MONO: AudioSpec = AudioSpec {
        sample_rate: 24_000,
        channels: 1,
        bits_per_sample: 16,
    };

    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// 一个采样帧（所有声道）的字节数，超出 u16 时为 None
    pub fn block_align(&self) -> Option<u16> {
        self.channels.checked_mul(self.bytes_per_sample())
    }

    /// 每秒字节数，超出 u32 时为 None
    pub fn byte_rate(&self) -> Option<u32> {
        self.block_align()
            .and_then(|block| self.sample_rate.checked_mul(u32::from(block)))
    }

    /// 计算给定字节数的播放时长（毫秒）
    pub fn duration_ms(&self, data_len: usize) -> u64 {
        match self.byte_rate() {
            Some(rate) if rate > 0 => (data_len as u64).saturating_mul(1000) / u64::from(rate),
            _ => 0,
        }
    }
}

impl Default for AudioSpec {
    fn default() -> Self {
        Self::SPEECH_24K_MONO
    }
}

/// PCM 缓冲区 - 16 位小端有符号采样
///
/// 不变量:
/// - 字节内容不做重采样或重新解释
/// - 帧对齐在封装 WAV 时校验，见 [`crate::domain::audio::encode_wav`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcmBuffer(Vec<u8>);

impl PcmBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// 字节数是否为采样帧大小的整数倍
    pub fn is_frame_aligned(&self, spec: &AudioSpec) -> bool {
        match spec.block_align() {
            Some(block) if block != 0 => self.0.len() % block as usize == 0,
            _ => false,
        }
    }
}

impl From<Vec<u8>> for PcmBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// 完整的 WAV 文件（44 字节头 + PCM 数据）
///
/// 构建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    bytes: Vec<u8>,
    spec: AudioSpec,
}

impl WavFile {
    pub const CONTENT_TYPE: &'static str = "audio/wav";

    pub(crate) fn from_parts(bytes: Vec<u8>, spec: AudioSpec) -> Self {
        Self { bytes, spec }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn spec(&self) -> AudioSpec {
        self.spec
    }

    /// PCM 数据部分长度
    pub fn data_len(&self) -> usize {
        self.bytes.len().saturating_sub(WAV_HEADER_LEN)
    }

    pub fn duration_ms(&self) -> u64 {
        self.spec.duration_ms(self.data_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_spec_derived_fields() {
        let spec = AudioSpec::SPEECH_24K_MONO;
        assert_eq!(spec.block_align(), Some(2));
        assert_eq!(spec.byte_rate(), Some(48_000));
        assert_eq!(spec.duration_ms(48_000), 1000);
        assert_eq!(spec.duration_ms(0), 0);
    }

    #[test]
    fn test_oversized_spec_does_not_overflow() {
        let wide = AudioSpec {
            sample_rate: 24_000,
            channels: u16::MAX,
            bits_per_sample: 16,
        };
        assert_eq!(wide.block_align(), None);
        assert_eq!(wide.byte_rate(), None);
        assert_eq!(wide.duration_ms(1_000), 0);
        assert!(!PcmBuffer::new(vec![0; 4]).is_frame_aligned(&wide));

        let fast = AudioSpec {
            sample_rate: u32::MAX,
            channels: 2,
            bits_per_sample: 16,
        };
        assert_eq!(fast.block_align(), Some(4));
        assert_eq!(fast.byte_rate(), None);
    }

    #[test]
    fn test_frame_alignment() {
        let spec = AudioSpec::SPEECH_24K_MONO;
        assert!(PcmBuffer::new(vec![0, 0, 1, 1]).is_frame_aligned(&spec));
        assert!(PcmBuffer::empty().is_frame_aligned(&spec));
        assert!(!PcmBuffer::new(vec![0, 0, 1]).is_frame_aligned(&spec));

        let stereo = AudioSpec {
            channels: 2,
            ..spec
        };
        assert!(!PcmBuffer::new(vec![0, 0]).is_frame_aligned(&stereo));
    }

    #[test]
    fn test_blank_payload() {
        assert!(RawAudioPayload::new("  \n").is_blank());
        assert!(!RawAudioPayload::new("AAAA").is_blank());
    }
}
