//! WAV Container - RIFF/WAVE 封装与文件头解析
//!
//! 布局（所有多字节字段均为小端）:
//! ```text
//! 0  "RIFF"   4  36 + data_len   8  "WAVE"
//! 12 "fmt "   16 16              20 1 (PCM)   22 channels
//! 24 sample_rate   28 byte_rate  32 block_align   34 bits_per_sample
//! 36 "data"   40 data_len        44 PCM ...
//! ```

use super::{AudioError, AudioSpec, PcmBuffer, WavFile, WAV_HEADER_LEN};

/// fmt chunk 长度（PCM）
const FMT_CHUNK_LEN: u32 = 16;
/// PCM 格式标记
const FORMAT_PCM: u16 = 1;

/// 将 PCM 数据封装为 WAV 文件
///
/// 相同输入总是得到逐字节相同的输出
pub fn encode_wav(pcm: &PcmBuffer, spec: &AudioSpec) -> Result<WavFile, AudioError> {
    if spec.bits_per_sample == 0 || spec.bits_per_sample % 8 != 0 {
        return Err(AudioError::EncodeError(format!(
            "unsupported bits per sample: {}",
            spec.bits_per_sample
        )));
    }
    if spec.channels == 0 {
        return Err(AudioError::EncodeError("channel count cannot be 0".to_string()));
    }
    let (block_align, byte_rate) = match (spec.block_align(), spec.byte_rate()) {
        (Some(block_align), Some(byte_rate)) => (block_align, byte_rate),
        _ => {
            return Err(AudioError::EncodeError(format!(
                "{} Hz / {} channels / {} bit exceeds the WAV header field range",
                spec.sample_rate, spec.channels, spec.bits_per_sample
            )))
        }
    };
    if pcm.len() % block_align as usize != 0 {
        return Err(AudioError::EncodeError(format!(
            "PCM length {} is not a multiple of the {}-byte sample frame",
            pcm.len(),
            block_align
        )));
    }

    let data_len = pcm.len();
    let riff_len = u32::try_from(data_len)
        .ok()
        .and_then(|len| len.checked_add(36))
        .ok_or_else(|| {
            AudioError::EncodeError(format!("PCM length {} exceeds the RIFF size limit", data_len))
        })?;

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + data_len);

    // RIFF header
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&riff_len.to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    wav.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    wav.extend_from_slice(&spec.channels.to_le_bytes());
    wav.extend_from_slice(&spec.sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&spec.bits_per_sample.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data_len as u32).to_le_bytes());
    wav.extend_from_slice(pcm.as_bytes());

    Ok(WavFile::from_parts(wav, *spec))
}

/// WAV 文件信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    pub spec: AudioSpec,
    /// PCM 数据起始偏移
    pub data_offset: usize,
    /// PCM 数据长度
    pub data_len: usize,
    pub duration_ms: u64,
}

/// 解析 WAV 文件头
///
/// 遍历 chunk 直到找到 data chunk，未知 chunk 跳过
pub fn inspect_wav(data: &[u8]) -> Result<WavInfo, AudioError> {
    if data.len() < WAV_HEADER_LEN {
        return Err(AudioError::InvalidWav("WAV data too short".to_string()));
    }
    if &data[0..4] != b"RIFF" {
        return Err(AudioError::InvalidWav("missing RIFF header".to_string()));
    }
    if &data[8..12] != b"WAVE" {
        return Err(AudioError::InvalidWav("missing WAVE identifier".to_string()));
    }

    let mut pos = 12;
    let mut spec: Option<AudioSpec> = None;

    while pos + 8 <= data.len() {
        let chunk_id = &data[pos..pos + 4];
        let chunk_len = read_u32(data, pos + 4) as usize;
        let body = pos + 8;

        match chunk_id {
            b"fmt " => {
                if chunk_len < FMT_CHUNK_LEN as usize || body + 16 > data.len() {
                    return Err(AudioError::InvalidWav("invalid fmt chunk size".to_string()));
                }
                let format = read_u16(data, body);
                if format != FORMAT_PCM {
                    return Err(AudioError::InvalidWav(format!(
                        "unsupported format tag: {}",
                        format
                    )));
                }
                let parsed = AudioSpec {
                    channels: read_u16(data, body + 2),
                    sample_rate: read_u32(data, body + 4),
                    bits_per_sample: read_u16(data, body + 14),
                };
                if parsed.byte_rate().is_none() {
                    return Err(AudioError::InvalidWav(format!(
                        "fmt chunk declares an out-of-range format: {} Hz / {} channels / {} bit",
                        parsed.sample_rate, parsed.channels, parsed.bits_per_sample
                    )));
                }
                spec = Some(parsed);
            }
            b"data" => {
                let spec = spec.ok_or_else(|| {
                    AudioError::InvalidWav("data chunk before fmt chunk".to_string())
                })?;
                if body + chunk_len > data.len() {
                    return Err(AudioError::InvalidWav(format!(
                        "data chunk declares {} bytes but only {} remain",
                        chunk_len,
                        data.len() - body
                    )));
                }
                return Ok(WavInfo {
                    spec,
                    data_offset: body,
                    data_len: chunk_len,
                    duration_ms: spec.duration_ms(chunk_len),
                });
            }
            _ => {}
        }

        // chunk 按偶数字节对齐
        pos = body + chunk_len + (chunk_len % 2);
    }

    Err(AudioError::InvalidWav("missing data chunk".to_string()))
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
