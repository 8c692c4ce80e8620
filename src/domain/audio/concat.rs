//! PCM Concatenator - 按原始顺序拼接 PCM 片段

use super::{AudioError, PcmBuffer};

/// 拼接多个 PCM 片段
///
/// 不插入静音、不重排、不去重；空列表返回空缓冲区
pub fn concatenate(segments: &[PcmBuffer]) -> Result<PcmBuffer, AudioError> {
    let expected: usize = segments.iter().map(PcmBuffer::len).sum();

    let mut joined = Vec::with_capacity(expected);
    for segment in segments {
        joined.extend_from_slice(segment.as_bytes());
    }

    if joined.len() != expected {
        return Err(AudioError::ConcatenationLengthMismatch {
            expected,
            actual: joined.len(),
        });
    }

    tracing::debug!(
        segments = segments.len(),
        total_bytes = expected,
        "Concatenated PCM segments"
    );

    Ok(PcmBuffer::new(joined))
}
