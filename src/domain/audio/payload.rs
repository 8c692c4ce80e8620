//! Payload Codec - base64 音频载荷解码
//!
//! 标准字母表，填充可选；空白字符在解码前剔除

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use super::{AudioError, PcmBuffer, RawAudioPayload};

/// 接受带填充与不带填充两种尾组；尾组未使用的低位不要求为 0
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// 解码 base64 载荷为 PCM 字节
///
/// 只剩 1 个有效字符的尾组无法构成完整字节，按错误处理而不是丢弃
pub fn decode_payload(payload: &RawAudioPayload) -> Result<PcmBuffer, AudioError> {
    decode_base64(payload.as_str()).map(PcmBuffer::new)
}

/// 解码 base64 文本
pub fn decode_base64(input: &str) -> Result<Vec<u8>, AudioError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    PAYLOAD_ENGINE
        .decode(compact.as_bytes())
        .map_err(|e| AudioError::DecodeError(e.to_string()))
}

/// 编码 PCM 为 base64 载荷（带填充）
pub fn encode_payload(pcm: &PcmBuffer) -> RawAudioPayload {
    RawAudioPayload::new(PAYLOAD_ENGINE.encode(pcm.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_three_byte_group() {
        assert_eq!(decode_base64("AAAB").unwrap(), vec![0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_decode_padded_and_unpadded_tails() {
        // "hi" -> "aGk=" / "aGk"
        assert_eq!(decode_base64("aGk=").unwrap(), b"hi".to_vec());
        assert_eq!(decode_base64("aGk").unwrap(), b"hi".to_vec());
        // "h" -> "aA==" / "aA"
        assert_eq!(decode_base64("aA==").unwrap(), b"h".to_vec());
        assert_eq!(decode_base64("aA").unwrap(), b"h".to_vec());
    }

    #[test]
    fn test_decode_ignores_unused_tail_bits() {
        assert_eq!(decode_base64("AAB").unwrap(), vec![0x00, 0x00]);
        assert_eq!(decode_base64("aGl=").unwrap(), b"hi".to_vec());
        assert_eq!(decode_base64("aB").unwrap(), b"h".to_vec());
    }

    #[test]
    fn test_decode_strips_whitespace() {
        assert_eq!(
            decode_base64(" AA\nAB\r\n\t").unwrap(),
            vec![0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode_base64("").unwrap().is_empty());
        assert!(decode_base64("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        let err = decode_base64("AA*B").unwrap_err();
        assert!(matches!(err, AudioError::DecodeError(_)));
        assert!(decode_base64("AA-_").is_err());
    }

    #[test]
    fn test_decode_rejects_single_trailing_symbol() {
        assert!(matches!(
            decode_base64("AAAAB"),
            Err(AudioError::DecodeError(_))
        ));
        assert!(decode_base64("A").is_err());
    }

    #[test]
    fn test_round_trip_arbitrary_bytes() {
        for len in 0..16usize {
            let bytes: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let pcm = PcmBuffer::new(bytes.clone());
            let decoded = decode_payload(&encode_payload(&pcm)).unwrap();
            assert_eq!(decoded.as_bytes(), bytes.as_slice());
        }
    }
}
