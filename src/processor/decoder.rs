use image::DynamicImage;

use crate::error::DecodeError;

/// Removes any whitespace from the payload and re-pads it to
/// a full base64 block.
pub fn clean_payload(raw: &str) -> String {
    let mut cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let remainder = cleaned.len() % 4;
    if remainder != 0 {
        cleaned.extend(std::iter::repeat('=').take(4 - remainder));
    }

    cleaned
}

/// Cleans and decodes the base64 payload into its raw bytes.
pub fn decode_payload(raw: &str) -> Result<Vec<u8>, DecodeError> {
    let cleaned = clean_payload(raw);
    Ok(base64::decode(cleaned)?)
}

/// Loads an image from memory, guessing the format from its content.
pub fn load_image(data: &[u8]) -> Result<DynamicImage, DecodeError> {
    Ok(image::load_from_memory(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_whitespace_and_pads() {
        assert_eq!(clean_payload(" aGVs\nbG8\t"), "aGVsbG8=");
        assert_eq!(clean_payload("aGVsbA"), "aGVsbA==");
        assert_eq!(clean_payload("aGVsbG8h"), "aGVsbG8h");
        assert_eq!(clean_payload(""), "");
    }

    #[test]
    fn test_decode_unpadded_payload() {
        let data = decode_payload("aGVs\r\nbG8").unwrap();
        assert_eq!(data, b"hello");
    }

    #[test]
    fn test_decode_rejects_invalid_alphabet() {
        let err = decode_payload("not*base64!").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn test_decode_rejects_single_trailing_char() {
        assert_eq!(clean_payload("aGVsb"), "aGVsb===");
        assert!(matches!(decode_payload("aGVsb"), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_load_rejects_plain_text() {
        let err = load_image(b"this is definitely not an image").unwrap_err();
        assert!(matches!(err, DecodeError::Image(_)));
        assert!(err.to_string().starts_with("cannot identify image"));
    }
}
