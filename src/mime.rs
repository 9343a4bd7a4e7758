//! Content-type detection from magic bytes.

use std::fmt;

/// Number of leading bytes included in the diagnostic for unknown payloads.
const PREVIEW_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Png,
    Jpeg,
    Webp,
    Bmp,
    Gif,
    Icon,
    Avif,
    Heic,
    OctetStream,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Png => "image/png",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Webp => "image/webp",
            ContentType::Bmp => "image/bmp",
            ContentType::Gif => "image/gif",
            ContentType::Icon => "image/x-icon",
            ContentType::Avif => "image/avif",
            ContentType::Heic => "image/heic",
            ContentType::OctetStream => "application/octet-stream",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the content type of an image from its leading bytes.
///
/// Signatures are tried in a fixed order and the first match wins, so a
/// buffer that satisfies several patterns always resolves to the earliest
/// one. Short buffers simply fail the longer patterns.
pub fn detect_content_type(bytes: &[u8]) -> ContentType {
    match bytes {
        [] => ContentType::OctetStream,
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => ContentType::Png,
        [0xFF, 0xD8, 0xFF, ..] => ContentType::Jpeg,
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => ContentType::Webp,
        [b'B', b'M' | b'A', ..] | [b'C', b'I' | b'P', ..] | [b'I', b'C', ..] | [b'P', b'T', ..] => {
            ContentType::Bmp
        }
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => ContentType::Gif,
        [0x00, 0x00, 0x01, 0x00, ..] => ContentType::Icon,
        [_, _, _, _, b'f', b't', b'y', b'p', b'a', b'v', b'i', b'f' | b's', ..] => {
            ContentType::Avif
        }
        [_, _, _, _, b'f', b't', b'y', b'p', b'h', b'e', b'i' | b'v', b'c' | b'x', ..] => {
            ContentType::Heic
        }
        _ => {
            tracing::warn!(
                first_bytes = %hex::encode(&bytes[..bytes.len().min(PREVIEW_LEN)]),
                "Could not detect image content type from magic bytes"
            );
            ContentType::OctetStream
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_detect_empty() {
        assert_eq!(detect_content_type(b""), ContentType::OctetStream);
    }

    #[test]
    fn test_detect_png_regardless_of_trailer() {
        assert_eq!(detect_content_type(&PNG_SIGNATURE), ContentType::Png);

        let mut long = PNG_SIGNATURE.to_vec();
        long.extend(std::iter::repeat(0xAB).take(4096));
        assert_eq!(detect_content_type(&long), ContentType::Png);
    }

    #[test]
    fn test_truncated_png_signature_is_not_png() {
        assert_eq!(
            detect_content_type(&PNG_SIGNATURE[..4]),
            ContentType::OctetStream
        );
    }

    #[test]
    fn test_detect_jpeg() {
        assert_eq!(detect_content_type(&[0xFF, 0xD8, 0xFF]), ContentType::Jpeg);
        assert_eq!(
            detect_content_type(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]),
            ContentType::Jpeg
        );
    }

    #[test]
    fn test_detect_webp() {
        assert_eq!(
            detect_content_type(b"RIFF\x24\x00\x00\x00WEBPVP8 "),
            ContentType::Webp
        );
    }

    #[test]
    fn test_riff_without_webp_is_unknown() {
        assert_eq!(
            detect_content_type(b"RIFF\x24\x00\x00\x00WAVEfmt "),
            ContentType::OctetStream
        );
        assert_eq!(detect_content_type(b"RIFF"), ContentType::OctetStream);
    }

    #[test]
    fn test_detect_bmp_variants() {
        for prefix in [b"BM", b"BA", b"CI", b"CP", b"IC", b"PT"] {
            assert_eq!(detect_content_type(prefix), ContentType::Bmp, "{:?}", prefix);
        }
    }

    #[test]
    fn test_detect_gif() {
        assert_eq!(detect_content_type(b"GIF87a\x01\x00"), ContentType::Gif);
        assert_eq!(detect_content_type(b"GIF89a"), ContentType::Gif);
        assert_eq!(detect_content_type(b"GIF88a"), ContentType::OctetStream);
    }

    #[test]
    fn test_detect_icon() {
        assert_eq!(
            detect_content_type(&[0x00, 0x00, 0x01, 0x00, 0x01, 0x00]),
            ContentType::Icon
        );
    }

    #[test]
    fn test_detect_avif() {
        assert_eq!(
            detect_content_type(b"\x00\x00\x00\x1cftypavif"),
            ContentType::Avif
        );
        assert_eq!(
            detect_content_type(b"\x00\x00\x00\x1cftypavis\x00\x00"),
            ContentType::Avif
        );
    }

    #[test]
    fn test_detect_heic() {
        for brand in [b"heic", b"heix", b"hevc", b"hevx"] {
            let mut data = b"\x00\x00\x00\x18ftyp".to_vec();
            data.extend_from_slice(brand);
            assert_eq!(detect_content_type(&data), ContentType::Heic);
        }
        assert_eq!(
            detect_content_type(b"\x00\x00\x00\x18ftypheif"),
            ContentType::OctetStream
        );
    }

    #[test]
    fn test_short_buffer_does_not_match_avif() {
        // Only 10 bytes: "ftypav" without the final brand bytes.
        assert_eq!(
            detect_content_type(b"\x00\x00\x00\x1cftypav"),
            ContentType::OctetStream
        );
    }

    #[test]
    fn test_earlier_rule_wins() {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(b"ftypavif");
        assert_eq!(detect_content_type(&data), ContentType::Png);

        // "BM" at offset 0 and "ftypavif" at offset 4: bmp is checked first.
        assert_eq!(
            detect_content_type(b"BM\x00\x00ftypavif"),
            ContentType::Bmp
        );

        // A gif header behind a jpeg prefix is still jpeg.
        assert_eq!(
            detect_content_type(b"\xff\xd8\xffGIF89a"),
            ContentType::Jpeg
        );
    }

    #[test]
    fn test_detection_is_deterministic() {
        let data = b"\x00\x00\x00\x18ftyphevc....";
        let first = detect_content_type(data);
        for _ in 0..10 {
            assert_eq!(detect_content_type(data), first);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_octet_stream() {
        assert_eq!(
            detect_content_type(&[0x01, 0x02, 0x03, 0x04]),
            ContentType::OctetStream
        );
        assert_eq!(detect_content_type(&[0u8; 64]), ContentType::OctetStream);
    }

    #[test]
    fn test_content_type_strings() {
        assert_eq!(ContentType::Icon.as_str(), "image/x-icon");
        assert_eq!(ContentType::Heic.to_string(), "image/heic");
        assert_eq!(
            ContentType::OctetStream.to_string(),
            "application/octet-stream"
        );
    }
}
