/// Sniff a MIME type from the leading bytes of a file.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    let mime = match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x47, 0x49, 0x46, 0x38, ..] => "image/gif",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x41, 0x56, 0x45, ..] => "audio/wav",
        [0x42, 0x4D, ..] => "image/bmp",
        [0x25, 0x50, 0x44, 0x46, ..] => "application/pdf",
        [0x50, 0x4B, 0x03, 0x04, ..] => "application/zip",
        // Animated stickers (.tgs) are gzipped Lottie JSON.
        [0x1F, 0x8B, ..] => "application/gzip",
        [_, _, _, _, 0x66, 0x74, 0x79, 0x70, 0x71, 0x74, ..] => "video/quicktime",
        [_, _, _, _, 0x66, 0x74, 0x79, 0x70, ..] => "video/mp4",
        [0x1A, 0x45, 0xDF, 0xA3, ..] => "video/webm",
        [0x4F, 0x67, 0x67, 0x53, ..] => "audio/ogg",
        [0x66, 0x4C, 0x61, 0x43, ..] => "audio/flac",
        [0x49, 0x44, 0x33, ..] | [0xFF, 0xFB, ..] | [0xFF, 0xF3, ..] | [0xFF, 0xF2, ..] => {
            "audio/mpeg"
        }
        _ => return None,
    };
    Some(mime)
}

/// Guess a MIME type from a file name's extension.
pub fn guess_from_name(name: &str) -> Option<String> {
    mime_guess::from_path(name)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

/// Resolve the MIME type of an upload: explicit value, then content sniffing,
/// then the file name's extension.
pub fn resolve_mime(explicit: Option<&str>, content: &[u8], name: &str) -> Option<String> {
    if let Some(mime) = explicit.filter(|m| !m.is_empty()) {
        return Some(mime.to_string());
    }

    if let Some(mime) = sniff_mime(content) {
        return Some(mime.to_string());
    }

    let guessed = guess_from_name(name);
    if let Some(mime) = &guessed {
        tracing::warn!(
            "Unrecognized content (first 4 bytes: {:02X?}), using {} from file name {}",
            &content[..content.len().min(4)],
            mime,
            name
        );
    }
    guessed
}
