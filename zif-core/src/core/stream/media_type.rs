use std::path::Path;

/// The content type of files which aren't playable media.
const OCTET_STREAM: &str = "application/octet-stream";

/// The playable extensions and their content type.
const PLAYABLE: [(&str, &str); 16] = [
    ("avi", "video/x-msvideo"),
    ("m4v", "video/x-m4v"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
    ("mp4", "video/mp4"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("ts", "video/mp2t"),
    ("webm", "video/webm"),
    ("wmv", "video/x-ms-wmv"),
    ("flac", "audio/flac"),
    ("m4a", "audio/mp4"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("srt", "application/x-subrip"),
    ("vtt", "text/vtt"),
];

/// Returns the `Content-Type` header value of the given torrent file path.
/// Files which aren't playable media are served as an octet stream.
pub fn content_type(path: &str) -> &'static str {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(|extension| {
            PLAYABLE
                .iter()
                .find(|(e, _)| e.eq_ignore_ascii_case(extension))
        })
        .map(|(_, content_type)| *content_type)
        .unwrap_or(OCTET_STREAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!("video/x-matroska", content_type("Lorem/Ipsum.MKV"));
        assert_eq!("video/mp4", content_type("ipsum.mp4"));
        assert_eq!("application/x-subrip", content_type("Lorem/Subs/english.srt"));
    }

    #[test]
    fn test_content_type_not_playable() {
        assert_eq!(OCTET_STREAM, content_type("Lorem/lorem.nfo"));
        assert_eq!(OCTET_STREAM, content_type("Lorem/README"));
    }
}
