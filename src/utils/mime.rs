use crate::model::entry::PDF_MIME_TYPE;

/// Bytes read from the start of a file to classify it.
pub const SNIFF_LENGTH: usize = 512;

pub const EMPTY: &str = "inode/x-empty";
pub const TEXT: &str = "text/plain";
pub const OCTET_STREAM: &str = "application/octet-stream";

const SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF-", PDF_MIME_TYPE),
    (b"%!PS", "application/postscript"),
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1f\x8b", "application/gzip"),
];

/// Content type from the leading bytes of a file, like `file --mime-type`.
/// The file name plays no part.
pub fn sniff(head: &[u8]) -> &'static str {
    if head.is_empty() {
        return EMPTY;
    }

    if let Some((_, mime_type)) = SIGNATURES
        .iter()
        .find(|(magic, _)| head.starts_with(magic))
    {
        return *mime_type;
    }

    match std::str::from_utf8(head) {
        Ok(_) => TEXT,
        // A multi-byte character cut off at the end of the sample.
        Err(err) if err.error_len().is_none() => TEXT,
        Err(_) => OCTET_STREAM,
    }
}
