// src/core/selection.rs

use crate::core::errors::SelectionError;
use crate::core::models::SelectedFile;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};
use url::Url;

/// A magic-number signature identifying an image format.
pub struct ImageSignature {
    pub mime: &'static str,
    /// Byte offset where `magic` must appear.
    pub offset: usize,
    pub magic: &'static [u8],
}

/// Content signatures checked before falling back to the file extension.
static SIGNATURES: &[ImageSignature] = &[
    ImageSignature { mime: "image/png", offset: 0, magic: b"\x89PNG\r\n\x1a\n" },
    ImageSignature { mime: "image/jpeg", offset: 0, magic: b"\xff\xd8\xff" },
    ImageSignature { mime: "image/gif", offset: 0, magic: b"GIF87a" },
    ImageSignature { mime: "image/gif", offset: 0, magic: b"GIF89a" },
    ImageSignature { mime: "image/webp", offset: 8, magic: b"WEBP" },
    ImageSignature { mime: "image/bmp", offset: 0, magic: b"BM" },
    ImageSignature { mime: "image/tiff", offset: 0, magic: b"II*\0" },
    ImageSignature { mime: "image/tiff", offset: 0, magic: b"MM\0*" },
    ImageSignature { mime: "image/x-icon", offset: 0, magic: b"\0\0\x01\0" },
];

static EXTENSIONS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ico", "image/x-icon"),
    ("svg", "image/svg+xml"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("json", "application/json"),
];

const UNKNOWN_MIME: &str = "application/octet-stream";

/// Determines a MIME type from the file content, then from its extension.
pub fn sniff_mime(bytes: &[u8], path: &Path) -> &'static str {
    let by_content = SIGNATURES.iter().find(|sig| {
        bytes
            .get(sig.offset..sig.offset + sig.magic.len())
            .is_some_and(|window| window == sig.magic)
    });
    if let Some(sig) = by_content {
        return sig.mime;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| EXTENSIONS.iter().find(|(known, _)| *known == ext))
        .map(|(_, mime)| *mime)
        .unwrap_or(UNKNOWN_MIME)
}

/// Bytes read from the start of a file for content sniffing. Covers every
/// entry in [`SIGNATURES`].
pub const SNIFF_LEN: u64 = 16;

/// Checks that a file on disk is an image without reading its body.
///
/// Only the first [`SNIFF_LEN`] bytes and the metadata are read.
pub async fn load_selected_file(path: &Path) -> Result<SelectedFile, SelectionError> {
    debug!(path = %path.display(), "Loading candidate file.");
    let unreadable = |source| SelectionError::Unreadable { path: path.to_path_buf(), source };

    let file = File::open(path).await.map_err(unreadable)?;
    let size = file.metadata().await.map_err(unreadable)?.len();
    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    file.take(SNIFF_LEN).read_to_end(&mut header).await.map_err(unreadable)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime = sniff_mime(&header, path).to_string();

    let file = SelectedFile { path: path.to_path_buf(), name, mime, size };
    if !file.is_image() {
        warn!(name = %file.name, mime = %file.mime, "Rejected non-image file.");
        return Err(SelectionError::InvalidFileType { name: file.name, mime: file.mime });
    }

    info!(name = %file.name, mime = %file.mime, size = file.size, "File accepted.");
    Ok(file)
}

/// Extracts file paths from text pasted into the terminal.
///
/// Terminals deliver a dropped file as its path, which may be quoted,
/// backslash-escaped or a `file://` URI. Several dropped files are
/// separated by whitespace.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = text.trim().chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => quote = Some(c),
            (None, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    paths.push(to_path(&std::mem::take(&mut current)));
                }
            }
            (None, c) => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(to_path(&current));
    }
    paths
}

fn to_path(token: &str) -> PathBuf {
    if token.starts_with("file://") {
        if let Some(path) = Url::parse(token).ok().and_then(|u| u.to_file_path().ok()) {
            return path;
        }
    }
    PathBuf::from(token)
}
