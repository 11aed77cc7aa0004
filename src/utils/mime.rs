//! Accepted image formats and content sniffing.

/// File extensions accepted for upload (lowercase, without the dot).
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Check whether a filename carries an accepted image extension.
pub fn is_accepted_image(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Value for an `<input type="file" accept=...>` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// Detect the MIME type of image bytes, for previews.
///
/// Falls back to `application/octet-stream` when the content is not a known
/// image format.
pub fn sniff_image_mime(bytes: &[u8]) -> &'static str {
    match infer::get(bytes) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => kind.mime_type(),
        _ => "application/octet-stream",
    }
}
