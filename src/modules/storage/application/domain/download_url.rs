const UPLOAD_MARKER: &str = "/upload/";
const ATTACHMENT_FLAG: &str = "fl_attachment";
const DEFAULT_FILENAME: &str = "resume.pdf";

/// Rewrites a stored asset URL into a download link that forces attachment
/// disposition with the given filename:
///
/// `{prefix}/upload/{suffix}` becomes
/// `{prefix}/upload/fl_attachment,{filename}/{suffix}`.
///
/// URLs without the `/upload/` marker are returned unchanged. The same holds
/// for URLs that already carry the attachment flag, so recomputing the link
/// from an already-transformed URL never double-inserts the segment.
pub fn attachment_url(stored_url: &str, filename: Option<&str>) -> String {
    let Some(idx) = stored_url.find(UPLOAD_MARKER) else {
        return stored_url.to_string();
    };

    let prefix = &stored_url[..idx];
    let suffix = &stored_url[idx + UPLOAD_MARKER.len()..];

    if suffix.starts_with(ATTACHMENT_FLAG) {
        return stored_url.to_string();
    }

    let filename = filename.unwrap_or(DEFAULT_FILENAME);

    format!("{}{}{},{}/{}", prefix, UPLOAD_MARKER, ATTACHMENT_FLAG, filename, suffix)
}
