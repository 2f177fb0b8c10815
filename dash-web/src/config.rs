//! Mount target for the footer.

/// Element id the footer renders into when the wasm bundle starts.
pub const DEFAULT_FOOTER_ROOT: &str = "footer";

/// Normalize a mount target to a bare element id.
///
/// Accepts either `footer` or a selector-style `#footer`. Blank input falls
/// back to [`DEFAULT_FOOTER_ROOT`].
#[must_use]
pub fn footer_root_id(raw: &str) -> &str {
    let id = raw.trim().trim_start_matches('#').trim();
    if id.is_empty() { DEFAULT_FOOTER_ROOT } else { id }
}
