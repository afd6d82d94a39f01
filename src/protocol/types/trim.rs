//! Trailing-padding removal for fixed-width text.

/// Remove trailing whitespace, keeping leading and interior whitespace.
///
/// Operates on decoded text. `None` stays `None`.
pub fn trim_trailing(text: Option<&str>) -> Option<&str> {
    text.map(str::trim_end)
}

/// Owned variant of [`trim_trailing`], reusing the allocation.
pub(crate) fn trim_trailing_owned(mut text: String) -> String {
    let len = text.trim_end().len();
    text.truncate(len);
    text
}
