//! Scanner input clean-up.

use crate::separator::US;

/// Caret notation some scanners emit for the unit separator.
pub const CARET_US: &str = "^_";

/// Normalize raw scanner output: trim, drop line breaks, and rewrite the
/// `^_` notation into a real unit separator when none is present.
pub fn normalize(raw: &str) -> String {
    let text: String = raw
        .trim()
        .chars()
        .filter(|&c| c != '\r' && c != '\n')
        .collect();
    if text.contains(US) {
        text
    } else {
        text.replace(CARET_US, "\x1f")
    }
}
