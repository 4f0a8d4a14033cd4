//! Display-safety for text received from the network.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// CSI, OSC (BEL or ST terminated), and two-byte ESC sequences.
static ESCAPE_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~]|\][^\x07\x1b]*(?:\x07|\x1b\\)?|[@-Z\\-_])")
        .expect("escape pattern is a valid regex")
});

/// Strip terminal escape sequences and control characters from untrusted text.
///
/// Newlines and tabs survive. Clean input is returned borrowed.
#[must_use]
pub fn sanitize_display_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_unsafe) {
        return Cow::Borrowed(input);
    }
    let without_sequences = ESCAPE_SEQUENCE.replace_all(input, "");
    Cow::Owned(
        without_sequences
            .chars()
            .filter(|c| !is_unsafe(*c))
            .collect(),
    )
}

fn is_unsafe(c: char) -> bool {
    match c {
        '\n' | '\t' => false,
        c => c.is_control(),
    }
}
