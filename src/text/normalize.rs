//! Title normalization.
//!
//! Two forms are produced from a raw title:
//!
//! - the *display title*, used for output and for human-readable names, and
//! - the *comparison key*, a case-folded form used only for lookups.
//!
//! Both are computed by repeating a single pass until the output stops
//! changing, so normalizing an already-normalized title is a no-op.

use std::sync::LazyLock;

use regex::Regex;

use super::corrections::apply_corrections;

/// Upper bound on passes before giving up on reaching a fixed point.
const MAX_PASSES: usize = 32;

static SPACE_BEFORE_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w)/").unwrap());
static SPACE_AFTER_SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\w)").unwrap());
static VIRTUAL_BACK_FACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s/\s.*\(V\)").unwrap());
static BACK_FACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s/.*").unwrap());

static OPEN_VARIANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(V$").unwrap());
static BARE_VARIANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s[vV]$").unwrap());
static WRAPPED_VARIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(+[vV]\)+$").unwrap());
static LOWER_VARIANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(v\)").unwrap());
static GLUED_VARIANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w)\(V\)").unwrap());

static AI_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(AI\)").unwrap());

/// Repeat `pass` until the output equals its input.
///
/// Stops after a fixed number of passes if the rewrite never settles; the
/// last output is returned in that case.
pub fn converge<F>(input: &str, pass: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut current = pass(input);
    for _ in 1..MAX_PASSES {
        let next = pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
    tracing::debug!(title = %input, "title normalization did not settle");
    current
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop uniqueness dots and angle-bracket placeholders and straighten quotes.
fn strip_markers(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '•' | '<' | '>' => {}
            '\u{2018}' | '\u{2019}' | '`' | '\u{b4}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            _ => out.push(c),
        }
    }
    collapse_whitespace(&out)
}

/// Keep only the front face of a two-faced title.
///
/// `"A / B (V)"` becomes `"A (V)"` and `"A / B"` becomes `"A"`.
fn front_face(input: &str) -> String {
    let spaced = SPACE_BEFORE_SLASH.replace_all(input, "$1 /");
    let spaced = SPACE_AFTER_SLASH.replace_all(&spaced, "/ $1");
    let virtual_front = VIRTUAL_BACK_FACE.replace_all(&spaced, " (V)");
    BACK_FACE.replace_all(&virtual_front, "").into_owned()
}

/// Canonicalize the "(V)" virtual-card suffix.
fn canonical_variant(input: &str) -> String {
    let s = OPEN_VARIANT.replace_all(input, "(V)");
    let s = BARE_VARIANT.replace_all(&s, " (V)");
    let s = WRAPPED_VARIANT.replace_all(&s, "(V)");
    let s = LOWER_VARIANT.replace_all(&s, "(V)");
    GLUED_VARIANT.replace_all(&s, "$1 (V)").into_owned()
}

fn display_pass(input: &str) -> String {
    let s = strip_markers(input);
    let s = apply_corrections(&s);
    let s = front_face(&s);
    let s = canonical_variant(&s);
    collapse_whitespace(&s)
}

fn key_pass(input: &str) -> String {
    let s = display_pass(input);
    let s = AI_MARKER.replace_all(&s, "");
    let s = s.replace("...", "").replace(['"', '!'], "");
    collapse_whitespace(&s.to_lowercase())
}

/// Human-readable canonical form of a card title.
///
/// ## Example
///
/// ```
/// use swccg_decklists::text::display_title;
///
/// assert_eq!(display_title("•Hidden Base / Systems Will Slip Through Your Fingers"), "Hidden Base");
/// assert_eq!(display_title("Sense(v)"), "Sense (V)");
/// ```
#[must_use]
pub fn display_title(title: &str) -> String {
    converge(title, display_pass)
}

/// Case-folded lookup key for a card title.
///
/// Two titles naming the same card produce the same key. Never shown to
/// users.
///
/// ## Example
///
/// ```
/// use swccg_decklists::text::comparison_key;
///
/// assert_eq!(comparison_key("Artoo-Deetoo"), "artoo-detoo");
/// assert_eq!(comparison_key("It's A Trap!"), comparison_key("It's a Trap"));
/// ```
#[must_use]
pub fn comparison_key(title: &str) -> String {
    converge(title, key_pass)
}

/// Lowercase alphanumeric form used to compare archetype names.
#[must_use]
pub fn comparable_string(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
