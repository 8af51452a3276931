//! Export cleanup: strip the app footer and normalize blank lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// The trailer the exporter appends to every session: an elapsed-time line
/// followed by a blank line and the tracking notice.
static FOOTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\nStrength Training[^\n]*\n\nTracked on Setgraph\n?").unwrap());

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Clean a raw export blob and split it into lines.
///
/// Every footer block is replaced by a single newline, runs of blank lines
/// collapse into one, and leading/trailing newlines are trimmed. Empty
/// strings in the result are session separators. Input without a footer
/// passes through untouched.
pub fn clean(raw: &str) -> Vec<String> {
    let without_footer = FOOTER.replace_all(raw, "\n");
    let collapsed = BLANK_RUNS.replace_all(&without_footer, "\n\n");
    collapsed
        .trim_matches('\n')
        .split('\n')
        .map(str::to_owned)
        .collect()
}
