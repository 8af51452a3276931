// Renderer: serialize sessions into the compact tabular form.

use crate::session::{LiftSet, Rep, Session};

/// Render sessions as tab-separated set lines with one blank line between
/// sessions.
pub fn render(sessions: &[Session]) -> String {
    sessions
        .iter()
        .map(render_session)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_session(session: &Session) -> String {
    session.sets.iter().map(render_set).collect()
}

/// `<name>\t<weights>kg <n>*<counts>\n`
fn render_set(set: &LiftSet) -> String {
    format!(
        "{}\t{}kg {}*{}\n",
        set.name,
        weight_field(&set.reps),
        set.reps.len(),
        count_field(&set.reps)
    )
}

/// A single shared weight, or all weights in source order joined by `/`.
fn weight_field(reps: &[Rep]) -> String {
    match reps {
        [] => "0".to_owned(),
        [first, rest @ ..] if rest.iter().all(|r| r.weight == first.weight) => {
            format_weight(first.weight)
        }
        _ => reps
            .iter()
            .map(|r| format_weight(r.weight))
            .collect::<Vec<_>>()
            .join("/"),
    }
}

fn count_field(reps: &[Rep]) -> String {
    match reps {
        [] => "0".to_owned(),
        [first, rest @ ..] if rest.iter().all(|r| r.count == first.count) => {
            first.count.to_string()
        }
        _ => reps
            .iter()
            .map(|r| r.count.to_string())
            .collect::<Vec<_>>()
            .join("/"),
    }
}

/// Shortest decimal that parses back to the same value; integral weights
/// print without a decimal point.
fn format_weight(weight: f32) -> String {
    weight.to_string()
}
