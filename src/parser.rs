//! Session parsing: cleaned export lines into sessions of named sets.

use crate::error::{ConvertError, Result};
use crate::grammar::parse_rep_data;
use crate::session::{LiftSet, Rep, Session};

/// Separator between the exercise name and its rep data in export lines.
pub const NAME_SEP: &str = " • ";

/// Parse cleaned lines into sessions.
///
/// Blank lines delimit sessions; runs of them never produce an empty
/// session. The last session does not need a trailing blank line.
pub fn parse_sessions(lines: &[String]) -> Result<Vec<Session>> {
    let mut sessions = Vec::new();
    let mut current = Session::default();

    for line in lines {
        if line.is_empty() {
            if !current.sets.is_empty() {
                sessions.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.sets.push(parse_set_line(line)?);
    }

    if !current.sets.is_empty() {
        sessions.push(current);
    }

    Ok(sessions)
}

fn parse_set_line(line: &str) -> Result<LiftSet> {
    if let Some((name, rep_data)) = line.split_once(NAME_SEP) {
        return Ok(LiftSet::new(name, parse_rep_data(rep_data.trim())?));
    }

    // Tab-separated lines are our own output format; accepting them makes a
    // second run over an already converted log a no-op.
    if let Some((name, rep_data)) = line.split_once('\t') {
        return Ok(LiftSet::new(name, parse_table_data(rep_data.trim())));
    }

    Err(ConvertError::MalformedLine(line.to_owned()))
}

/// Decode the renderer's `<weights>kg <n>*<counts>` form, degrading to an
/// empty rep list with a warning when the data does not decode.
fn parse_table_data(text: &str) -> Vec<Rep> {
    match decode_table_data(text) {
        Some(reps) => reps,
        None => {
            eprintln!("Warning: unrecognized rep data: {text:?}");
            Vec::new()
        }
    }
}

fn decode_table_data(text: &str) -> Option<Vec<Rep>> {
    let (weights, counts) = text.split_once("kg ")?;
    let (len, counts) = counts.split_once('*')?;
    let n: usize = len.parse().ok()?;

    let weights: Vec<f32> = weights
        .split('/')
        .map(|w| w.parse().ok())
        .collect::<Option<_>>()?;
    let counts: Vec<u32> = counts
        .split('/')
        .map(|c| c.parse().ok())
        .collect::<Option<_>>()?;

    if n == 0 {
        return Some(Vec::new());
    }
    // Each list is either one shared value or one value per rep.
    if weights.len() != 1 && weights.len() != n {
        return None;
    }
    if counts.len() != 1 && counts.len() != n {
        return None;
    }

    Some(
        (0..n)
            .map(|i| {
                let count = if counts.len() == 1 { counts[0] } else { counts[i] };
                let weight = if weights.len() == 1 { weights[0] } else { weights[i] };
                Rep::new(count, weight)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_splits_sessions_on_blank_lines() {
        let input = lines(&[
            "Squat • 3 sets: 15 rep 45 kg",
            "Bench • 3×45 kg, 2×50 kg",
            "",
            "Deadlift • 100 kg: 5, 5 rep",
        ]);
        let sessions = parse_sessions(&input).unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].sets.len(), 2);
        assert_eq!(sessions[0].sets[0].name, "Squat");
        assert_eq!(sessions[0].sets[0].reps, vec![Rep::new(15, 45.0); 3]);
        assert_eq!(sessions[1].sets.len(), 1);
        assert_eq!(sessions[1].sets[0].name, "Deadlift");
    }

    #[test]
    fn test_blank_runs_never_emit_empty_sessions() {
        let input = lines(&["", "", "Squat • 10 rep", "", "", "", "Bench • 8 rep", ""]);
        let sessions = parse_sessions(&input).unwrap();

        assert_eq!(sessions.len(), 2);
        assert!(sessions.iter().all(|s| !s.sets.is_empty()));
    }

    #[test]
    fn test_last_session_without_trailing_blank() {
        let input = lines(&["Squat • 10 rep"]);
        assert_eq!(parse_sessions(&input).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_separator_is_a_hard_error() {
        let input = lines(&["Squat 3 sets: 15 rep 45 kg"]);
        let err = parse_sessions(&input).unwrap_err();
        assert_eq!(
            err,
            ConvertError::MalformedLine("Squat 3 sets: 15 rep 45 kg".to_owned())
        );
    }

    #[test]
    fn test_unmatched_rep_data_keeps_the_set() {
        let input = lines(&["Yoga • one hour"]);
        let sessions = parse_sessions(&input).unwrap();

        assert_eq!(sessions[0].sets[0].name, "Yoga");
        assert_eq!(sessions[0].sets[0].reps, Vec::new());
    }

    #[test]
    fn test_reads_own_output_back() {
        let input = lines(&[
            "Squat (machine)\t45/50/55kg 3*15/12/10",
            "Leg Extension\t30kg 3*20",
        ]);
        let sessions = parse_sessions(&input).unwrap();
        let sets = &sessions[0].sets;

        assert_eq!(
            sets[0].reps,
            vec![Rep::new(15, 45.0), Rep::new(12, 50.0), Rep::new(10, 55.0)]
        );
        assert_eq!(sets[1].reps, vec![Rep::new(20, 30.0); 3]);
    }

    #[test]
    fn test_tabular_empty_set_round_trips() {
        let input = lines(&["Abs rolling wheel\t0kg 0*0"]);
        let sessions = parse_sessions(&input).unwrap();
        assert_eq!(sessions[0].sets[0].reps, Vec::new());
    }

    #[test]
    fn test_tabular_junk_degrades_to_empty() {
        let input = lines(&["Squat\tnot a table entry", "Bench\t45kg 3*1/2"]);
        let sessions = parse_sessions(&input).unwrap();

        assert_eq!(sessions[0].sets[0].reps, Vec::new());
        // Two counts for three reps does not reconcile.
        assert_eq!(sessions[0].sets[1].reps, Vec::new());
    }
}
