use serde::{Deserialize, Serialize};

/// One performed set entry: repetition count at a weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rep {
    pub count: u32,
    pub weight: f32,
}

impl Rep {
    pub fn new(count: u32, weight: f32) -> Self {
        Rep { count, weight }
    }

    /// Bodyweight exercises carry no weight.
    pub fn bodyweight(count: u32) -> Self {
        Rep::new(count, 0.0)
    }
}

/// A named exercise with its reps in source order.
///
/// `reps` is empty when the rep data matched none of the known encodings;
/// the set survives in that degraded state and a warning is emitted while
/// parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftSet {
    pub name: String,
    pub reps: Vec<Rep>,
}

impl LiftSet {
    pub fn new(name: impl Into<String>, reps: Vec<Rep>) -> Self {
        LiftSet {
            name: name.into(),
            reps,
        }
    }
}

/// One workout session: the block of sets between blank lines of an export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    pub sets: Vec<LiftSet>,
}

impl Session {
    pub fn new(sets: Vec<LiftSet>) -> Self {
        Session { sets }
    }
}
