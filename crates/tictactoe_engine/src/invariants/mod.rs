//! First-class invariants over [`GameState`](crate::GameState).
//!
//! The engine re-checks these after every placement in debug builds. They are
//! also usable on their own, e.g. from tests that assemble a state by hand.

mod move_count;
mod status;
mod tally;

pub use move_count::MoveCountMatchesBoard;
pub use status::StatusMatchesBoard;
pub use tally::TallyMatchesBoard;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Every invariant the engine maintains.
pub type EngineInvariants = (MoveCountMatchesBoard, TallyMatchesBoard, StatusMatchesBoard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord, GameState};

    #[test]
    fn test_fresh_state_holds() {
        assert!(EngineInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_reports_every_violation() {
        let mut state = GameState::new();
        state.board.set(Coord::ALL[0], Cell::X);
        let violations = EngineInvariants::check_all(&state).unwrap_err();
        // Move count and tally both disagree with the board; status still fits.
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MoveCountMatchesBoard::description());
        assert_eq!(violations[1].description, TallyMatchesBoard::description());
    }
}
