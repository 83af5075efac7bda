//! First-class invariants for the grid game.
//!
//! Invariants are logical properties that must hold for every game state
//! the engine can reach. The engine checks them after each accepted move
//! in debug builds; they are also testable on their own.
//!
//! Each invariant is a zero-sized type implementing [`Invariant`]. Tuples
//! of invariants implement [`InvariantSet`], so a whole family is checked
//! in one call:
//!
//! ```
//! use grid_game::GridGame;
//! use grid_game::invariants::{GridGameInvariants, InvariantSet};
//!
//! let game = GridGame::replay(&[4, 0, 8]).unwrap();
//! assert!(GridGameInvariants::check_all(&game).is_ok());
//! ```

/// A logical property that must hold for a given state.
///
/// Implementors carry no data; both methods are associated functions so an
/// invariant can be named purely by its type, including inside a tuple.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    ///
    /// Must be pure: no side effects and the same answer for the same state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    ///
    /// Used as the text of an [`InvariantViolation`] when [`holds`](Self::holds)
    /// returns false.
    fn description() -> &'static str;
}

/// Violation of an invariant.
///
/// Produced by [`InvariantSet::check_all`], one per failing invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A set of invariants checked together.
///
/// Composes several [`Invariant`]s into a single verification step.
/// Implemented for 2- and 3-tuples of invariants over the same state type.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds. Otherwise returns `Err`
    /// with one [`InvariantViolation`] per failing invariant, in tuple order.
    /// Every member is checked; the first failure does not short-circuit.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
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
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod history_consistent;
pub mod mark_balance;
pub mod turn_parity;

pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use turn_parity::TurnParityInvariant;

/// All grid game invariants as a composable set.
pub type GridGameInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    HistoryConsistentInvariant,
);
