//! Outcome and coupon types
//!
//! An outcome is one concrete line of scores, e.g. `1-0;2-1` becomes
//! `[1, 0, 2, 1]`. A coupon has the same shape, but every slot may hold a set
//! of goals and the coupon stands for the cartesian product of its slots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One elementary value: the goals scored by one team in one game.
pub type Goal = u32;

/// A concrete score line. Even indices are home goals, odd are away goals.
pub type Outcome = Vec<Goal>;

/// One position of a coupon.
///
/// `Set` is never empty. Goals inside a set are ordered numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    Single(Goal),
    Set(BTreeSet<Goal>),
}

impl Slot {
    /// Number of goals this slot stands for
    pub fn len(&self) -> usize {
        match self {
            Slot::Single(_) => 1,
            Slot::Set(goals) => goals.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add every goal of this slot to `target`.
    ///
    /// A set slot is unioned element-wise, never nested.
    pub fn extend_into(&self, target: &mut BTreeSet<Goal>) {
        match self {
            Slot::Single(goal) => {
                target.insert(*goal);
            }
            Slot::Set(goals) => target.extend(goals.iter().copied()),
        }
    }

    /// Goals in ascending order
    pub fn goals(&self) -> Vec<Goal> {
        match self {
            Slot::Single(goal) => vec![*goal],
            Slot::Set(goals) => goals.iter().copied().collect(),
        }
    }
}

impl From<Goal> for Slot {
    fn from(goal: Goal) -> Self {
        Slot::Single(goal)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Single(goal) => write!(f, "{}", goal),
            Slot::Set(goals) => {
                for (idx, goal) in goals.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", goal)?;
                }
                Ok(())
            }
        }
    }
}

/// A generalized score line covering `size()` outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coupon {
    slots: Vec<Slot>,
}

impl Coupon {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Coupon covering exactly one outcome
    pub fn from_outcome(outcome: &[Goal]) -> Self {
        Self {
            slots: outcome.iter().copied().map(Slot::Single).collect(),
        }
    }

    /// Rebuild a coupon from a grouping key and the collapsed slot.
    pub(crate) fn from_key(before: &[Slot], collapsed: Slot, after: &[Slot]) -> Self {
        let mut slots = Vec::with_capacity(before.len() + 1 + after.len());
        slots.extend_from_slice(before);
        slots.push(collapsed);
        slots.extend_from_slice(after);
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Split at position `i` into (slots before, slot at `i`, slots after).
    ///
    /// The pair of outer slices is the grouping key for position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn split_around(&self, i: usize) -> (&[Slot], &Slot, &[Slot]) {
        let (before, rest) = self.slots.split_at(i);
        (before, &rest[0], &rest[1..])
    }

    /// Number of outcomes covered (product of slot sizes)
    pub fn size(&self) -> u64 {
        self.slots
            .iter()
            .fold(1u64, |acc, slot| acc.saturating_mul(slot.len() as u64))
    }

    /// Every slot as an ascending goal list, regardless of variant.
    pub fn goal_lists(&self) -> Vec<Vec<Goal>> {
        self.slots.iter().map(Slot::goals).collect()
    }

    /// Cartesian expansion into the outcomes this coupon covers.
    ///
    /// Rows come out in lexicographic order of slot values.
    pub fn expand(&self) -> Vec<Outcome> {
        let mut rows: Vec<Outcome> = vec![Vec::with_capacity(self.slots.len())];
        for slot in &self.slots {
            let goals = slot.goals();
            rows = rows
                .into_iter()
                .flat_map(|prefix| {
                    goals.iter().map(move |goal| {
                        let mut row = prefix.clone();
                        row.push(*goal);
                        row
                    })
                })
                .collect();
        }
        rows
    }
}

impl From<&[Goal]> for Coupon {
    fn from(outcome: &[Goal]) -> Self {
        Coupon::from_outcome(outcome)
    }
}
