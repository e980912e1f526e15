use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::branching::UnknownHeuristic;

/// The value-ordering heuristics the external solver can be asked to branch with.
///
/// Each variant is an opaque token which biases the order in which the solver tries the values
/// in a variable's domain; it carries no selection logic of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelectionStrategy {
    /// Try the smallest value in the domain first; in this model the smallest slot number is
    /// usually the least constraining assignment (LCV).
    MinValue,
    /// Try the largest value in the domain first.
    MaxValue,
    /// Try the values of the domain in random order.
    Random,
}

impl ValueSelectionStrategy {
    /// Resolves a heuristic name to its strategy token.
    ///
    /// Names are matched case-insensitively; the recognized names are `"lcv"`, `"max"`, and
    /// `"random"`. An unrecognized name fails with [`UnknownHeuristic::ValueSelection`].
    pub fn from_name(name: &str) -> Result<Self, UnknownHeuristic> {
        match name.to_lowercase().as_str() {
            "lcv" => Ok(ValueSelectionStrategy::MinValue),
            "max" => Ok(ValueSelectionStrategy::MaxValue),
            "random" => Ok(ValueSelectionStrategy::Random),
            _ => Err(UnknownHeuristic::ValueSelection(name.into())),
        }
    }

    /// The canonical lowercase name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            ValueSelectionStrategy::MinValue => "lcv",
            ValueSelectionStrategy::MaxValue => "max",
            ValueSelectionStrategy::Random => "random",
        }
    }
}

impl Display for ValueSelectionStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueSelectionStrategy {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueSelectionStrategy::from_name(s)
    }
}
