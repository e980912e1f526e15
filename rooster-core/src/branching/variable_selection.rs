use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::branching::UnknownHeuristic;

/// The variable-ordering heuristics the external solver can be asked to branch with.
///
/// Each variant is an opaque token which biases the order in which the solver picks decision
/// variables; it carries no selection logic of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelectionStrategy {
    /// Branch on the variable with the smallest remaining domain first (also known as MRV or
    /// first-fail); tends to reduce the branching factor.
    MinDomainSize,
    /// Branch on the first variable which is not yet assigned, in input order.
    FirstUnassigned,
    /// Branch on the unassigned variables in random order.
    Random,
}

impl VariableSelectionStrategy {
    /// Resolves a heuristic name to its strategy token.
    ///
    /// Names are matched case-insensitively; the recognized names are `"mrv"`, `"first"`, and
    /// `"random"`. An unrecognized name fails with [`UnknownHeuristic::VariableSelection`].
    pub fn from_name(name: &str) -> Result<Self, UnknownHeuristic> {
        match name.to_lowercase().as_str() {
            "mrv" => Ok(VariableSelectionStrategy::MinDomainSize),
            "first" => Ok(VariableSelectionStrategy::FirstUnassigned),
            "random" => Ok(VariableSelectionStrategy::Random),
            _ => Err(UnknownHeuristic::VariableSelection(name.into())),
        }
    }

    /// The canonical lowercase name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            VariableSelectionStrategy::MinDomainSize => "mrv",
            VariableSelectionStrategy::FirstUnassigned => "first",
            VariableSelectionStrategy::Random => "random",
        }
    }
}

impl Display for VariableSelectionStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariableSelectionStrategy {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariableSelectionStrategy::from_name(s)
    }
}
