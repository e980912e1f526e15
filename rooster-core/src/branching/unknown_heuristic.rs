use thiserror::Error;

#[cfg(doc)]
use crate::branching::value_selection::ValueSelectionStrategy;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelectionStrategy;

/// Error which indicates that a heuristic name does not resolve to a strategy.
///
/// Returned by [`VariableSelectionStrategy::from_name`] and
/// [`ValueSelectionStrategy::from_name`]; the offending name is reported back to the caller
/// as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnknownHeuristic {
    #[error("unknown variable selection heuristic '{0}'")]
    VariableSelection(Box<str>),
    #[error("unknown value selection heuristic '{0}'")]
    ValueSelection(Box<str>),
}
