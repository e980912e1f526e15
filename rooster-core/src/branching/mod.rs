//! Contains the search-strategy tokens with which the decision making procedure of the external
//! solver is biased.
//!
//! It provides two closed enums:
//! - The [`VariableSelectionStrategy`] which determines the order in which the solver picks its
//!   decision variables.
//! - The [`ValueSelectionStrategy`] which determines the order in which the solver tries the
//!   values in a variable's domain.
//!
//! Both are resolved from their configured names through `from_name`, and both are opaque to
//! this crate: the solver-integration layer translates them into whatever representation its
//! solver expects.

mod unknown_heuristic;
pub mod value_selection;
pub mod variable_selection;

pub use unknown_heuristic::UnknownHeuristic;

#[cfg(doc)]
use crate::branching::value_selection::ValueSelectionStrategy;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelectionStrategy;
