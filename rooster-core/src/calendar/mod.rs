//! Contains the [`CalendarGrid`], the read-only mapping from slot numbers to weekdays which is
//! used for reporting solutions back in human terms.

mod grid;

pub use grid::*;
