use std::fmt::Display;
use std::fmt::Formatter;

/// One fixed teaching block of the week.
///
/// Slots are numbered from 1 in temporal order across the whole week; with the default
/// [`TimetableConfig`] this gives the range `1..=20` (Monday morning through Friday afternoon).
/// The number of a slot is the value the external solver assigns to its decision variables, so a
/// [`Slot`] is cheap to copy and totally ordered.
///
/// [`TimetableConfig`]: crate::config::TimetableConfig
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u32);

impl Slot {
    /// Creates the slot with the given 1-based number.
    pub const fn new(number: u32) -> Self {
        Slot(number)
    }

    /// The 1-based number of this slot in the flat weekly numbering.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this slot and `other` are back-to-back, i.e. their numbers differ by exactly 1.
    ///
    /// Adjacency is judged on the flat weekly numbering alone. In particular, the last slot of
    /// one day is back-to-back with the first slot of the next day, even though the two are
    /// separated by an overnight gap.
    pub const fn is_back_to_back_with(self, other: Slot) -> bool {
        self.0.abs_diff(other.0) == 1
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
