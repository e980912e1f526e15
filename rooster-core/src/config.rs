use crate::basic_types::Weekday;

/// The parameters of the weekly time grid and of the dataset scheduled onto it.
///
/// The configuration is constructed once at start-up and passed by reference to the components
/// that need it, such as [`CalendarGrid::new`]; there is no ambient global state.
/// [`TimetableConfig::default`] reproduces the standard dataset: Monday through Friday, four
/// two-hour blocks per day, and two lessons per course per week.
///
/// [`CalendarGrid::new`]: crate::calendar::CalendarGrid::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableConfig {
    /// The teaching days, in calendar order.
    pub days: Vec<Weekday>,
    /// The number of teaching blocks on each day.
    pub blocks_per_day: u32,
    /// The duration of a single teaching block, in hours.
    pub block_duration_hours: u32,
    /// The number of lessons every course holds per week.
    ///
    /// This is a dataset parameter used by the solver-integration layer when it creates the
    /// decision variables of a course; the placement predicates do not enforce it.
    pub lessons_per_course: u32,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        TimetableConfig {
            days: Weekday::WEEK.to_vec(),
            blocks_per_day: 4,
            block_duration_hours: 2,
            lessons_per_course: 2,
        }
    }
}

impl TimetableConfig {
    /// The total number of slots in one week.
    pub fn num_slots(&self) -> u32 {
        self.days.len() as u32 * self.blocks_per_day
    }
}
