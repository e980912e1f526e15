use log::warn;
use thiserror::Error;

use crate::basic_types::Slot;
use crate::basic_types::Weekday;
use crate::config::TimetableConfig;

/// A read-only mapping from every [`Slot`] of the week to the [`Weekday`] it falls on.
///
/// The grid is computed once from a [`TimetableConfig`] and never mutated afterwards, so it can
/// be shared freely between threads. Slot `s` (1-based) falls on day
/// `days[(s - 1) / blocks_per_day]`, which means every day owns a contiguous run of
/// `blocks_per_day` slots and day order is non-decreasing in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    days: Vec<Weekday>,
    blocks_per_day: u32,
    slot_days: Vec<Weekday>,
}

impl CalendarGrid {
    pub fn new(config: &TimetableConfig) -> Self {
        if config.days.is_empty() || config.blocks_per_day == 0 {
            warn!("The calendar grid was built without any teaching slots");
        }

        let slot_days = config
            .days
            .iter()
            .flat_map(|&day| std::iter::repeat(day).take(config.blocks_per_day as usize))
            .collect();

        CalendarGrid {
            days: config.days.clone(),
            blocks_per_day: config.blocks_per_day,
            slot_days,
        }
    }

    /// The total number of slots covered by the grid.
    pub fn num_slots(&self) -> u32 {
        self.slot_days.len() as u32
    }

    /// The weekday on which `slot` falls.
    ///
    /// The grid is a total function over `1..=num_slots`; any slot outside that range is a
    /// contract violation by the caller and is rejected with [`SlotOutOfRange`].
    pub fn day_of(&self, slot: Slot) -> Result<Weekday, SlotOutOfRange> {
        let number = slot.get();
        if number == 0 || number > self.num_slots() {
            return Err(SlotOutOfRange {
                slot,
                num_slots: self.num_slots(),
            });
        }

        Ok(self.slot_days[number as usize - 1])
    }

    /// An iterator over every slot of the week, in temporal order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (1..=self.num_slots()).map(Slot::new)
    }

    /// The slots which fall on `day`, in temporal order.
    ///
    /// The iterator is empty when `day` is not part of the configured week.
    pub fn slots_on(&self, day: Weekday) -> impl Iterator<Item = Slot> + '_ {
        self.slot_days
            .iter()
            .enumerate()
            .filter(move |(_, &slot_day)| slot_day == day)
            .map(|(index, _)| Slot::new(index as u32 + 1))
    }
}

/// Error which indicates that a queried slot lies outside the calendar grid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("slot {slot} is outside the calendar range 1..={num_slots}")]
pub struct SlotOutOfRange {
    /// The slot that was queried.
    pub slot: Slot,
    /// The number of slots covered by the grid.
    pub num_slots: u32,
}
