use std::fmt::Display;
use std::fmt::Formatter;

use thiserror::Error;

use crate::basic_types::Slot;

/// Identifies a physical teaching room.
///
/// A room carries no attributes beyond its identity; capacity, equipment, and similar data live
/// with the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoomId(u32);

impl RoomId {
    pub const fn new(id: u32) -> Self {
        RoomId(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// The tentative placement of one session: a room together with the slot it is booked at.
///
/// A candidate assignment to validate is simply a slice of bookings; candidates are constructed
/// by the caller per constraint check and are not persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Booking {
    /// The room in which the session takes place.
    pub room: RoomId,
    /// The slot at which the session takes place.
    pub slot: Slot,
}

impl Booking {
    pub const fn new(room: RoomId, slot: Slot) -> Self {
        Booking { room, slot }
    }

    /// Pairs up two parallel argument arrays into bookings, in order.
    ///
    /// Solver integrations commonly hand over their room variables and slot variables as two
    /// parallel arrays. The arrays must have the same length; a mismatch means one of the
    /// bookings lost its partner somewhere along the way, and is rejected with
    /// [`UnpairedBooking`] rather than silently dropping the trailing elements.
    pub fn zip(rooms: &[RoomId], slots: &[Slot]) -> Result<Vec<Booking>, UnpairedBooking> {
        if rooms.len() != slots.len() {
            return Err(UnpairedBooking {
                rooms: rooms.len(),
                slots: slots.len(),
            });
        }

        Ok(rooms
            .iter()
            .zip(slots)
            .map(|(&room, &slot)| Booking { room, slot })
            .collect())
    }
}

/// Error which indicates that the rooms and slots of a candidate do not pair up one-to-one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot pair {rooms} room(s) with {slots} slot(s)")]
pub struct UnpairedBooking {
    /// The number of rooms that were provided.
    pub rooms: usize,
    /// The number of slots that were provided.
    pub slots: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_length_arrays_pair_up_in_order() {
        let rooms = [RoomId::new(0), RoomId::new(1)];
        let slots = [Slot::new(3), Slot::new(9)];

        let bookings = Booking::zip(&rooms, &slots).expect("the arrays have equal length");

        assert_eq!(
            bookings,
            vec![
                Booking::new(RoomId::new(0), Slot::new(3)),
                Booking::new(RoomId::new(1), Slot::new(9)),
            ]
        );
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let rooms = [RoomId::new(0), RoomId::new(1)];
        let slots = [Slot::new(3)];

        let result = Booking::zip(&rooms, &slots);

        assert_eq!(result, Err(UnpairedBooking { rooms: 2, slots: 1 }));
    }

    #[test]
    fn empty_candidates_are_accepted() {
        let bookings = Booking::zip(&[], &[]).expect("empty arrays trivially pair up");
        assert!(bookings.is_empty());
    }
}
