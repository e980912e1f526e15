use fnv::FnvHashMap;
use itertools::Itertools;

use crate::basic_types::Booking;
use crate::basic_types::RoomId;
use crate::basic_types::Slot;

/// Accepts a set of slots assigned to a single class-group iff no two of them are back-to-back.
///
/// The slots may be given in any order; acceptance is decided on the sorted sequence. Empty and
/// singleton inputs are trivially accepted.
///
/// Adjacency is judged on the flat weekly numbering (see [`Slot::is_back_to_back_with`]), so the
/// last slot of one day and the first slot of the next day also count as back-to-back and are
/// rejected.
pub fn no_consecutive_slots(slots: &[Slot]) -> bool {
    slots
        .iter()
        .sorted()
        .tuple_windows()
        .all(|(earlier, later)| !earlier.is_back_to_back_with(*later))
}

/// Accepts a candidate iff, restricted to the bookings in `room`, no two slots are back-to-back.
///
/// Bookings in other rooms are ignored entirely, including when their slots would be adjacent to
/// the slots booked in `room`.
pub fn room_no_consecutive(room: RoomId, bookings: &[Booking]) -> bool {
    let slots_in_room = bookings
        .iter()
        .filter(|booking| booking.room == room)
        .map(|booking| booking.slot)
        .collect::<Vec<_>>();

    no_consecutive_slots(&slots_in_room)
}

/// Accepts a candidate iff every room in it is free of back-to-back bookings.
///
/// Equivalent to invoking [`room_no_consecutive`] once per distinct room of the candidate; used
/// by integrations which validate a complete assignment in one call.
pub fn no_room_has_consecutive_bookings(bookings: &[Booking]) -> bool {
    let mut slots_per_room: FnvHashMap<RoomId, Vec<Slot>> = FnvHashMap::default();
    for booking in bookings {
        slots_per_room
            .entry(booking.room)
            .or_default()
            .push(booking.slot);
    }

    slots_per_room
        .values()
        .all(|slots| no_consecutive_slots(slots))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    use super::*;

    fn slots(numbers: &[u32]) -> Vec<Slot> {
        numbers.iter().map(|&number| Slot::new(number)).collect()
    }

    #[test]
    fn empty_and_singleton_inputs_are_accepted() {
        assert!(no_consecutive_slots(&[]));
        assert!(no_consecutive_slots(&slots(&[5])));
    }

    #[test]
    fn a_gap_of_at_least_one_block_is_accepted() {
        assert!(no_consecutive_slots(&slots(&[5, 7])));
        assert!(no_consecutive_slots(&slots(&[1, 3, 5, 7])));
    }

    #[test]
    fn back_to_back_slots_are_rejected() {
        assert!(!no_consecutive_slots(&slots(&[5, 6])));
        assert!(!no_consecutive_slots(&slots(&[10, 2, 3])));
    }

    #[test]
    fn adjacency_across_a_day_boundary_is_rejected() {
        // Slot 4 is the last block of Monday and slot 5 the first block of Tuesday; the flat
        // numbering treats them as back-to-back.
        assert!(!no_consecutive_slots(&slots(&[4, 5])));
    }

    #[test]
    fn acceptance_is_invariant_under_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);

        let mut accepted = slots(&[17, 1, 8, 12]);
        let mut rejected = slots(&[17, 1, 8, 9]);
        for _ in 0..10 {
            accepted.shuffle(&mut rng);
            rejected.shuffle(&mut rng);
            assert!(no_consecutive_slots(&accepted));
            assert!(!no_consecutive_slots(&rejected));
        }
    }

    #[test]
    fn repeated_evaluation_yields_the_same_result() {
        let input = slots(&[2, 9, 15]);
        let first = no_consecutive_slots(&input);

        assert_eq!(no_consecutive_slots(&input), first);
        assert_eq!(no_consecutive_slots(&input), first);
    }

    #[test]
    fn a_room_with_a_gap_between_bookings_is_accepted() {
        let room_a = RoomId::new(0);
        let room_b = RoomId::new(1);
        let bookings = [
            Booking::new(room_a, Slot::new(1)),
            Booking::new(room_b, Slot::new(2)),
            Booking::new(room_a, Slot::new(3)),
        ];

        assert!(room_no_consecutive(room_a, &bookings));
    }

    #[test]
    fn a_room_with_back_to_back_bookings_is_rejected() {
        let room_a = RoomId::new(0);
        let room_b = RoomId::new(1);
        let bookings = [
            Booking::new(room_a, Slot::new(1)),
            Booking::new(room_b, Slot::new(5)),
            Booking::new(room_a, Slot::new(2)),
        ];

        assert!(!room_no_consecutive(room_a, &bookings));
    }

    #[test]
    fn bookings_in_other_rooms_are_ignored() {
        let room_a = RoomId::new(0);
        let room_b = RoomId::new(1);
        // Room B books the slot right next to room A's booking; only room A's own bookings
        // matter for room A.
        let bookings = [
            Booking::new(room_a, Slot::new(4)),
            Booking::new(room_b, Slot::new(5)),
            Booking::new(room_b, Slot::new(6)),
        ];

        assert!(room_no_consecutive(room_a, &bookings));
        assert!(!room_no_consecutive(room_b, &bookings));
    }

    #[test]
    fn a_room_without_bookings_is_accepted() {
        let bookings = [Booking::new(RoomId::new(0), Slot::new(1))];

        assert!(room_no_consecutive(RoomId::new(7), &bookings));
    }

    #[test]
    fn the_whole_candidate_check_matches_the_per_room_check() {
        let room_a = RoomId::new(0);
        let room_b = RoomId::new(1);
        let accepted = [
            Booking::new(room_a, Slot::new(4)),
            Booking::new(room_b, Slot::new(5)),
            Booking::new(room_a, Slot::new(10)),
        ];
        let rejected = [
            Booking::new(room_a, Slot::new(4)),
            Booking::new(room_b, Slot::new(5)),
            Booking::new(room_b, Slot::new(6)),
        ];

        assert!(no_room_has_consecutive_bookings(&accepted));
        assert!(!no_room_has_consecutive_bookings(&rejected));
        assert!(no_room_has_consecutive_bookings(&[]));
    }
}
