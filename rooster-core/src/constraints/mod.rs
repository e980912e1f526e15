//! Defines the placement constraints which a candidate timetable has to satisfy.
//!
//! A constraint is a pure boolean predicate over a candidate assignment of sessions to rooms and
//! slots. The predicates perform no search themselves; they are registered with an external
//! constraint solver as side-effect-free acceptance checks, or translated into native constraints
//! at model-build time. They are deterministic, never fail, and may be evaluated concurrently
//! from multiple threads.
//!
//! # Example
//! ```
//! use rooster_core::basic_types::Booking;
//! use rooster_core::basic_types::RoomId;
//! use rooster_core::basic_types::Slot;
//! use rooster_core::constraints;
//!
//! let room = RoomId::new(0);
//! let bookings = [
//!     Booking::new(room, Slot::new(1)),
//!     Booking::new(room, Slot::new(3)),
//! ];
//!
//! assert!(constraints::room_no_consecutive(room, &bookings));
//! ```

mod placement;

pub use placement::*;
