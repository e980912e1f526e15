//! # Rooster
//! Rooster is the model layer of a weekly class-timetabling system. It declares the time grid on
//! which classes are scheduled, the placement constraints a candidate timetable has to satisfy,
//! and the search-strategy tokens with which a general-purpose constraint solver can be biased.
//!
//! The combinatorial search itself is delegated entirely to an external constraint solver; this
//! crate contains no search or propagation. Everything here is either immutable configuration or
//! a pure predicate, and can be shared and evaluated concurrently without coordination.
//!
//! # Using Rooster
//! The first step is constructing the [`config::TimetableConfig`] and deriving the
//! [`calendar::CalendarGrid`] from it:
//! ```rust
//! use rooster_core::basic_types::Slot;
//! use rooster_core::basic_types::Weekday;
//! use rooster_core::calendar::CalendarGrid;
//! use rooster_core::config::TimetableConfig;
//!
//! // Monday through Friday, four two-hour blocks per day.
//! let config = TimetableConfig::default();
//! let grid = CalendarGrid::new(&config);
//!
//! assert_eq!(grid.num_slots(), 20);
//! assert_eq!(grid.day_of(Slot::new(5))?, Weekday::Tuesday);
//! # Ok::<(), rooster_core::calendar::SlotOutOfRange>(())
//! ```
//!
//! Candidate placements are validated with the predicates in [`constraints`]:
//! ```rust
//! use rooster_core::basic_types::Booking;
//! use rooster_core::basic_types::RoomId;
//! use rooster_core::basic_types::Slot;
//! use rooster_core::constraints;
//!
//! // A class-group cannot meet in back-to-back blocks.
//! assert!(constraints::no_consecutive_slots(&[Slot::new(2), Slot::new(7)]));
//! assert!(!constraints::no_consecutive_slots(&[Slot::new(2), Slot::new(3)]));
//!
//! // A room cannot be booked in back-to-back blocks either.
//! let room = RoomId::new(0);
//! let bookings = [
//!     Booking::new(room, Slot::new(1)),
//!     Booking::new(room, Slot::new(3)),
//! ];
//! assert!(constraints::room_no_consecutive(room, &bookings));
//! ```
//!
//! Finally, the solver's search order is biased through the tokens in [`branching`], resolved
//! from their configured names:
//! ```rust
//! use rooster_core::branching::variable_selection::VariableSelectionStrategy;
//!
//! let strategy = VariableSelectionStrategy::from_name("mrv")?;
//! assert_eq!(strategy, VariableSelectionStrategy::MinDomainSize);
//! # Ok::<(), rooster_core::branching::UnknownHeuristic>(())
//! ```

pub mod basic_types;
pub mod branching;
pub mod calendar;
pub mod config;
pub mod constraints;
