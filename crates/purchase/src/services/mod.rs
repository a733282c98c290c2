//! Collaborator traits and in-memory implementations for the purchase steps.

pub mod payment;
pub mod reservation;

pub use payment::{InMemoryPaymentService, PaymentRecord, TicketPaymentService};
pub use reservation::{InMemorySeatReservationService, SeatReservation, SeatReservationService};
