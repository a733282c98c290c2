//! Ticket purchase processing.
//!
//! [`TicketService`] turns a validated purchase into two collaborator calls:
//! 1. Take payment for the total price
//! 2. Reserve seats for every non-infant ticket
//!
//! Both collaborators are traits so they can be swapped for real gateways or
//! test doubles. Outcomes are reported through a [`PurchaseNotifier`].

pub mod error;
pub mod notifier;
pub mod service;
pub mod services;

pub use error::{PaymentError, PurchaseError, ReservationError};
pub use notifier::{
    Notification, PurchaseConfirmation, PurchaseNotifier, RecordingNotifier, TracingNotifier,
};
pub use service::TicketService;
pub use services::{
    InMemoryPaymentService, InMemorySeatReservationService, PaymentRecord, SeatReservation,
    SeatReservationService, TicketPaymentService,
};
