//! Domain layer for the ticket purchasing service.
//!
//! This crate holds the pure part of a purchase, with no I/O:
//! - TicketType and TicketTypeRequest value types
//! - Price and seat calculations
//! - Validation of a purchase against the venue's rules
//! - Rejection reasons with stable codes

pub mod error;
pub mod ticket;

pub use common::AccountId;
pub use error::{PurchaseRejected, RejectionReason};
pub use ticket::{
    MAX_TICKETS_PER_PURCHASE, Money, PurchaseSummary, PurchaseTickets, TicketType,
    TicketTypeRequest, total_price, total_seats, validate_accompaniment, validate_account,
    validate_purchase, validate_ticket_count,
};
