//! Ticket types, purchase commands, pricing and validation rules.

mod commands;
mod summary;
mod ticket_type;
mod validation;
mod value_objects;

pub use commands::PurchaseTickets;
pub use summary::{PurchaseSummary, total_price, total_seats};
pub use ticket_type::TicketType;
pub use validation::{
    MAX_TICKETS_PER_PURCHASE, validate_accompaniment, validate_account, validate_purchase,
    validate_ticket_count,
};
pub use value_objects::{Money, TicketTypeRequest};
