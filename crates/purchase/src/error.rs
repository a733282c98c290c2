//! Purchase error types.

use common::AccountId;
use domain::PurchaseRejected;
use thiserror::Error;

/// Errors raised by a payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The payment provider refused the charge.
    #[error("Payment declined for account {account_id}: {reason}")]
    Declined { account_id: AccountId, reason: String },

    /// The payment provider could not be reached.
    #[error("Payment service unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by a seat reservation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// Not enough seats left to satisfy the request.
    #[error("Not enough seats available: requested {requested}")]
    SeatsUnavailable { requested: u32 },

    /// The reservation system could not be reached.
    #[error("Seat reservation service unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by [`TicketService::purchase_tickets`](crate::TicketService::purchase_tickets).
///
/// Collaborator errors are carried as-is; their display text is the
/// collaborator's own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The purchase broke a business rule. Nothing was charged or reserved.
    #[error(transparent)]
    Rejected(#[from] PurchaseRejected),

    /// Payment failed. No seats were reserved.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Seat reservation failed after payment succeeded. The payment is not
    /// reversed.
    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

impl PurchaseError {
    /// The rejection, if this error is one.
    pub fn as_rejection(&self) -> Option<&PurchaseRejected> {
        match self {
            PurchaseError::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}
