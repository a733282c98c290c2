//! Rejection types for purchase validation.

use thiserror::Error;

/// Why a purchase was refused.
///
/// Callers should branch on [`RejectionReason::code`]; the display text is
/// for humans and may change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// The account ID was zero or negative.
    #[error("Invalid account id")]
    InvalidAccount,

    /// More tickets were requested than a single purchase allows.
    #[error("Exceeded maximum allowed tickets per purchase: requested {requested}, maximum {max}")]
    TooManyTickets { requested: u64, max: u32 },

    /// Child or infant tickets were requested without an adult ticket.
    #[error("Child or Infant tickets cannot be purchased without an Adult ticket")]
    AdultRequired,

    /// A ticket type tag did not name a known ticket type.
    #[error("Unknown ticket type: {0}")]
    UnknownTicketType(String),
}

impl RejectionReason {
    /// Stable machine-readable code for this reason.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::InvalidAccount => "INVALID_ACCOUNT",
            RejectionReason::TooManyTickets { .. } => "TOO_MANY_TICKETS",
            RejectionReason::AdultRequired => "ADULT_REQUIRED",
            RejectionReason::UnknownTicketType(_) => "UNKNOWN_TICKET_TYPE",
        }
    }
}

/// A purchase failed validation. No payment or reservation was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Purchase rejected: {reason}")]
pub struct PurchaseRejected {
    pub reason: RejectionReason,
}

impl PurchaseRejected {
    /// Creates a rejection for the given reason.
    pub fn new(reason: RejectionReason) -> Self {
        Self { reason }
    }

    /// Shorthand for `self.reason.code()`.
    pub fn code(&self) -> &'static str {
        self.reason.code()
    }
}

impl From<RejectionReason> for PurchaseRejected {
    fn from(reason: RejectionReason) -> Self {
        Self::new(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes = [
            RejectionReason::InvalidAccount.code(),
            RejectionReason::TooManyTickets {
                requested: 21,
                max: 20,
            }
            .code(),
            RejectionReason::AdultRequired.code(),
            RejectionReason::UnknownTicketType("SENIOR".to_string()).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn rejection_display_includes_reason() {
        let err = PurchaseRejected::new(RejectionReason::TooManyTickets {
            requested: 25,
            max: 20,
        });
        assert_eq!(
            err.to_string(),
            "Purchase rejected: Exceeded maximum allowed tickets per purchase: requested 25, maximum 20"
        );
        assert_eq!(err.code(), "TOO_MANY_TICKETS");
    }
}
