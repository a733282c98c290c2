//! Purchase commands.

use serde::{Deserialize, Serialize};

use super::TicketTypeRequest;

/// Command to purchase tickets for an account.
///
/// The account ID is kept as a raw integer: checking it is part of purchase
/// validation, so an invalid ID must still be representable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTickets {
    /// Account to charge.
    pub account_id: i64,

    /// Requested tickets. Order does not matter.
    pub requests: Vec<TicketTypeRequest>,
}

impl PurchaseTickets {
    /// Creates a new PurchaseTickets command.
    pub fn new(account_id: i64, requests: impl IntoIterator<Item = TicketTypeRequest>) -> Self {
        Self {
            account_id,
            requests: requests.into_iter().collect(),
        }
    }

    /// Adds one more ticket request.
    pub fn with(mut self, request: TicketTypeRequest) -> Self {
        self.requests.push(request);
        self
    }
}
