//! Price and seat calculations over a set of ticket requests.

use serde::{Deserialize, Serialize};

use super::{Money, TicketType, TicketTypeRequest};

/// Total price of all requests.
pub fn total_price(requests: &[TicketTypeRequest]) -> Money {
    requests.iter().map(TicketTypeRequest::price).sum()
}

/// Seats to reserve. Infant requests are excluded.
pub fn total_seats(requests: &[TicketTypeRequest]) -> u32 {
    requests.iter().map(TicketTypeRequest::seats).sum()
}

/// Aggregated view of a purchase: ticket counts per type and the derived totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub adult_count: u32,
    pub child_count: u32,
    pub infant_count: u32,
    pub total_price: Money,
    pub total_seats: u32,
}

impl PurchaseSummary {
    /// Builds a summary from the requests.
    ///
    /// Callers are expected to have validated the requests first; the counts
    /// of an unvalidated set may not fit the per-purchase limit.
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let mut summary = Self::default();
        for request in requests {
            let count = match request.ticket_type() {
                TicketType::Adult => &mut summary.adult_count,
                TicketType::Child => &mut summary.child_count,
                TicketType::Infant => &mut summary.infant_count,
            };
            *count += request.quantity();
            summary.total_price += request.price();
            summary.total_seats += request.seats();
        }
        summary
    }

    /// Number of tickets across all types.
    pub fn total_tickets(&self) -> u32 {
        self.adult_count + self.child_count + self.infant_count
    }
}
