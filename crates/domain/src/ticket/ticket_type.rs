//! The closed set of ticket types sold at the venue.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RejectionReason;

use super::Money;

/// Kind of ticket. Determines the unit price and whether a seat is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// All ticket types, in display order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Price of a single ticket of this type.
    pub fn unit_price(&self) -> Money {
        match self {
            TicketType::Adult => Money::new(20),
            TicketType::Child => Money::new(10),
            TicketType::Infant => Money::zero(),
        }
    }

    /// Infants sit on an adult's lap and are not allocated a seat.
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    /// True for ticket types that must be accompanied by an adult.
    pub fn requires_adult(&self) -> bool {
        matches!(self, TicketType::Child | TicketType::Infant)
    }

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = RejectionReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| RejectionReason::UnknownTicketType(s.to_string()))
    }
}
