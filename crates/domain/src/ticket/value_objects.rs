//! Value objects for the ticket domain.

use serde::{Deserialize, Serialize};

use super::TicketType;

/// A non-negative amount in whole currency units.
///
/// Ticket prices are whole numbers, so no minor unit is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a new Money amount.
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(self.0 * u64::from(quantity))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{}", self.0)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A request for some number of tickets of one type.
///
/// Several requests of the same type may appear in one purchase; their
/// quantities add up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketTypeRequest {
    /// Creates a new ticket request.
    pub fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    pub fn adult(quantity: u32) -> Self {
        Self::new(TicketType::Adult, quantity)
    }

    pub fn child(quantity: u32) -> Self {
        Self::new(TicketType::Child, quantity)
    }

    pub fn infant(quantity: u32) -> Self {
        Self::new(TicketType::Infant, quantity)
    }

    /// The ticket type requested.
    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Number of tickets requested.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of this request (quantity * unit price).
    pub fn price(&self) -> Money {
        self.ticket_type.unit_price().multiply(self.quantity)
    }

    /// Seats this request needs.
    pub fn seats(&self) -> u32 {
        if self.ticket_type.occupies_seat() {
            self.quantity
        } else {
            0
        }
    }
}
