//! Seat reservation service trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::AccountId;

use crate::error::ReservationError;

/// Trait for allocating seats to an account.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserves `seats` seats for the account. May be called with zero.
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), ReservationError>;
}

/// A reservation made by [`InMemorySeatReservationService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatReservation {
    pub account_id: AccountId,
    pub seats: u32,
}

#[derive(Debug, Default)]
struct InMemoryReservationState {
    reservations: Vec<SeatReservation>,
    fail_with: Option<ReservationError>,
}

/// In-memory seat reservation service for testing and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<RwLock<InMemoryReservationState>>,
}

impl InMemorySeatReservationService {
    /// Creates a new in-memory reservation service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following reservation fail with `error`.
    pub fn fail_with(&self, error: ReservationError) {
        self.state.write().unwrap().fail_with = Some(error);
    }

    /// Lets reservations succeed again.
    pub fn succeed(&self) {
        self.state.write().unwrap().fail_with = None;
    }

    /// Successful reservations, oldest first.
    pub fn reservations(&self) -> Vec<SeatReservation> {
        self.state.read().unwrap().reservations.clone()
    }

    /// Returns the number of successful reservations.
    pub fn reservation_count(&self) -> usize {
        self.state.read().unwrap().reservations.len()
    }

    /// Total seats reserved across all reservations.
    pub fn seats_reserved(&self) -> u64 {
        self.state
            .read()
            .unwrap()
            .reservations
            .iter()
            .map(|r| u64::from(r.seats))
            .sum()
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) -> Result<(), ReservationError> {
        let mut state = self.state.write().unwrap();

        if let Some(error) = &state.fail_with {
            return Err(error.clone());
        }

        state.reservations.push(SeatReservation { account_id, seats });
        Ok(())
    }
}
