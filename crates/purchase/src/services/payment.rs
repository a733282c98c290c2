//! Payment service trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::AccountId;
use domain::Money;

use crate::error::PaymentError;

/// Trait for taking payment for tickets.
///
/// Called exactly once per accepted purchase, including when the amount is
/// zero.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charges `amount` to the account.
    async fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError>;
}

/// A payment taken by [`InMemoryPaymentService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRecord {
    pub account_id: AccountId,
    pub amount: Money,
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    payments: Vec<PaymentRecord>,
    attempts: usize,
    fail_with: Option<PaymentError>,
}

/// In-memory payment service for testing and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryPaymentService {
    /// Creates a new in-memory payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following payment fail with `error`.
    pub fn fail_with(&self, error: PaymentError) {
        self.state.write().unwrap().fail_with = Some(error);
    }

    /// Lets payments succeed again.
    pub fn succeed(&self) {
        self.state.write().unwrap().fail_with = None;
    }

    /// Successful payments, oldest first.
    pub fn payments(&self) -> Vec<PaymentRecord> {
        self.state.read().unwrap().payments.clone()
    }

    /// Returns the number of successful payments.
    pub fn payment_count(&self) -> usize {
        self.state.read().unwrap().payments.len()
    }

    /// Returns the number of calls, successful or not.
    pub fn attempt_count(&self) -> usize {
        self.state.read().unwrap().attempts
    }

    /// Sum of all successful payments.
    pub fn total_collected(&self) -> Money {
        self.state
            .read()
            .unwrap()
            .payments
            .iter()
            .map(|p| p.amount)
            .sum()
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryPaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError> {
        let mut state = self.state.write().unwrap();
        state.attempts += 1;

        if let Some(error) = &state.fail_with {
            return Err(error.clone());
        }

        state.payments.push(PaymentRecord { account_id, amount });
        Ok(())
    }
}
