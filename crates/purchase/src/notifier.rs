//! Purchase outcome notifications.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use common::{AccountId, PurchaseId};
use domain::{PurchaseRejected, PurchaseSummary, RejectionReason};
use serde::Serialize;

/// Details of a purchase that was paid for and seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseConfirmation {
    pub purchase_id: PurchaseId,
    pub account_id: AccountId,
    pub summary: PurchaseSummary,
    pub completed_at: DateTime<Utc>,
}

/// Receives the outcome of each purchase.
///
/// Kept separate from the return value so the service can report to a
/// console, a log or a message bus without the caller knowing.
pub trait PurchaseNotifier: Send + Sync {
    /// Payment and reservation both succeeded.
    fn purchase_completed(&self, confirmation: &PurchaseConfirmation);

    /// The purchase failed validation.
    fn purchase_rejected(&self, account_id: i64, rejection: &PurchaseRejected);
}

/// Emits notifications as structured tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl PurchaseNotifier for TracingNotifier {
    fn purchase_completed(&self, confirmation: &PurchaseConfirmation) {
        tracing::info!(
            purchase_id = %confirmation.purchase_id,
            account_id = %confirmation.account_id,
            total_price = confirmation.summary.total_price.amount(),
            total_seats = confirmation.summary.total_seats,
            "tickets purchased successfully"
        );
    }

    fn purchase_rejected(&self, account_id: i64, rejection: &PurchaseRejected) {
        tracing::warn!(
            account_id,
            code = rejection.code(),
            reason = %rejection.reason,
            "ticket purchase rejected"
        );
    }
}

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Completed(PurchaseConfirmation),
    Rejected {
        account_id: i64,
        reason: RejectionReason,
    },
}

/// Keeps every notification in memory, for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().unwrap().clone()
    }

    /// Confirmations only.
    pub fn confirmations(&self) -> Vec<PurchaseConfirmation> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Completed(confirmation) => Some(confirmation),
                Notification::Rejected { .. } => None,
            })
            .collect()
    }

    /// Rejection reasons only.
    pub fn rejections(&self) -> Vec<RejectionReason> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Rejected { reason, .. } => Some(reason),
                Notification::Completed(_) => None,
            })
            .collect()
    }
}

impl PurchaseNotifier for RecordingNotifier {
    fn purchase_completed(&self, confirmation: &PurchaseConfirmation) {
        self.notifications
            .write()
            .unwrap()
            .push(Notification::Completed(confirmation.clone()));
    }

    fn purchase_rejected(&self, account_id: i64, rejection: &PurchaseRejected) {
        self.notifications
            .write()
            .unwrap()
            .push(Notification::Rejected {
                account_id,
                reason: rejection.reason.clone(),
            });
    }
}
