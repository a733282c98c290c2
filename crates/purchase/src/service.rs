//! Ticket purchase processing.

use std::time::Instant;

use chrono::Utc;
use common::PurchaseId;
use domain::{
    PurchaseRejected, PurchaseSummary, PurchaseTickets, TicketTypeRequest, total_price,
    total_seats, validate_purchase,
};

use crate::error::PurchaseError;
use crate::notifier::{PurchaseConfirmation, PurchaseNotifier, TracingNotifier};
use crate::services::payment::TicketPaymentService;
use crate::services::reservation::SeatReservationService;

/// Validates ticket purchases, takes payment and reserves seats.
///
/// A purchase runs as a fixed sequence: validate, charge, reserve, notify.
/// Nothing is charged or reserved for a rejected purchase. If reservation
/// fails after payment, the payment stands; there is no refund step.
pub struct TicketService<P, R, N = TracingNotifier>
where
    P: TicketPaymentService,
    R: SeatReservationService,
    N: PurchaseNotifier,
{
    payment: P,
    reservation: R,
    notifier: N,
}

impl<P, R> TicketService<P, R, TracingNotifier>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a service that reports outcomes through `tracing`.
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_notifier(payment, reservation, TracingNotifier)
    }
}

impl<P, R, N> TicketService<P, R, N>
where
    P: TicketPaymentService,
    R: SeatReservationService,
    N: PurchaseNotifier,
{
    /// Creates a service with a custom notifier.
    pub fn with_notifier(payment: P, reservation: R, notifier: N) -> Self {
        Self {
            payment,
            reservation,
            notifier,
        }
    }

    pub fn payment(&self) -> &P {
        &self.payment
    }

    pub fn reservation(&self) -> &R {
        &self.reservation
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Purchases tickets for an account.
    ///
    /// Success is signalled by `Ok(())` plus a completion notification.
    /// Payment is requested with the total price before seats are reserved,
    /// and both calls happen even when their amount is zero.
    #[tracing::instrument(skip(self, requests), fields(tickets = requests.len()))]
    pub async fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        let started = Instant::now();

        let account = validate_purchase(account_id, requests)
            .inspect_err(|rejection| self.report_rejection(account_id, rejection))?;

        let price = total_price(requests);
        tracing::debug!(%price, "requesting payment");
        self.payment
            .make_payment(account, price)
            .await
            .inspect_err(|e| {
                metrics::counter!("purchase_collaborator_failures_total", "collaborator" => "payment")
                    .increment(1);
                tracing::error!(error = %e, "payment failed");
            })?;

        let seats = total_seats(requests);
        tracing::debug!(seats, "requesting seat reservation");
        self.reservation
            .reserve_seat(account, seats)
            .await
            .inspect_err(|e| {
                metrics::counter!("purchase_collaborator_failures_total", "collaborator" => "reservation")
                    .increment(1);
                tracing::error!(error = %e, %price, "seat reservation failed after payment was taken");
            })?;

        let confirmation = PurchaseConfirmation {
            purchase_id: PurchaseId::new(),
            account_id: account,
            summary: PurchaseSummary::from_requests(requests),
            completed_at: Utc::now(),
        };
        self.notifier.purchase_completed(&confirmation);

        metrics::counter!("purchases_completed_total").increment(1);
        metrics::histogram!("purchase_duration_seconds").record(started.elapsed().as_secs_f64());

        Ok(())
    }

    /// Runs a [`PurchaseTickets`] command.
    pub async fn purchase(&self, cmd: &PurchaseTickets) -> Result<(), PurchaseError> {
        self.purchase_tickets(cmd.account_id, &cmd.requests).await
    }

    /// Validates a purchase and computes its totals without charging,
    /// reserving or notifying.
    pub fn quote(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseRejected> {
        validate_purchase(account_id, requests)?;
        Ok(PurchaseSummary::from_requests(requests))
    }

    /// Records a rejection: metrics plus a notification.
    ///
    /// Public so that callers which reject input before it reaches
    /// [`purchase_tickets`](Self::purchase_tickets), such as an unparseable
    /// ticket type, report it the same way.
    pub fn report_rejection(&self, account_id: i64, rejection: &PurchaseRejected) {
        metrics::counter!("purchases_rejected_total", "reason" => rejection.code()).increment(1);
        self.notifier.purchase_rejected(account_id, rejection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PaymentError, ReservationError};
    use crate::notifier::RecordingNotifier;
    use crate::services::{InMemoryPaymentService, InMemorySeatReservationService};
    use domain::{Money, RejectionReason};

    type TestService =
        TicketService<InMemoryPaymentService, InMemorySeatReservationService, RecordingNotifier>;

    fn service() -> TestService {
        TicketService::with_notifier(
            InMemoryPaymentService::new(),
            InMemorySeatReservationService::new(),
            RecordingNotifier::new(),
        )
    }

    #[tokio::test]
    async fn test_successful_purchase_pays_and_reserves() {
        let service = service();
        let requests = [TicketTypeRequest::adult(2), TicketTypeRequest::child(1)];

        service.purchase_tickets(1, &requests).await.unwrap();

        let payments = service.payment().payments();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].account_id.get(), 1);
        assert_eq!(payments[0].amount, Money::new(50));

        let reservations = service.reservation().reservations();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].seats, 3);

        let confirmations = service.notifier().confirmations();
        assert_eq!(confirmations.len(), 1);
        assert_eq!(confirmations[0].summary.total_price, Money::new(50));
    }

    #[tokio::test]
    async fn test_rejection_has_no_side_effects() {
        let service = service();

        let err = service
            .purchase_tickets(1, &[TicketTypeRequest::child(1)])
            .await
            .unwrap_err();

        assert_eq!(
            err.as_rejection().map(|r| r.code()),
            Some("ADULT_REQUIRED")
        );
        assert_eq!(service.payment().attempt_count(), 0);
        assert_eq!(service.reservation().reservation_count(), 0);
        assert_eq!(
            service.notifier().rejections(),
            vec![RejectionReason::AdultRequired]
        );
    }

    #[tokio::test]
    async fn test_payment_failure_skips_reservation() {
        let service = service();
        let declined = PaymentError::Unavailable("timeout".to_string());
        service.payment().fail_with(declined.clone());

        let err = service
            .purchase_tickets(1, &[TicketTypeRequest::adult(1)])
            .await
            .unwrap_err();

        assert_eq!(err, PurchaseError::Payment(declined));
        assert_eq!(service.reservation().reservation_count(), 0);
        assert!(service.notifier().notifications().is_empty());
    }

    #[tokio::test]
    async fn test_reservation_failure_keeps_payment() {
        let service = service();
        service
            .reservation()
            .fail_with(ReservationError::SeatsUnavailable { requested: 1 });

        let err = service
            .purchase_tickets(1, &[TicketTypeRequest::adult(1)])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            PurchaseError::Reservation(ReservationError::SeatsUnavailable { requested: 1 })
        );
        assert_eq!(service.payment().total_collected(), Money::new(20));
        assert!(service.notifier().confirmations().is_empty());
    }

    #[tokio::test]
    async fn test_quote_has_no_side_effects() {
        let service = service();
        let requests = [TicketTypeRequest::adult(1), TicketTypeRequest::infant(2)];

        let summary = service.quote(1, &requests).unwrap();

        assert_eq!(summary.total_price, Money::new(20));
        assert_eq!(summary.total_seats, 1);
        assert_eq!(service.payment().attempt_count(), 0);
        assert!(service.notifier().notifications().is_empty());
    }

    #[tokio::test]
    async fn test_purchase_command() {
        let service = service();
        let cmd = PurchaseTickets::new(5, [TicketTypeRequest::adult(3)]);

        service.purchase(&cmd).await.unwrap();

        assert_eq!(service.payment().payments()[0].amount, Money::new(60));
        assert_eq!(service.reservation().reservations()[0].account_id.get(), 5);
    }
}
