//! Ticket purchase endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use domain::{
    PurchaseRejected, PurchaseSummary, TicketType, TicketTypeRequest, validate_accompaniment,
    validate_account, validate_ticket_count,
};
use purchase::{InMemoryPaymentService, InMemorySeatReservationService, TicketService};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub ticket_service: TicketService<InMemoryPaymentService, InMemorySeatReservationService>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct PurchaseRequest {
    pub account_id: i64,
    #[serde(default)]
    pub tickets: Vec<TicketRequest>,
}

/// A ticket line as sent by clients. The type is kept as free text so that
/// unknown tags can be rejected with a proper reason code.
#[derive(Deserialize)]
pub struct TicketRequest {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub quantity: u32,
}

// -- Response types --

#[derive(Serialize)]
pub struct PurchaseResponse {
    pub status: &'static str,
    pub account_id: i64,
    pub total_price: u64,
    pub total_seats: u32,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub adult_count: u32,
    pub child_count: u32,
    pub infant_count: u32,
    pub total_price: u64,
    pub total_seats: u32,
}

impl From<PurchaseSummary> for QuoteResponse {
    fn from(summary: PurchaseSummary) -> Self {
        Self {
            adult_count: summary.adult_count,
            child_count: summary.child_count,
            infant_count: summary.infant_count,
            total_price: summary.total_price.amount(),
            total_seats: summary.total_seats,
        }
    }
}

// -- Handlers --

/// POST /purchases — validate, pay for and reserve tickets.
#[tracing::instrument(skip_all, fields(account_id = tracing::field::Empty))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PurchaseResponse>), ApiError> {
    let Json(req) = payload?;
    tracing::Span::current().record("account_id", req.account_id);

    let requests = parse_tickets(req.account_id, &req.tickets)
        .inspect_err(|rejection| state.ticket_service.report_rejection(req.account_id, rejection))?;

    state
        .ticket_service
        .purchase_tickets(req.account_id, &requests)
        .await?;

    let summary = PurchaseSummary::from_requests(&requests);
    let response = PurchaseResponse {
        status: "purchased",
        account_id: req.account_id,
        total_price: summary.total_price.amount(),
        total_seats: summary.total_seats,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /purchases/quote — price a purchase without paying or reserving.
#[tracing::instrument(skip_all, fields(account_id = tracing::field::Empty))]
pub async fn quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(req) = payload?;
    tracing::Span::current().record("account_id", req.account_id);

    let requests = parse_tickets(req.account_id, &req.tickets)?;
    let summary = state.ticket_service.quote(req.account_id, &requests)?;
    Ok(Json(summary.into()))
}

/// Turns wire lines into typed requests.
///
/// An unknown tag is only reported once the purchase has passed every
/// validation rule, so a request that is also invalid for another reason gets
/// the same code it would get with known tags. Unknown lines still count
/// towards the ticket limit; the adult rule is checked over the known lines.
fn parse_tickets(
    account_id: i64,
    tickets: &[TicketRequest],
) -> Result<Vec<TicketTypeRequest>, PurchaseRejected> {
    let mut requests = Vec::with_capacity(tickets.len());
    let mut unknown = None;

    for ticket in tickets {
        match ticket.ticket_type.parse::<TicketType>() {
            Ok(ticket_type) => requests.push(TicketTypeRequest::new(ticket_type, ticket.quantity)),
            Err(reason) => {
                unknown.get_or_insert(reason);
            }
        }
    }

    let Some(reason) = unknown else {
        return Ok(requests);
    };

    validate_account(account_id)?;
    validate_ticket_count(tickets.iter().map(|t| t.quantity))?;
    validate_accompaniment(&requests)?;
    Err(PurchaseRejected::new(reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::RejectionReason;

    fn ticket(tag: &str, quantity: u32) -> TicketRequest {
        TicketRequest {
            ticket_type: tag.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_parse_known_tags() {
        let parsed = parse_tickets(1, &[ticket("ADULT", 2), ticket("infant", 1)]).unwrap();
        assert_eq!(
            parsed,
            vec![TicketTypeRequest::adult(2), TicketTypeRequest::infant(1)]
        );
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = parse_tickets(1, &[ticket("ADULT", 1), ticket("SENIOR", 1)]).unwrap_err();
        assert_eq!(
            err.reason,
            RejectionReason::UnknownTicketType("SENIOR".to_string())
        );
    }

    #[test]
    fn test_invalid_account_reported_before_unknown_tag() {
        let err = parse_tickets(0, &[ticket("SENIOR", 1)]).unwrap_err();
        assert_eq!(err.reason, RejectionReason::InvalidAccount);
    }

    #[test]
    fn test_unknown_lines_count_towards_limit() {
        let err = parse_tickets(1, &[ticket("ADULT", 1), ticket("SENIOR", 25)]).unwrap_err();
        assert_eq!(
            err.reason,
            RejectionReason::TooManyTickets {
                requested: 26,
                max: 20
            }
        );
    }

    #[test]
    fn test_missing_adult_reported_before_unknown_tag() {
        let err = parse_tickets(1, &[ticket("CHILD", 1), ticket("SENIOR", 1)]).unwrap_err();
        assert_eq!(err.reason, RejectionReason::AdultRequired);
    }
}
