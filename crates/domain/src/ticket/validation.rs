//! Business rules a purchase must satisfy before any money moves.

use common::AccountId;

use crate::error::{PurchaseRejected, RejectionReason};

use super::{TicketType, TicketTypeRequest};

/// Most tickets a single purchase may contain, across all types.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Checks a purchase and returns the validated account ID.
///
/// Rules are checked in this order and the first failure is reported:
/// 1. the account ID must be positive;
/// 2. the total quantity must not exceed [`MAX_TICKETS_PER_PURCHASE`];
/// 3. child and infant tickets need at least one adult ticket.
pub fn validate_purchase(
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> Result<AccountId, PurchaseRejected> {
    let account_id = validate_account(account_id)?;
    validate_ticket_count(requests.iter().map(TicketTypeRequest::quantity))?;
    validate_accompaniment(requests)?;
    Ok(account_id)
}

/// Rule 1: the account ID must be positive.
pub fn validate_account(account_id: i64) -> Result<AccountId, PurchaseRejected> {
    AccountId::new(account_id).map_err(|_| PurchaseRejected::new(RejectionReason::InvalidAccount))
}

/// Rule 2: the summed quantities must not exceed [`MAX_TICKETS_PER_PURCHASE`].
///
/// Takes bare quantities so that lines whose ticket type could not be parsed
/// still count towards the limit.
pub fn validate_ticket_count(
    quantities: impl IntoIterator<Item = u32>,
) -> Result<(), PurchaseRejected> {
    // Widened so adversarial input cannot overflow.
    let requested: u64 = quantities.into_iter().map(u64::from).sum();
    if requested > u64::from(MAX_TICKETS_PER_PURCHASE) {
        return Err(PurchaseRejected::new(RejectionReason::TooManyTickets {
            requested,
            max: MAX_TICKETS_PER_PURCHASE,
        }));
    }
    Ok(())
}

/// Rule 3: a child or infant request needs an adult request alongside it.
///
/// Child and infant requests count by presence, whatever their quantity. An
/// adult request only counts when it is for at least one ticket.
pub fn validate_accompaniment(requests: &[TicketTypeRequest]) -> Result<(), PurchaseRejected> {
    let has_minor = requests.iter().any(|r| r.ticket_type().requires_adult());
    let has_adult = requests
        .iter()
        .any(|r| r.ticket_type() == TicketType::Adult && r.quantity() > 0);

    if has_minor && !has_adult {
        return Err(PurchaseRejected::new(RejectionReason::AdultRequired));
    }
    Ok(())
}
