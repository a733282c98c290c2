//! Integration tests for purchase validation and totals.
//!
//! These exercise the public API the way the purchase service uses it:
//! validate first, then derive price and seat counts.

use domain::{
    MAX_TICKETS_PER_PURCHASE, Money, PurchaseSummary, PurchaseTickets, RejectionReason,
    TicketType, TicketTypeRequest, total_price, total_seats, validate_purchase,
};

mod scenarios {
    use super::*;

    #[test]
    fn two_adults_one_child() {
        let cmd = PurchaseTickets::new(1, [TicketTypeRequest::adult(2), TicketTypeRequest::child(1)]);

        let account = validate_purchase(cmd.account_id, &cmd.requests).unwrap();
        assert_eq!(account.get(), 1);
        assert_eq!(total_price(&cmd.requests), Money::new(50));
        assert_eq!(total_seats(&cmd.requests), 3);
    }

    #[test]
    fn child_alone() {
        let err = validate_purchase(1, &[TicketTypeRequest::child(1)]).unwrap_err();
        assert_eq!(err.reason, RejectionReason::AdultRequired);
    }

    #[test]
    fn twenty_one_single_adult_requests() {
        let requests = vec![TicketTypeRequest::adult(1); 21];
        let err = validate_purchase(1, &requests).unwrap_err();
        assert_eq!(
            err.reason,
            RejectionReason::TooManyTickets {
                requested: 21,
                max: MAX_TICKETS_PER_PURCHASE
            }
        );
    }

    #[test]
    fn account_zero() {
        let err = validate_purchase(0, &[TicketTypeRequest::adult(1)]).unwrap_err();
        assert_eq!(err.reason, RejectionReason::InvalidAccount);
    }

    #[test]
    fn adult_with_infants() {
        let requests = [TicketTypeRequest::adult(1), TicketTypeRequest::infant(2)];

        assert!(validate_purchase(1, &requests).is_ok());
        assert_eq!(total_price(&requests), Money::new(20));
        assert_eq!(total_seats(&requests), 1);
    }
}

mod properties {
    use super::*;

    /// Every combination of per-type counts up to the limit.
    fn valid_combinations() -> impl Iterator<Item = (u32, u32, u32)> {
        let max = MAX_TICKETS_PER_PURCHASE;
        (1..=max).flat_map(move |a| {
            (0..=max - a).flat_map(move |c| (0..=max - a - c).map(move |i| (a, c, i)))
        })
    }

    #[test]
    fn totals_follow_unit_prices_for_every_valid_mix() {
        for (a, c, i) in valid_combinations() {
            let requests = [
                TicketTypeRequest::adult(a),
                TicketTypeRequest::child(c),
                TicketTypeRequest::infant(i),
            ];
            assert!(validate_purchase(1, &requests).is_ok(), "{a}/{c}/{i}");

            let summary = PurchaseSummary::from_requests(&requests);
            assert_eq!(summary.total_price.amount(), u64::from(20 * a + 10 * c));
            assert_eq!(summary.total_seats, a + c);
            assert_eq!(summary.total_tickets(), a + c + i);
        }
    }

    #[test]
    fn any_minor_without_adult_is_rejected() {
        // Zero-quantity child and infant lines still count as present.
        for c in 0..=10 {
            for i in 0..=10 {
                let requests = [TicketTypeRequest::child(c), TicketTypeRequest::infant(i)];
                let err = validate_purchase(7, &requests).unwrap_err();
                assert_eq!(err.code(), "ADULT_REQUIRED");
            }
        }
    }

    #[test]
    fn request_order_does_not_change_the_outcome() {
        let forward = [
            TicketTypeRequest::child(3),
            TicketTypeRequest::infant(1),
            TicketTypeRequest::adult(2),
        ];
        let mut reversed = forward;
        reversed.reverse();

        assert_eq!(validate_purchase(1, &forward), validate_purchase(1, &reversed));
        assert_eq!(
            PurchaseSummary::from_requests(&forward),
            PurchaseSummary::from_requests(&reversed)
        );
    }

    #[test]
    fn parsed_types_price_like_their_variants() {
        for tag in ["ADULT", "CHILD", "INFANT"] {
            let ticket_type: TicketType = tag.parse().unwrap();
            assert_eq!(ticket_type.as_str(), tag);
            assert_eq!(
                TicketTypeRequest::new(ticket_type, 1).price(),
                ticket_type.unit_price()
            );
        }
    }
}
