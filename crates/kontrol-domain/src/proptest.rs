//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Decision / response boolean projection
//! - Aggregate classification and ordering
//! - Denial queries on `DeniedError`

use crate::assert::Assert;
use crate::engine::{evaluate, evaluate_with};
use crate::error::{NoDecision, ResponseError};
use crate::policy::EvaluationPolicy;
use crate::response::{Denied, Response};
use crate::set::{DeniedSet, ResponseSet};
use crate::test_support::{denied, granted, granted_with};
use kontrol_types::Decision;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for denial codes (short snake_case identifiers).
fn arb_code() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

/// Strategy for a single response, denials drawn from a small code space so codes repeat.
fn arb_response() -> impl Strategy<Value = Response> {
    prop_oneof![
        Just(granted()),
        arb_code().prop_map(|code| granted_with("granted", &code)),
        (0u8..6).prop_map(|n| denied(&format!("denied #{n}"), &format!("code_{n}"))),
    ]
}

fn arb_responses(min: usize) -> impl Strategy<Value = Vec<Response>> {
    prop::collection::vec(arb_response(), min..24)
}

fn expected_denials(responses: &[Response]) -> Vec<&Denied> {
    responses.iter().filter_map(Response::as_denied).collect()
}

// ============================================================================
// Property tests: projection and classification
// ============================================================================

proptest! {
    /// A response is true iff its decision is granted.
    #[test]
    fn to_bool_matches_decision(response in arb_response()) {
        prop_assert_eq!(response.to_bool(), response.decision() == Decision::Granted);
    }

    /// A set is denied iff at least one of its responses is denied.
    #[test]
    fn set_is_denied_iff_any_denial(responses in arb_responses(1)) {
        let any_denied = responses.iter().any(Response::is_denied);
        let set = ResponseSet::new(responses).expect("non-empty");
        prop_assert_eq!(set.is_denied(), any_denied);
        prop_assert_eq!(set.to_bool(), !any_denied);
    }

    /// Aggregation keeps the exact input order.
    #[test]
    fn evaluate_preserves_order(responses in arb_responses(1)) {
        let set = evaluate(responses.clone(), |r| r).expect("non-empty");
        prop_assert_eq!(set.responses(), responses.as_slice());
    }

    /// Parallel evaluation is indistinguishable from sequential evaluation.
    #[test]
    fn parallel_equals_sequential(responses in arb_responses(0), threshold in 1usize..8) {
        let sequential = evaluate(responses.clone(), |r| r);
        let parallel = evaluate_with(&EvaluationPolicy::parallel(threshold), responses, |r| r);
        prop_assert_eq!(sequential, parallel);
    }

    /// Empty input never decides, whatever the check would have said.
    #[test]
    fn empty_input_never_decides(response in arb_response()) {
        let result = evaluate(Vec::<()>::new(), |_| response.clone());
        prop_assert_eq!(result, Err(NoDecision));
    }

    /// A denied set cannot be built without a denial.
    #[test]
    fn denied_set_needs_a_denial(codes in prop::collection::vec(arb_code(), 1..10)) {
        let responses: Vec<Response> = codes.iter().map(|c| granted_with("ok", c)).collect();
        prop_assert_eq!(DeniedSet::new(responses), Err(ResponseError::NoDenial));
    }
}

// ============================================================================
// Property tests: denial queries
// ============================================================================

proptest! {
    /// Messages are exactly the denial messages, in evaluation order.
    #[test]
    fn messages_are_denials_in_order(responses in arb_responses(1)) {
        let expected: Vec<&str> = expected_denials(&responses)
            .into_iter()
            .map(Denied::message)
            .collect();
        let set = ResponseSet::new(responses.clone()).expect("non-empty");

        match set.assert() {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(err) => {
                prop_assert_eq!(err.messages(), expected.clone());
                prop_assert_eq!(err.first_message(), expected[0]);
            }
        }
    }

    /// `has_error_code` agrees with a scan of the denials, and `error_code` returns the
    /// first matching denial.
    #[test]
    fn error_code_queries_scan_denials(responses in arb_responses(1), probe in 0u8..8) {
        let code = format!("code_{probe}");
        let denials = expected_denials(&responses);
        let first_match = denials.iter().copied().find(|d| d.code() == code).cloned();

        let Some(set) = DeniedSet::new(responses.clone()).ok() else {
            prop_assert!(denials.is_empty());
            return Ok(());
        };
        let err = crate::error::DeniedError::new(set);
        prop_assert_eq!(err.has_error_code(&code), first_match.is_some());
        prop_assert_eq!(err.error_code(&code).cloned(), first_match);
    }
}
