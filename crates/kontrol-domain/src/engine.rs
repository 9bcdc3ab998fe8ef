use crate::error::NoDecision;
use crate::policy::{EvaluationPolicy, Strategy};
use crate::response::Response;
use crate::set::ResponseSet;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Run `check` over every item, in order, and classify the results.
///
/// Every item is evaluated; a denial never stops the walk, so the resulting set carries
/// every denial reason.
pub fn evaluate<T, I, F>(items: I, mut check: F) -> Result<ResponseSet, NoDecision>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Response,
{
    let responses: Vec<Response> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let response = check(item);
            trace_response(index, &response);
            response
        })
        .collect();

    classify(responses, Strategy::Sequential)
}

/// Same contract as [`evaluate`], with the walk strategy taken from `policy`.
///
/// The parallel strategy runs on the rayon pool. Results are collected in input order and
/// classification only starts once every item has been checked.
pub fn evaluate_with<T, F>(
    policy: &EvaluationPolicy,
    items: Vec<T>,
    check: F,
) -> Result<ResponseSet, NoDecision>
where
    T: Send,
    F: Fn(T) -> Response + Sync + Send,
{
    let strategy = policy.strategy_for(items.len());
    let responses: Vec<Response> = match strategy {
        Strategy::Sequential => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let response = check(item);
                trace_response(index, &response);
                response
            })
            .collect(),
        Strategy::Parallel => items
            .into_par_iter()
            .enumerate()
            .map(|(index, item)| {
                let response = check(item);
                trace_response(index, &response);
                response
            })
            .collect(),
    };

    classify(responses, strategy)
}

fn classify(responses: Vec<Response>, strategy: Strategy) -> Result<ResponseSet, NoDecision> {
    let Some(set) = ResponseSet::from_vec(responses) else {
        debug!(strategy = %strategy, "no items to check, no decision taken");
        return Err(NoDecision);
    };

    debug!(
        strategy = %strategy,
        items = set.len(),
        denied = set.denied_subset().count(),
        decision = %set.decision(),
        "aggregated responses"
    );
    Ok(set)
}

fn trace_response(index: usize, response: &Response) {
    trace!(
        index = index,
        issuer = %response.issuer(),
        decision = %response.decision(),
        code = response.code(),
        "evaluated item"
    );
}
