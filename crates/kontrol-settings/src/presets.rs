use kontrol_domain::EvaluationPolicy;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything else goes into `kontrol.toml`.
pub fn preset(profile: &str) -> EvaluationPolicy {
    match profile {
        "parallel" => EvaluationPolicy::parallel(EvaluationPolicy::DEFAULT_PARALLEL_MIN_ITEMS),
        // default
        _ => EvaluationPolicy::sequential(),
    }
}
