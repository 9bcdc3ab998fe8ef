use crate::{model::KontrolConfigV1, presets};
use anyhow::Context;
use kontrol_domain::{EvaluationPolicy, Strategy};

/// Values supplied by the embedding application; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub strategy: Option<String>,
    pub parallel_min_items: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: EvaluationPolicy,
}

pub fn resolve_config(
    cfg: KontrolConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "sequential".to_string());

    let mut policy = presets::preset(&profile);

    if let Some(strategy) = overrides.strategy.as_deref().or(cfg.strategy.as_deref()) {
        policy.strategy = parse_strategy(strategy)
            .with_context(|| format!("invalid strategy for profile {profile}"))?;
    }

    if let Some(min) = overrides.parallel_min_items.or(cfg.parallel_min_items) {
        if min == 0 {
            anyhow::bail!("parallel_min_items must be at least 1");
        }
        policy.parallel_min_items = min as usize;
    }

    Ok(ResolvedConfig { policy })
}

fn parse_strategy(v: &str) -> anyhow::Result<Strategy> {
    match v {
        "sequential" => Ok(Strategy::Sequential),
        "parallel" => Ok(Strategy::Parallel),
        other => anyhow::bail!("unknown strategy: {other} (expected 'sequential' or 'parallel')"),
    }
}
