//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{KontrolConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `kontrol.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<KontrolConfigV1> {
    let cfg: KontrolConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the evaluation policy used by `can_all_with` (profile + file values + overrides).
pub fn resolve_config(
    cfg: KontrolConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
