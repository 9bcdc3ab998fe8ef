use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "kontrol.config.v1";

/// `kontrol.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KontrolConfigV1 {
    /// Optional schema string for tooling (`kontrol.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `sequential` (default) or `parallel`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Override the preset's walk strategy: `sequential` or `parallel`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    /// Minimum number of items before the parallel strategy kicks in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_min_items: Option<u32>,
}
