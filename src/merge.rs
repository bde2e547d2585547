use serde_json::Value;

use crate::document::ConfigDocument;
use crate::types::BetaSettings;

pub const BETA_KIND_KEY: &str = "betaKind";
pub const BETA_KEY_KEY: &str = "betaKey";

/// Overwrite `betaKind` and `betaKey` in `document`.
/// Both keys are always set, whether or not they were present or what type
/// they held. Every other key is left as it was.
pub fn apply_beta(mut document: ConfigDocument, beta: BetaSettings<'_>) -> ConfigDocument {
    document.insert(BETA_KIND_KEY.into(), Value::String(beta.kind.into()));
    document.insert(BETA_KEY_KEY.into(), Value::String(beta.key.into()));
    document
}
