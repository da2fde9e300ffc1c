//! The `validate` use case: resolve a config and report every issue at once.

use anyhow::Context;
use pitchgate_settings::ConfigIssue;

/// Outcome of validating one config text.
#[derive(Clone, Debug)]
pub enum ValidateOutput {
    /// The resolved tables are sound; counts are for operator feedback.
    Valid {
        roles: usize,
        permissions: usize,
        overlay_titles: usize,
    },
    /// One or more validation issues; the tables were never exposed.
    Invalid { issues: Vec<ConfigIssue> },
}

/// Validate config text. Unparseable TOML is a hard error; a parseable but
/// inconsistent config is a normal `Invalid` outcome.
pub fn run_validate(config_text: &str) -> anyhow::Result<ValidateOutput> {
    let cfg = if config_text.trim().is_empty() {
        pitchgate_settings::PitchgateConfigV1::default()
    } else {
        pitchgate_settings::parse_config_toml(config_text).context("parse config")?
    };

    match pitchgate_settings::resolve_config(cfg) {
        Ok(resolved) => Ok(ValidateOutput::Valid {
            roles: resolved.tables.hierarchy.levels.len(),
            permissions: resolved.tables.catalog.len(),
            overlay_titles: resolved
                .tables
                .overlays
                .values()
                .map(|titles| titles.len())
                .sum(),
        }),
        Err(err) => Ok(ValidateOutput::Invalid { issues: err.issues }),
    }
}

/// Map outcome to exit code: 0 = valid, 2 = invalid.
pub fn validate_exit_code(output: &ValidateOutput) -> i32 {
    match output {
        ValidateOutput::Valid { .. } => 0,
        ValidateOutput::Invalid { .. } => 2,
    }
}

/// Format the outcome for terminal display.
pub fn format_validate(output: &ValidateOutput) -> String {
    match output {
        ValidateOutput::Valid {
            roles,
            permissions,
            overlay_titles,
        } => format!(
            "config OK: {roles} roles, {permissions} permissions, {overlay_titles} overlay titles\n"
        ),
        ValidateOutput::Invalid { issues } => {
            let mut out = format!("config INVALID: {} issues\n", issues.len());
            for issue in issues {
                out.push_str(&format!("  - {issue}\n"));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_valid() {
        let output = run_validate("").expect("validate");
        assert_eq!(validate_exit_code(&output), 0);
        let text = format_validate(&output);
        assert!(text.contains("config OK"));
        assert!(text.contains("6 roles"));
    }

    #[test]
    fn inconsistent_config_is_invalid_not_an_error() {
        let output = run_validate("[tiers]\ngold = [\"team:read\"]\n").expect("validate");
        assert_eq!(validate_exit_code(&output), 2);
        let text = format_validate(&output);
        assert!(text.contains("config INVALID"));
        assert!(text.contains("unknown_tier"));
    }

    #[test]
    fn unparseable_toml_is_a_hard_error() {
        assert!(run_validate("not [valid toml").is_err());
    }
}
