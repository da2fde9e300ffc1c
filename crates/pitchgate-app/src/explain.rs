//! The `explain` use case: look up permission domain documentation.

use pitchgate_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes the known domains and roles.
    NotFound {
        identifier: String,
        available_domains: Vec<&'static str>,
        available_roles: Vec<&'static str>,
    },
}

/// Look up an explanation for a domain name or permission token.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_domains: explain::all_domains(),
            available_roles: explain::all_roles(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Typically held by\n");
    out.push_str("-----------------\n");
    out.push_str(exp.typical_holders);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, domains: &[&'static str], roles: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown domain or permission token: {}\n\n", identifier));
    out.push_str("Available domains:\n");
    for domain in domains {
        out.push_str(&format!("  - {}\n", domain));
    }
    out.push_str("\nAvailable roles:\n");
    for role in roles {
        out.push_str(&format!("  - {}\n", role));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_domain() {
        let output = run_explain("injury");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_token() {
        let output = run_explain("analytics:export");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown() {
        let output = run_explain("not_a_real_thing");
        match output {
            ExplainOutput::NotFound {
                identifier,
                available_domains,
                available_roles,
            } => {
                assert_eq!(identifier, "not_a_real_thing");
                assert!(available_domains.contains(&"injury"));
                assert!(available_roles.contains(&"manager"));
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_explanation_output() {
        let ExplainOutput::Found(exp) = run_explain("finance") else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.contains("Finances"));
        assert!(formatted.contains("Typically held by"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["team", "injury"], &["manager"]);
        assert!(formatted.contains("Unknown domain or permission token: missing"));
        assert!(formatted.contains("  - team"));
        assert!(formatted.contains("Available roles:"));
        assert!(formatted.contains("  - manager"));
    }
}
