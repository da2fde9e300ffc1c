//! CLI entry point for pitchgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `pitchgate-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use pitchgate_app::{
    AuditInput, ExplainOutput, format_explanation, format_not_found, format_validate,
    render_markdown, run_audit, run_explain, run_validate, serialize_envelope,
    validate_exit_code,
};
use pitchgate_types::Role;

#[derive(Parser, Debug)]
#[command(
    name = "pitchgate",
    version,
    about = "Role and permission decision engine for club management applications"
)]
struct Cli {
    /// Path to pitchgate config TOML. A missing file is allowed; the preset
    /// catalog applies.
    #[arg(long, default_value = "pitchgate.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the tables and emit a JSON audit envelope.
    Audit {
        /// Roles to summarize (repeatable). Defaults to every role.
        #[arg(long)]
        role: Vec<String>,

        /// Where to write the JSON (stdout if not specified).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Render per-role permission summaries as Markdown.
    Summary {
        /// Roles to summarize (repeatable). Defaults to every role.
        #[arg(long)]
        role: Vec<String>,

        /// Where to write the Markdown (stdout if not specified).
        #[arg(long, short)]
        out: Option<Utf8PathBuf>,
    },

    /// Validate the config, reporting every issue at once.
    Validate,

    /// Explain a permission domain or token (e.g. "injury" or "injury:manage").
    Explain { identifier: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Audit { ref role, ref out } => cmd_audit(&cli, role, out.clone(), false),
        Commands::Summary { ref role, ref out } => cmd_audit(&cli, role, out.clone(), true),
        Commands::Validate => cmd_validate(&cli),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

fn cmd_audit(
    cli: &Cli,
    role_names: &[String],
    out: Option<Utf8PathBuf>,
    markdown: bool,
) -> anyhow::Result<()> {
    let config_text = load_config_text(&cli.config);
    let roles = parse_roles(role_names)?;

    let output = run_audit(AuditInput {
        config_text: &config_text,
        roles,
    })?;

    let rendered = if markdown {
        render_markdown(&output.envelope)
    } else {
        serialize_envelope(&output.envelope)?
    };

    match out {
        Some(path) => write_text_file(&path, &rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn cmd_validate(cli: &Cli) -> anyhow::Result<()> {
    let config_text = load_config_text(&cli.config);
    let output = run_validate(&config_text)?;
    print!("{}", format_validate(&output));

    let code = validate_exit_code(&output);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_domains,
            available_roles,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, &available_domains, &available_roles)
            );
            std::process::exit(1);
        }
    }
}

/// Missing config file is allowed; defaults apply.
fn load_config_text(path: &Utf8PathBuf) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

fn parse_roles(names: &[String]) -> anyhow::Result<Option<Vec<Role>>> {
    if names.is_empty() {
        return Ok(None);
    }
    let roles = names
        .iter()
        .map(|name| {
            Role::parse(name).with_context(|| {
                format!(
                    "unknown role: {name} (expected one of: {})",
                    Role::ALL
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
        })
        .collect::<anyhow::Result<Vec<Role>>>()?;
    Ok(Some(roles))
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write output: {}", path))?;
    Ok(())
}
