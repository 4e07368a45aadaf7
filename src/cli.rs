use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::shell::{Inputs, Session, view};
use crate::{ClampPolicy, Outcome};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the infographic once
    Render(RenderArgs),
    /// Read commands from stdin (total/benefit/harm <n>, reset, show, quit)
    Session {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Total population (0-100)
    #[arg(long, allow_negative_numbers = true)]
    total: Option<f64>,
    /// People who benefit
    #[arg(long, allow_negative_numbers = true)]
    benefit: Option<f64>,
    /// People who are harmed
    #[arg(long, allow_negative_numbers = true)]
    harm: Option<f64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Args)]
struct CommonArgs {
    /// JSON config with initial values and clamp policy
    #[arg(long)]
    config: Option<PathBuf>,
    /// Apply upper-bound clamps only (negative values pass through)
    #[arg(long)]
    legacy_clamp: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl CommonArgs {
    fn resolve(&self) -> Result<Config> {
        let cfg = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        Ok(self.apply(cfg))
    }

    /// Flags win over the config file.
    fn apply(&self, mut cfg: Config) -> Config {
        if self.legacy_clamp {
            cfg.policy = ClampPolicy::Legacy;
        }
        cfg
    }
}

impl RenderArgs {
    /// Config values first, then any `--total/--benefit/--harm` on top.
    fn inputs(&self, cfg: &Config) -> Inputs {
        let mut inputs = cfg.inputs();
        if let Some(v) = self.total {
            inputs.set_total(v);
        }
        if let Some(v) = self.benefit {
            inputs.set_benefit(v);
        }
        if let Some(v) = self.harm {
            inputs.set_harm(v);
        }
        inputs
    }
}

fn write_outcome<W: Write>(mut out: W, outcome: &Outcome, format: Format) -> Result<()> {
    match format {
        Format::Text => write!(out, "{}", view::render(outcome))?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, outcome)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn run() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => {
            let cfg = args.common.resolve()?;
            let outcome = args.inputs(&cfg).outcome(cfg.policy);
            write_outcome(io::stdout().lock(), &outcome, args.format)?;
        }
        Commands::Session { common } => {
            let cfg = common.resolve()?;
            log::info!("starting session with policy {:?}", cfg.policy);
            let mut session = Session::new(cfg.inputs(), cfg.policy);
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_args(argv: &[&str]) -> RenderArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Commands::Render(args) => args,
            Commands::Session { .. } => panic!("expected render"),
        }
    }

    #[test]
    fn legacy_flag_overrides_config_policy() {
        let args = render_args(&["outcome-grid", "render", "--legacy-clamp"]);
        let cfg = Config::from_json(r#"{ "policy": "guarded" }"#).unwrap();
        assert_eq!(args.common.apply(cfg).policy, ClampPolicy::Legacy);

        let args = render_args(&["outcome-grid", "render"]);
        let cfg = Config::from_json(r#"{ "policy": "legacy" }"#).unwrap();
        assert_eq!(args.common.apply(cfg).policy, ClampPolicy::Legacy);
    }

    #[test]
    fn value_flags_override_config_values() {
        let args = render_args(&["outcome-grid", "render", "--benefit", "50", "--harm", "-3"]);
        let cfg = Config::from_json(r#"{ "total": 30, "benefit": 4, "harm": 1 }"#).unwrap();
        let inputs = args.inputs(&cfg);
        assert_eq!(inputs, Inputs { total: 30.0, benefit: 50.0, harm: -3.0 });
    }

    #[test]
    fn config_file_then_flags_under_legacy() {
        let path = std::env::temp_dir()
            .join(format!("outcome-grid-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "total": 30 }"#).unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let args = render_args(&[
            "outcome-grid", "render", "--config", &path_arg,
            "--benefit", "50", "--harm", "3", "--legacy-clamp",
        ]);
        let cfg = args.common.resolve().unwrap();
        let outcome = args.inputs(&cfg).outcome(cfg.policy);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            (outcome.total, outcome.clamped_benefit, outcome.clamped_harm, outcome.unaffected),
            (30.0, 30.0, 3.0, -3.0)
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = render_args(&["outcome-grid", "render", "--config", "/nonexistent/cfg.json"]);
        let err = args.common.resolve().unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }

    #[test]
    fn json_format_writes_the_outcome() {
        let args = render_args(&["outcome-grid", "render", "--format", "json", "--total", "20"]);
        assert_eq!(args.format, Format::Json);
        let outcome = args.inputs(&Config::default()).outcome(ClampPolicy::Guarded);

        let mut out = Vec::new();
        write_outcome(&mut out, &outcome, args.format).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["total"], 20.0);
        assert_eq!(v["unaffected"], 13.0);
        assert_eq!(v["cells"][20], "default");
    }

    #[test]
    fn text_format_writes_the_summary() {
        let mut out = Vec::new();
        write_outcome(&mut out, &crate::compute(100.0, 5.0, 2.0), Format::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("and 93 will experience no meaningful change.\n"));
    }

    #[test]
    fn session_accepts_common_flags() {
        let cli = Cli::try_parse_from(["outcome-grid", "session", "--legacy-clamp"]).unwrap();
        match cli.command {
            Commands::Session { common } => assert!(common.legacy_clamp),
            Commands::Render(_) => panic!("expected session"),
        }
    }
}
