use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::{Path, PathBuf};

use skillkit_config::{ConfigLoader, SkillkitConfig};
use skillkit_versions::SystemSource;

mod check;
mod init;
mod package;
mod validate;

/// 🧰 skillkit — scaffold, validate, package and audit agent skill bundles
#[derive(Parser)]
#[command(name = "skillkit", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to skillkit.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new skill bundle from templates
    Init {
        /// Hyphen-case skill name (e.g. data-analyzer)
        name: String,
        /// Directory the bundle is created in
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Validate a skill bundle
    Validate {
        /// Path to the skill folder
        path: PathBuf,
        /// Output the diagnostics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and package a skill bundle into a .skill archive
    Package {
        /// Path to the skill folder
        path: PathBuf,
        /// Directory for the archive (defaults to the current directory)
        output: Option<PathBuf>,
    },
    /// Check installed vs latest version of a package
    Check {
        /// Package manager: npm or pip
        manager: String,
        /// Package name (e.g. react, @scope/pkg, requests)
        package: Option<String>,
        /// Check every dependency in ./package.json (npm only)
        #[arg(long)]
        all: bool,
        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Run the selected command.
    ///
    /// `Ok(false)` means the command completed but its verdict is a failure
    /// (invalid bundle, outdated package); the binary exits 1 without an
    /// error line in that case.
    pub async fn run(self) -> skillkit_core::Result<bool> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // RUST_LOG > --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level
                .as_deref()
                .unwrap_or(config.logging.level.as_str())
        };
        init_tracing(log_level, &config.logging.format);

        match self.command {
            Commands::Init { name, path } => init::cmd_init(&name, &path),
            Commands::Validate { path, json } => validate::cmd_validate(&config, &path, json),
            Commands::Package { path, output } => {
                package::cmd_package(&config, &path, output.as_deref())
            }
            Commands::Check {
                manager,
                package,
                all,
                json,
            } => {
                let project_root = std::env::current_dir()?;
                let source = SystemSource::new(&project_root, &config.versions);
                check::cmd_check(&source, &project_root, &manager, package.as_deref(), all, json)
                    .await
            }
            Commands::Config { json } => Self::cmd_config(config, config_loader.path(), json),
            Commands::Completions { shell } => Self::cmd_completions(shell),
        }
    }

    fn cmd_config(
        config: SkillkitConfig,
        path: &Path,
        json: bool,
    ) -> skillkit_core::Result<bool> {
        if json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!("{}", config_source(path));
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| skillkit_core::SkillkitError::Config(e.to_string()))?
            );
        }
        Ok(true)
    }

    fn cmd_completions(shell: Shell) -> skillkit_core::Result<bool> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "skillkit", &mut std::io::stdout());
        Ok(true)
    }
}

fn init_tracing(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if format == "json" {
        builder.json().with_target(true).init();
    } else {
        builder.with_target(false).init();
    }
}

/// TOML comment naming where the effective config came from.
fn config_source(path: &Path) -> String {
    if path.exists() {
        format!("# Loaded from {}", path.display())
    } else {
        format!("# No config file at {}; showing defaults", path.display())
    }
}

/// Render a bullet list under a heading, or nothing when empty.
pub(crate) fn bullets(heading: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = format!("{heading}\n");
    for item in items {
        out.push_str(&format!("   • {item}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_check_all() {
        let cli = Cli::try_parse_from(["skillkit", "check", "npm", "--all", "--json"]).unwrap();
        match cli.command {
            Commands::Check {
                manager,
                package,
                all,
                json,
            } => {
                assert_eq!(manager, "npm");
                assert!(package.is_none());
                assert!(all && json);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_parses_package_with_output_dir() {
        let cli = Cli::try_parse_from(["skillkit", "package", "my-skill", "dist", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Package { path, output } => {
                assert_eq!(path, PathBuf::from("my-skill"));
                assert_eq!(output, Some(PathBuf::from("dist")));
            }
            _ => panic!("expected package"),
        }
    }

    #[test]
    fn test_init_requires_path() {
        assert!(Cli::try_parse_from(["skillkit", "init", "my-skill"]).is_err());
        let cli =
            Cli::try_parse_from(["skillkit", "init", "my-skill", "--path", "skills/public"]).unwrap();
        match cli.command {
            Commands::Init { name, path } => {
                assert_eq!(name, "my-skill");
                assert_eq!(path, PathBuf::from("skills/public"));
            }
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["skillkit", "-v", "-q", "config"]).is_err());
    }

    #[test]
    fn test_config_source_header() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("skillkit.toml");
        assert!(config_source(&missing).contains("showing defaults"));

        std::fs::write(&missing, "").unwrap();
        assert_eq!(
            config_source(&missing),
            format!("# Loaded from {}", missing.display())
        );
    }

    #[test]
    fn test_bullets_render() {
        assert_eq!(bullets("❌ Errors:", &[]), "");
        let out = bullets("❌ Errors:", &["one".into(), "two".into()]);
        assert_eq!(out, "❌ Errors:\n   • one\n   • two\n");
    }
}
