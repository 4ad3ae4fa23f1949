//! Top-level CLI definition and dispatch.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};
use serde_json::{Value, json};
use thiserror::Error;

use mockseam::core::config::Config;
use mockseam::core::errors::MksError;
use mockseam::generator::output::Freshness;
use mockseam::generator::pipeline::{GeneratedFile, Generator};
use mockseam::logger::generation::GenerationLog;
use mockseam::model::catalog::TypeCatalog;
use mockseam::resolver::graph::detect_any_cycle;
use mockseam::resolver::method_set::ResolvedMethodSet;
use mockseam::resolver::traversal::resolve;

/// mockseam: test-only method proxies for composed types.
#[derive(Debug, Parser)]
#[command(
    name = "mockseam",
    author,
    version,
    about = "Generate test-only method proxies for composed types",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Echo generation events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Generate proxies for one or more root types.
    Generate(GenerateArgs),
    /// Show the resolved method set of a root type.
    Resolve(ResolveArgs),
    /// Validate a definitions file, including cycle checks.
    Validate(ValidateArgs),
    /// Fail unless the generated file matches the current inputs.
    Check(GenerateArgs),
    /// Show the effective configuration.
    Config,
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args)]
struct GenerateArgs {
    /// Component definitions (TOML, or JSON by extension).
    #[arg(long, value_name = "FILE")]
    defs: PathBuf,
    /// Root type to proxy. Repeat for several roots in one file.
    #[arg(long = "type", value_name = "NAME", required = true)]
    types: Vec<String>,
    /// Output file; defaults to `<output.dir>/<root><output.file_suffix>`.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct ResolveArgs {
    #[arg(long, value_name = "FILE")]
    defs: PathBuf,
    #[arg(long = "type", value_name = "NAME")]
    type_name: String,
}

#[derive(Debug, Clone, Args)]
struct ValidateArgs {
    #[arg(long, value_name = "FILE")]
    defs: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Shell to generate completion script for.
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Mks(#[from] MksError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        Command::Generate(args) => run_generate(cli, args),
        Command::Resolve(args) => run_resolve(cli, args),
        Command::Validate(args) => run_validate(cli, args),
        Command::Check(args) => run_check(cli, args),
        Command::Config => run_config(cli),
        Command::Completions(args) => {
            let mut command = Cli::command();
            let binary_name = command.get_name().to_string();
            generate(args.shell, &mut command, binary_name, &mut io::stdout());
            Ok(())
        }
    }
}

fn build_generator(cli: &Cli) -> Result<Generator, CliError> {
    let config = Config::load(cli.config.as_deref())?;
    let log = GenerationLog::from_config(&config.logging, cli.verbose);
    Ok(Generator::new(config)?.with_log(log))
}

fn output_path(generator: &Generator, args: &GenerateArgs) -> Result<PathBuf, CliError> {
    match &args.out {
        Some(path) => Ok(path.clone()),
        None => Ok(generator.default_output_path(&args.types)?),
    }
}

fn run_generate(cli: &Cli, args: &GenerateArgs) -> Result<(), CliError> {
    let generator = build_generator(cli)?;
    let catalog = TypeCatalog::load(&args.defs)?;
    let file = generator.generate(&catalog, &args.types)?;
    let path = output_path(&generator, args)?;
    generator.write(&file, &path)?;

    match output_mode(cli) {
        OutputMode::Human => {
            println!(
                "{} {} (digest {})",
                "wrote".green().bold(),
                path.display(),
                short_digest(&file.digest)
            );
            for proxy in &file.proxies {
                let names: Vec<&str> = proxy.methods.iter().map(|m| m.name.as_str()).collect();
                if names.is_empty() {
                    println!("  {}: {}", proxy.component.bold(), "no proxied methods".dimmed());
                } else {
                    println!("  {}: {}", proxy.component.bold(), names.join(", "));
                }
            }
        }
        OutputMode::Json => {
            let payload = json!({
                "command": "generate",
                "path": path.to_string_lossy(),
                "digest": file.digest,
                "roots": file.roots,
                "proxies": proxies_json(&file),
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

fn proxies_json(file: &GeneratedFile) -> Value {
    file.proxies
        .iter()
        .map(|proxy| {
            let methods: Vec<Value> = proxy
                .methods
                .iter()
                .map(|m| {
                    json!({
                        "name": m.name,
                        "depth": m.depth,
                        "origin": m.origin.to_string(),
                        "controls": m.controls,
                    })
                })
                .collect();
            json!({ "component": proxy.component, "methods": methods })
        })
        .collect()
}

fn run_resolve(cli: &Cli, args: &ResolveArgs) -> Result<(), CliError> {
    let catalog = TypeCatalog::load(&args.defs)?;
    catalog.validate()?;
    let set = resolve(&catalog, &args.type_name)?;

    match output_mode(cli) {
        OutputMode::Human => print_resolved_human(&set),
        OutputMode::Json => write_json_line(&resolved_json(&set))?,
    }
    Ok(())
}

fn print_resolved_human(set: &ResolvedMethodSet) {
    println!("{}", set.root.bold());
    if set.is_empty() {
        println!("  {}", "no promoted methods".dimmed());
    }
    for (name, method) in set.iter() {
        println!(
            "  {name:<24} depth {}  {}",
            method.depth,
            method.origin.to_string().dimmed()
        );
    }
    for (name, ambiguity) in set.ambiguous() {
        let origins: Vec<String> = ambiguity.origins.iter().map(ToString::to_string).collect();
        println!(
            "  {} {name} at depth {}: {}",
            "ambiguous".yellow().bold(),
            ambiguity.depth,
            origins.join(", ")
        );
    }
    if !set.own_methods().is_empty() {
        let own: Vec<&str> = set.own_methods().iter().map(String::as_str).collect();
        println!("  own: {}", own.join(", "));
    }
}

fn resolved_json(set: &ResolvedMethodSet) -> Value {
    let methods: Vec<Value> = set
        .iter()
        .map(|(name, method)| {
            json!({
                "name": name,
                "depth": method.depth,
                "origin": method.origin.to_string(),
                "signature": method.signature.display(),
            })
        })
        .collect();
    let ambiguous: Vec<Value> = set
        .ambiguous()
        .iter()
        .map(|(name, ambiguity)| {
            let origins: Vec<String> = ambiguity.origins.iter().map(ToString::to_string).collect();
            json!({ "name": name, "depth": ambiguity.depth, "origins": origins })
        })
        .collect();
    json!({
        "command": "resolve",
        "root": set.root,
        "methods": methods,
        "ambiguous": ambiguous,
        "own": set.own_methods(),
    })
}

fn run_validate(cli: &Cli, args: &ValidateArgs) -> Result<(), CliError> {
    let catalog = TypeCatalog::load(&args.defs)?;
    catalog.validate()?;
    detect_any_cycle(&catalog)?;

    match output_mode(cli) {
        OutputMode::Human => {
            println!(
                "{} {} component(s) in {}",
                "valid".green().bold(),
                catalog.components.len(),
                args.defs.display()
            );
        }
        OutputMode::Json => {
            let payload = json!({
                "command": "validate",
                "valid": true,
                "path": args.defs.to_string_lossy(),
                "components": catalog.names(),
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

fn run_check(cli: &Cli, args: &GenerateArgs) -> Result<(), CliError> {
    let generator = build_generator(cli)?;
    let catalog = TypeCatalog::load(&args.defs)?;
    let file = generator.generate(&catalog, &args.types)?;
    let path = output_path(&generator, args)?;
    let state = generator.check(&file, &path)?;

    match output_mode(cli) {
        OutputMode::Human => print_freshness_human(&path, &state),
        OutputMode::Json => {
            let payload = json!({
                "command": "check",
                "path": path.to_string_lossy(),
                "expected": file.digest,
                "freshness": serde_json::to_value(&state)?,
            });
            write_json_line(&payload)?;
        }
    }

    if state.is_current() {
        Ok(())
    } else {
        Err(MksError::StaleOutput { path }.into())
    }
}

fn print_freshness_human(path: &Path, state: &Freshness) {
    match state {
        Freshness::Current => println!("{} {}", "current".green().bold(), path.display()),
        Freshness::Stale { found: Some(found) } => println!(
            "{} {} (digest {})",
            "stale".yellow().bold(),
            path.display(),
            short_digest(found)
        ),
        Freshness::Stale { found: None } => println!(
            "{} {} (no digest header)",
            "stale".yellow().bold(),
            path.display()
        ),
        Freshness::Missing => println!("{} {}", "missing".red().bold(), path.display()),
    }
}

fn run_config(cli: &Cli) -> Result<(), CliError> {
    let config = Config::load(cli.config.as_deref())?;
    let hash = config.stable_hash()?;
    let source = config
        .source
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned());

    match output_mode(cli) {
        OutputMode::Human => {
            match &source {
                Some(path) => println!("# source: {path}"),
                None => println!("# source: defaults"),
            }
            println!("# hash: {hash}");
            let toml_str = toml::to_string_pretty(&config).map_err(|e| MksError::Serialization {
                context: "config",
                details: e.to_string(),
            })?;
            println!("{toml_str}");
        }
        OutputMode::Json => {
            let payload = json!({
                "command": "config",
                "source": source,
                "hash": hash,
                "config": serde_json::to_value(&config)?,
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

fn short_digest(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    writeln!(stdout)?;
    Ok(())
}

fn output_mode(cli: &Cli) -> OutputMode {
    let env_mode = std::env::var("MOCKSEAM_OUTPUT_FORMAT").ok();
    resolve_output_mode(cli.json, env_mode.as_deref(), io::stdout().is_terminal())
}

fn resolve_output_mode(json_flag: bool, env_mode: Option<&str>, stdout_is_tty: bool) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }

    let fallback = if stdout_is_tty {
        OutputMode::Human
    } else {
        OutputMode::Json
    };

    match env_mode
        .map(str::trim)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => OutputMode::Json,
        Some("human") => OutputMode::Human,
        _ => fallback,
    }
}
