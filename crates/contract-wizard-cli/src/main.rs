// crates/contract-wizard-cli/src/main.rs
// ============================================================================
// Module: Contract Wizard CLI
// Description: Command-line entry point for printing, fixtures and imports.
// Purpose: Drive the wizard from scripts and build pipelines.
// Dependencies: clap, contract-wizard-core, contract-wizard-stylus, serde_jcs
// ============================================================================

//! ## Overview
//! `contract-wizard` exposes three subcommands:
//! - `print` renders one option record as Stylus source
//! - `generate` writes the fixture corpus into a directory
//! - `imports` resolves the library sources an option record compiles against
//!
//! Configuration comes from `--config`, then `CONTRACT_WIZARD_CONFIG`, then
//! `contract-wizard.toml` when present; otherwise defaults apply. Failures
//! print one line to stderr and exit with status 1.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use contract_wizard_cli::t;
use contract_wizard_core::Contract;
use contract_wizard_core::Printer;
use contract_wizard_stylus::Kind;
use contract_wizard_stylus::Subset;
use contract_wizard_stylus::WizardConfig;
use contract_wizard_stylus::WizardLogSink;
use contract_wizard_stylus::build_generic;
use contract_wizard_stylus::config::CONFIG_ENV_VAR;
use contract_wizard_stylus::config::DEFAULT_CONFIG_NAME;
use contract_wizard_stylus::load_library;
use contract_wizard_stylus::load_options;
use contract_wizard_stylus::resolve_imports;
use contract_wizard_stylus::write_generated_sources;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Definitions
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "contract-wizard",
    about = "Generate OpenZeppelin Stylus token contracts and fixtures.",
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print the CLI version and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one contract from an option record.
    Print(PrintCommand),
    /// Write the fixture corpus into a directory.
    Generate(GenerateCommand),
    /// Resolve the library sources a contract compiles against.
    Imports(ImportsCommand),
}

/// Arguments for `print`.
#[derive(Args, Debug)]
struct PrintCommand {
    /// Option record JSON file.
    #[arg(long, value_name = "PATH")]
    options: PathBuf,
    /// Config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output file; stdout when omitted.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
struct GenerateCommand {
    /// Config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output directory; overrides `generation.output_dir`.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Subset selection; overrides `generation.subset`.
    #[arg(long, value_enum)]
    subset: Option<SubsetArg>,
    /// Restricts generation to one kind; overrides `generation.kind`.
    #[arg(long, value_enum)]
    kind: Option<KindArg>,
    /// Names contracts `Contract<N>` and files after them.
    #[arg(long = "unique-name", action = ArgAction::SetTrue)]
    unique_name: bool,
    /// Pins every on/off option to `true`.
    #[arg(long = "force-true", action = ArgAction::SetTrue)]
    force_true: bool,
}

/// Arguments for `imports`.
#[derive(Args, Debug)]
struct ImportsCommand {
    /// Option record JSON file.
    #[arg(long, value_name = "PATH")]
    options: PathBuf,
    /// Library table JSON file; overrides `library.path`.
    #[arg(long, value_name = "PATH")]
    library: Option<PathBuf>,
    /// Config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output file; stdout when omitted.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

/// Subset selection flag values.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum SubsetArg {
    /// Every buildable option record.
    All,
    /// A greedy cover of traits, signatures and imports.
    MinimalCover,
}

impl From<SubsetArg> for Subset {
    fn from(value: SubsetArg) -> Self {
        match value {
            SubsetArg::All => Self::All,
            SubsetArg::MinimalCover => Self::MinimalCover,
        }
    }
}

/// Kind flag values.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum KindArg {
    /// Fungible token.
    Erc20,
    /// Non-fungible token.
    Erc721,
    /// Multi-token.
    Erc1155,
}

impl From<KindArg> for Kind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Erc20 => Self::Erc20,
            KindArg::Erc721 => Self::Erc721,
            KindArg::Erc1155 => Self::Erc1155,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a rendered message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Rendered, user-facing message.
    message: String,
}

impl CliError {
    /// Wraps a rendered message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// Result alias for CLI operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Runs the CLI and maps failures to a non-zero exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses arguments and dispatches the selected subcommand.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Print(command) => command_print(&command, &mut stdout),
        Commands::Generate(command) => command_generate(&command, &mut stdout),
        Commands::Imports(command) => command_imports(&command, &mut stdout),
    }
}

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Renders one option record.
fn command_print(command: &PrintCommand, out: &mut dyn Write) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let contract = build_contract(&command.options)?;
    let source = Printer::new(config.printer_config()).render(&contract);
    match &command.out {
        Some(path) => {
            write_file(path, source.as_bytes())?;
            let name = &contract.name().identifier;
            write_line(out, &t!("print.ok", name = name, path = path.display()))?;
        }
        None => write_bytes(out, source.as_bytes())?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Writes the fixture corpus.
fn command_generate(command: &GenerateCommand, out: &mut dyn Write) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let sink = build_sink(&config)?;
    let mut params = config.generation_params();
    if let Some(subset) = command.subset {
        params.subset = subset.into();
    }
    if let Some(kind) = command.kind {
        params.kind = Some(kind.into());
    }
    if command.unique_name {
        params.unique_name = true;
    }
    if command.force_true {
        params.force_true = true;
    }
    let dir = command.out.clone().unwrap_or_else(|| config.generation.output_dir.clone());
    let names = write_generated_sources(&dir, &params, sink.as_ref())
        .map_err(|err| CliError::new(t!("generate.failed", error = err)))?;
    write_line(out, &t!("generate.ok", count = names.len(), path = dir.display()))?;
    Ok(ExitCode::SUCCESS)
}

/// Resolves library sources as canonical JSON.
fn command_imports(command: &ImportsCommand, out: &mut dyn Write) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let library_path = command
        .library
        .clone()
        .or_else(|| config.library.path.clone())
        .ok_or_else(|| CliError::new(t!("library.missing")))?;
    let sink = build_sink(&config)?;
    let contract = build_contract(&command.options)?;
    let library = load_library(&library_path)
        .map_err(|err| CliError::new(t!("library.load_failed", error = err)))?;
    let sources = resolve_imports(&contract, &library, sink.as_ref())
        .map_err(|err| CliError::new(t!("imports.resolve_failed", error = err)))?;
    let mut bytes = serde_jcs::to_vec(&sources)
        .map_err(|err| CliError::new(t!("imports.serialize_failed", error = err)))?;
    bytes.push(b'\n');
    match &command.out {
        Some(path) => {
            write_file(path, &bytes)?;
            write_line(out, &t!("imports.ok", count = sources.len(), path = path.display()))?;
        }
        None => write_bytes(out, &bytes)?,
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Shared Helpers
// ============================================================================

/// Loads configuration, falling back to defaults when no source exists.
fn load_config(path: Option<&Path>) -> CliResult<WizardConfig> {
    let implicit = path.is_none()
        && env::var_os(CONFIG_ENV_VAR).is_none()
        && !Path::new(DEFAULT_CONFIG_NAME).exists();
    if implicit {
        return Ok(WizardConfig::default());
    }
    WizardConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Builds the configured event sink.
fn build_sink(config: &WizardConfig) -> CliResult<Arc<dyn WizardLogSink>> {
    config.build_log_sink().map_err(|err| CliError::new(t!("logging.init_failed", error = err)))
}

/// Loads and builds one option record.
fn build_contract(path: &Path) -> CliResult<Contract> {
    let options =
        load_options(path).map_err(|err| CliError::new(t!("options.load_failed", error = err)))?;
    build_generic(&options).map_err(|err| CliError::new(t!("options.invalid", error = err)))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a file, mapping failures to a CLI error.
fn write_file(path: &Path, bytes: &[u8]) -> CliResult<()> {
    fs::write(path, bytes)
        .map_err(|err| CliError::new(t!("output.file_failed", path = path.display(), error = err)))
}

/// Writes raw bytes to the command output.
fn write_bytes(out: &mut dyn Write, bytes: &[u8]) -> CliResult<()> {
    out.write_all(bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes one line to the command output.
fn write_line(out: &mut dyn Write, message: &str) -> CliResult<()> {
    writeln!(out, "{message}").map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Renders an output failure for `stream`.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Prints `message` to stderr and returns a failing exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Tests
// ============================================================================
