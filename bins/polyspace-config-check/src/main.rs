use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use polyspace_config::{
    check_filename, check_port, check_protocol, AccessChecker, CommandRunner,
    ConnectionParameters, Kind, MessageCatalog, PolyspaceConfig, ValidationReport,
    ValidationResult,
};

/// Polyspace configuration checks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a single field value
    Field {
        #[arg(value_enum)]
        field: Field,
        /// Value to validate (may be empty)
        #[arg(default_value = "")]
        value: String,
    },

    /// Check that Polyspace Access is reachable with the given credentials
    Access(AccessArgs),

    /// Validate a YAML configuration file
    Config {
        /// Configuration file path (YAML)
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Also run the Polyspace Access check with the file's settings
        #[arg(long)]
        check_access: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Field {
    Protocol,
    Port,
    Filename,
}

#[derive(Args, Debug)]
struct AccessArgs {
    /// Polyspace bin folder
    #[arg(long, value_name = "DIR")]
    bin_dir: PathBuf,
    #[arg(long, default_value = "")]
    login: String,
    /// Encrypted password, as produced by polyspace-access -encrypt-password
    #[arg(long, default_value = "", hide_default_value = true)]
    password: String,
    #[arg(long, default_value = "")]
    protocol: String,
    #[arg(long, default_value = "")]
    host: String,
    #[arg(long, default_value = "")]
    port: String,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    initialize_logging(cli.debug)?;

    let worst = match cli.command {
        Command::Field { field, value } => {
            let result = match field {
                Field::Protocol => check_protocol(&value),
                Field::Port => check_port(&value),
                Field::Filename => check_filename(&value),
            };
            print_result(&format!("{:?}", field).to_lowercase(), result, &MessageCatalog::new());
            result.kind()
        }
        Command::Access(args) => {
            let params = ConnectionParameters::new(args.login, args.password)
                .with_protocol(args.protocol)
                .with_host(args.host)
                .with_port(args.port);

            info!("Checking Polyspace Access from {}", args.bin_dir.display());
            let result = AccessChecker::new().check_access(&args.bin_dir, &params);
            print_result("access", result, &MessageCatalog::new());
            result.kind()
        }
        Command::Config { path, check_access } => {
            info!("Config file: {}", path.display());
            let config = PolyspaceConfig::load_from_file(&path)?;
            let catalog = config.catalog();

            let checker = check_access.then(AccessChecker::new);
            let (report, access) = check_config(&config, checker.as_ref());

            for (field, result) in report.iter() {
                print_result(field, *result, &catalog);
            }
            if let Some(result) = access {
                print_result("access", result, &catalog);
            }

            worst_kind(&report, access)
        }
    };

    Ok(ExitCode::from(exit_status(worst)))
}

/// Validate a loaded configuration, running the access check when a
/// checker is given
fn check_config<R: CommandRunner>(
    config: &PolyspaceConfig,
    checker: Option<&AccessChecker<R>>,
) -> (ValidationReport, Option<ValidationResult>) {
    let report = config.validate_fields();

    let access = checker.map(|checker| {
        info!("Checking Polyspace Access for installation {}", config.installation.name);
        checker.check_access(
            &config.installation.bin_dir,
            &config.access.connection_parameters(),
        )
    });

    (report, access)
}

fn worst_kind(report: &ValidationReport, access: Option<ValidationResult>) -> Kind {
    access
        .map(|result| result.kind())
        .into_iter()
        .fold(report.worst_kind(), Kind::max)
}

/// Process exit status: warnings do not fail the run
fn exit_status(worst: Kind) -> u8 {
    match worst {
        Kind::Ok | Kind::Warning => 0,
        Kind::Error => 1,
    }
}

fn print_result(field: &str, result: ValidationResult, catalog: &MessageCatalog) {
    match result {
        ValidationResult::Ok => println!("{:<30} {}", field, result.kind()),
        _ => println!("{:<30} {:<8} {}", field, result.kind(), result.render(catalog)),
    }
}

fn initialize_logging(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
