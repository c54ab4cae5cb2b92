use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::debug;
use zonedump_domain::{CliOverrides, OutputFormat};

mod bootstrap;
mod di;

/// Convert a saved Namecheap advanced DNS JSON dump into zone-file lines.
///
/// Capture the payload from
/// https://ap.www.namecheap.com/Domains/dns/GetAdvancedDnsInfo?fillTransferInfo=false&domainName=<DOMAIN>
/// while logged in, save it to a file and pass that file here.
#[derive(Parser)]
#[command(name = "zonedump")]
#[command(version)]
#[command(about = "Generate a DNS zone file from a Namecheap advanced DNS dump")]
struct Cli {
    /// JSON file holding the advanced DNS info response
    #[arg(value_name = "FILENAME")]
    filename: PathBuf,

    /// Output format (default, cloudflare)
    #[arg(short = 'f', long, alias = "f", value_parser = OutputFormat::from_str)]
    format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Write zone lines to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&mut std::io::stderr().lock(), &e);
            ExitCode::FAILURE
        }
    }
}

/// The operator sees exactly one line per failed run.
fn report_error<W: Write>(out: &mut W, error: &anyhow::Error) {
    let _ = writeln!(out, "ERROR: {:#}", error);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cli_overrides = CliOverrides {
        format: cli.format,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    debug!(
        input = %cli.filename.display(),
        format = %config.output.format,
        "Starting zonedump v{}",
        env!("CARGO_PKG_VERSION")
    );

    let use_case = di::build_export_use_case(&cli.filename, cli.output.as_deref());
    use_case.execute(config.output.format)?;

    Ok(())
}
