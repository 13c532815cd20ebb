//! algo-catalog HTTP service.
//!
//! ```text
//! algo-catalog [--bind <ADDR>] [--port <PORT>]
//! ```
//!
//! Priority: CLI arguments > environment variables > defaults.

use std::env;
use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use algo_catalog::config::{ServiceConfig, ENV_BIND, ENV_LOG, ENV_MAX_BODY_BYTES, ENV_RABIN_BASE, ENV_RABIN_MODULUS};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Debug, Default)]
struct CliArgs {
    /// --bind <ADDR>
    bind_address: Option<String>,
    /// --port <PORT>
    port: Option<u16>,
    help: bool,
}

impl CliArgs {
    fn parse() -> Result<Self, String> {
        let mut cli = CliArgs::default();
        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => cli.help = true,
                "--bind" => {
                    cli.bind_address = Some(args.next().ok_or("--bind requires an address")?);
                }
                "--port" => {
                    let raw = args.next().ok_or("--port requires a number")?;
                    let port = raw.parse().map_err(|_| format!("invalid --port '{raw}'"))?;
                    cli.port = Some(port);
                }
                other => return Err(format!("unknown argument '{other}'")),
            }
        }
        Ok(cli)
    }
}

fn print_help() {
    eprintln!(
        r#"algo-catalog: search, sort, graph and string-matching algorithms over HTTP

USAGE:
    algo-catalog [OPTIONS]

OPTIONS:
    --bind <ADDRESS>     Socket address to listen on (default: 0.0.0.0:5000)
    --port <PORT>        Override only the port of the bind address
    --help, -h           Show this help message

ENVIRONMENT VARIABLES:
    {ENV_BIND:<28}Socket address to listen on
    {ENV_MAX_BODY_BYTES:<28}Request body limit in bytes (default: 2097152)
    {ENV_RABIN_BASE:<28}Rabin-Karp hash base (default: 256)
    {ENV_RABIN_MODULUS:<28}Rabin-Karp hash modulus (default: 101)
    {ENV_LOG:<28}Log filter used when RUST_LOG is unset (default: info)
    RUST_LOG                    Log filter (error, warn, info, debug, trace)"#
    );
}

fn load_config(cli: &CliArgs) -> algo_catalog::Result<ServiceConfig> {
    let mut config = ServiceConfig::from_env()?;
    if let Some(ref bind) = cli.bind_address {
        config = config.with_bind(bind)?;
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    Ok(config)
}

fn init_tracing(config: &ServiceConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_writer(io::stderr).with_env_filter(filter).with_target(false).init();
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match CliArgs::parse() {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {message}\n");
            print_help();
            return ExitCode::FAILURE;
        }
    };
    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    match algo_catalog::server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
