//! colink CLI Client
//!
//! Interactive client for the worker-collection service.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use colink::bootstrap::{self, exit_code};
use colink::interaction::{ConsoleInteraction, Interaction};
use colink::protocol::CommandTable;
use colink::{ClientConfig, ClientError};
use tracing_subscriber::{fmt, EnvFilter};

/// colink CLI
#[derive(Parser, Debug)]
#[command(name = "colink-cli")]
#[command(about = "Interactive UDP client for the worker-collection service")]
#[command(version)]
struct Args {
    /// Server host; prompted for when absent
    #[arg(long)]
    host: Option<String>,

    /// Server port (1025-65535); prompted for when absent
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1025..))]
    port: Option<u16>,

    /// Local bind address
    #[arg(short, long, default_value = "0.0.0.0:0")]
    bind: SocketAddr,

    /// Give up on a silent server after this many milliseconds (waits forever if absent)
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// File that fatal errors are appended to
    #[arg(short, long, default_value = "errorLog.txt")]
    error_log: PathBuf,
}

fn main() {
    // Logs go to stderr so the operator dialogue on stdout stays readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut ui = ConsoleInteraction::stdio();

    tracing::info!("colink CLI v{}", colink::VERSION);

    let (host, port) = match (args.host.clone(), args.port) {
        (Some(host), Some(port)) => (host, port),
        (Some(host), None) => match bootstrap::prompt_port(&mut ui) {
            Ok(port) => (host, port),
            Err(e) => fatal(&mut ui, &args.error_log, e),
        },
        (None, _) => match bootstrap::prompt_endpoint(&mut ui) {
            Ok(endpoint) => endpoint,
            Err(e) => fatal(&mut ui, &args.error_log, e),
        },
    };

    let config = ClientConfig::builder()
        .host(host)
        .port(port)
        .bind_addr(args.bind)
        .response_timeout(args.timeout_ms.map(Duration::from_millis))
        .error_log(&args.error_log)
        .build();

    let result = CommandTable::standard()
        .and_then(|table| bootstrap::launch(&config, table, &mut ui));

    match result {
        Ok(outcome) => std::process::exit(exit_code(outcome)),
        Err(e) => fatal(&mut ui, &config.error_log, e),
    }
}

/// Report a fatal error to the operator and the error log, then exit
fn fatal<I: Interaction>(ui: &mut I, error_log: &Path, error: ClientError) -> ! {
    tracing::error!("Fatal: {}", error);
    let _ = ui.display(bootstrap::fatal_message(&error));
    if let Err(log_err) = bootstrap::write_error_log(error_log, &error) {
        tracing::error!("Cannot write error log {}: {}", error_log.display(), log_err);
    }
    std::process::exit(1);
}
