//! Bootstrap
//!
//! Process-level glue around the session: endpoint prompts, the retry
//! loop, and the error log.

use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{ClientConfig, MAX_PORT, MIN_PORT};
use crate::error::{ClientError, Result};
use crate::interaction::{messages, Interaction};
use crate::network::{Transport, UdpTransport};
use crate::protocol::CommandTable;
use crate::session::{Session, SessionOutcome};

/// Ask the operator for host and port, re-prompting on a malformed port
pub fn prompt_endpoint<I: Interaction + ?Sized>(ui: &mut I) -> Result<(String, u16)> {
    let host = ui.read_unbounded(messages::HOST_PROMPT, false)?;
    let port = prompt_port(ui)?;
    Ok((host, port))
}

/// Ask for a port in [MIN_PORT, MAX_PORT]
pub fn prompt_port<I: Interaction + ?Sized>(ui: &mut I) -> Result<u16> {
    loop {
        let raw = ui.read_bounded(messages::PORT_PROMPT, MIN_PORT as f64, MAX_PORT as f64, false)?;
        match raw.parse::<u16>() {
            Ok(port) => return Ok(port),
            Err(_) => ui.display(messages::PORT_NOT_A_NUMBER)?,
        }
    }
}

/// Open the transport, connect, and run sessions until the operator stops
///
/// Returns the outcome of the last run. Setup failures (bind, resolution)
/// and fatal session errors are returned as `Err` for the caller to report.
pub fn launch<I: Interaction + ?Sized>(
    config: &ClientConfig,
    table: CommandTable,
    ui: &mut I,
) -> Result<SessionOutcome> {
    config.validate()?;

    let mut transport = UdpTransport::open(config.bind_addr, config.response_timeout)?;
    ui.display(messages::CONNECTING)?;
    let peer = transport.connect(&config.host, config.port)?;
    ui.display(&messages::connecting_to(&config.host, config.port))?;
    tracing::info!("Session target {}", peer);

    let mut session = Session::new(transport, table, config.clone());
    run_with_retry(&mut session, ui)
}

/// Re-run `session` while it fails and the operator agrees to retry
pub fn run_with_retry<T, I>(session: &mut Session<T>, ui: &mut I) -> Result<SessionOutcome>
where
    T: Transport,
    I: Interaction + ?Sized,
{
    loop {
        let outcome = session.run(ui)?;
        if outcome == SessionOutcome::Completed {
            return Ok(outcome);
        }

        let answer = ui.read_unbounded(messages::RETRY_PROMPT, false)?;
        if !messages::is_affirmative(&answer) {
            tracing::info!("Operator declined to retry after {:?}", outcome);
            return Ok(outcome);
        }
        tracing::info!("Retrying session after {:?}", outcome);
    }
}

/// Append a fatal error and its source chain to the error log
pub fn write_error_log(path: &Path, error: &dyn Error) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    writeln!(file, "[{}] {}", stamp, error)?;
    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(file, "    caused by: {}", cause)?;
        source = cause.source();
    }
    Ok(())
}

/// Operator-facing text for an error that ends the process
pub fn fatal_message(error: &ClientError) -> &'static str {
    match error {
        ClientError::Bind { .. } => messages::BIND_FAILED,
        ClientError::AddressResolution(_) | ClientError::Io(_) => messages::CONNECT_FAILED,
        ClientError::InputClosed | ClientError::Console(_) => messages::INPUT_UNAVAILABLE,
        ClientError::Config(_) => messages::CONFIG_INVALID,
        ClientError::Encode(_) => messages::ENCODE_FAILED,
        ClientError::PeerUnreachable => messages::PEER_UNREACHABLE,
        ClientError::Decode(_) => messages::MALFORMED_RESPONSE,
    }
}

/// Process exit code for a finished session
pub fn exit_code(outcome: SessionOutcome) -> i32 {
    match outcome {
        SessionOutcome::Completed | SessionOutcome::PeerUnreachable => 0,
        SessionOutcome::TransportError => 1,
    }
}
