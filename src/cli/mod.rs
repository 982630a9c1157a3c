//! CLI command handling
//!
//! Resolves the endpoint and initial session settings, then runs the session.

use crate::commands::Cli;
use crate::common::config::Config;
use crate::common::Result;
use crate::endpoint::Endpoint;
use crate::session::{self, SessionState, Verbosity};

/// Run the CLI with parsed arguments
pub async fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let Some(endpoint) = resolve_endpoint(&cli)? else {
        eprintln!("No url given");
        return Ok(());
    };

    session::run(initial_state(&cli, config, endpoint)).await
}

/// Endpoint from the arguments; `None` when none was given
fn resolve_endpoint(cli: &Cli) -> Result<Option<Endpoint>> {
    if cli.local {
        return Ok(Some(Endpoint::local()));
    }
    match cli.endpoint.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Endpoint::parse(s).map(Some),
    }
}

/// Session state from the endpoint, with flags taking precedence over config
fn initial_state(cli: &Cli, config: &Config, endpoint: Endpoint) -> SessionState {
    let verbosity = if cli.verbose || config.session.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Short
    };
    let mode = cli.mode.unwrap_or(config.session.mode);

    SessionState::new(endpoint)
        .with_verbosity(verbosity)
        .with_outgoing_kind(mode)
}
