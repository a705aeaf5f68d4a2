//! dotnet-versions CLI entry point.

use std::process::ExitCode;

use dotnet_versions::cli::{Cli, CommandDispatcher};
use dotnet_versions::config::Settings;
use dotnet_versions::detection::DetectionRunner;
use dotnet_versions::ui::TerminalUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so the report on stdout stays exact. `RUST_LOG`
/// overrides the default level of WARN.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dotnet_versions=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_lenient();
    init_tracing();

    tracing::debug!("dotnet-versions starting with args: {:?}", cli);

    let invocation = cli.invocation();
    let dispatcher = CommandDispatcher::new(DetectionRunner::new(Settings::from_env()));
    let mut ui = TerminalUI::new();
    let mut stdout = std::io::stdout();

    if let Err(e) = dispatcher.dispatch(invocation, &mut stdout, &mut ui) {
        tracing::warn!("Report incomplete: {}", e);
    }

    ExitCode::SUCCESS
}
