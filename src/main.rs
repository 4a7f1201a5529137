// SPDX-License-Identifier: MPL-2.0
use learnboard::app::{self, paths, Flags, USAGE};
use learnboard::config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match Flags::from_env() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load settings, using defaults");
        config::Config::default()
    });

    let mut stdout = std::io::stdout().lock();
    match app::run(&flags, &config, &mut stdout) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
