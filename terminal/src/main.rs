use anyhow::Result;
use chrono::Local;
use std::io;
use tracing_subscriber::EnvFilter;

use terminal::app::{App, TerminalKeyWait};
use terminal::config::Config;
use terminal::replay::CommandDecoder;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::debug!("Configuration: {:?}", config);

    let decoder = CommandDecoder::new(&config.decoder_command)?;
    let today = Local::now().date_naive();
    let mut app = App::new(config, today, decoder, TerminalKeyWait);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    app.run(&mut input, &mut out)
}
