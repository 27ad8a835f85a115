use std::time::Duration;

use block_mover::{BlockMover, MoverConfig, MoverError};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// A row of colored inclined block movers; click or tap to move the next one.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<u32>,

    /// Milliseconds between animation ticks
    #[arg(long = "delay-ms")]
    delay_ms: Option<u64>,
}

impl Cli {
    fn into_config(self) -> MoverConfig {
        let defaults = MoverConfig::default();
        MoverConfig::builder()
            .title(self.title.unwrap_or(defaults.title))
            .window_width(self.width.unwrap_or(defaults.window_width))
            .window_height(self.height.unwrap_or(defaults.window_height))
            .delay(self.delay_ms.map_or(defaults.delay, Duration::from_millis))
            .build()
    }
}

fn main() -> Result<(), MoverError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,block_mover=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Cli::parse().into_config();
    tracing::info!(title = %config.title, delay = ?config.delay, "starting block mover");
    BlockMover::new(config)?.show()
}
