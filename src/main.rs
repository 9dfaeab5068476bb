use clap::Parser;

#[derive(Parser)]
#[command(name = "sift", about = "sift — rate-controlled as-you-type search")]
struct Cli {
    /// Write debug logs to /tmp/sift-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Newline-delimited candidate file (defaults to the built-in demo set).
    #[arg(long)]
    candidates: Option<std::path::PathBuf>,

    /// Override the debounce quiet period, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Override the throttle interval, in milliseconds.
    #[arg(long)]
    limit_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/sift-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("sift debug log started — tail -f /tmp/sift-debug.log");
    }

    let mut config =
        sift_core::config::Config::load().unwrap_or_else(|_| sift_core::config::Config::defaults());
    if let Some(ms) = cli.delay_ms {
        config.timing.debounce_delay_ms = ms;
    }
    if let Some(ms) = cli.limit_ms {
        config.timing.throttle_limit_ms = ms;
    }

    let candidates = match cli.candidates {
        Some(path) => sift_data::from_file(&path)?,
        None => sift_data::builtin(),
    };

    sift_tui::run(candidates, config).await
}
