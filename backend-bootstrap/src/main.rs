use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "warlog-backend")]
#[command(about = "War log query server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long)]
    log_dir: Option<String>,
}

fn init_tracing(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let Some(dir) = log_dir else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return None;
    };
    let appender = tracing_appender::rolling::daily(dir, "warlog-backend.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(args.log_dir.as_deref());
    if let Some(config) = args.config {
        std::env::set_var("WARLOG_CONFIG", config);
    }
    backend_bootstrap::run_standalone().await
}
