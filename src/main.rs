use ecr_search::cli::{Args, Runner};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse_args();
    let region = args.region.clone();

    let runner = match Runner::new(args) {
        Ok(runner) => runner,
        Err(err) => {
            error!(%err, "invalid configuration");
            std::process::exit(2);
        }
    };

    if let Err(err) = runner.run().await {
        error!(%err, %region, "search failed");
        std::process::exit(1);
    }
}
