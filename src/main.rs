//! PGDL command-line entry point

fn main() {
    // Token output goes to stdout; keep logs on stderr and quiet unless RUST_LOG asks otherwise
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    pgdl::cli::run();
}
