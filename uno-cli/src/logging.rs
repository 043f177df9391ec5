use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so they never end up in the middle of a prompt. Quiet
/// unless `RUST_LOG` asks for more.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
