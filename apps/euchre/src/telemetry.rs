use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber: `RUST_LOG` filter (default `info`),
/// JSON lines or compact text.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry.with(base.json()).try_init()
    } else {
        registry.with(base.compact()).try_init()
    };
    // Already installed (e.g. by an embedding binary): keep theirs.
    result.ok();
}
