#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "trace")]
use tracing_subscriber::fmt::MakeWriter;
#[cfg(feature = "trace")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "dango_core=debug,dango_cli=debug";

#[cfg(feature = "trace")]
fn subscriber<W>(writer: W, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .finish()
}

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to debug
/// output from the aggregation crates.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        if let Err(e) = tracing::subscriber::set_global_default(subscriber(std::io::stderr, filter))
        {
            eprintln!("Error installing trace subscriber: {e}");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing() {}
