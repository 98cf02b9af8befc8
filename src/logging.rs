use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a stderr subscriber for the binaries. `RUST_LOG` takes
/// precedence over `verbose`.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        "relaxed_paths=debug"
    } else {
        "relaxed_paths=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
