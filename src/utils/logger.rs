use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for the CLI. Results printed to stdout keep the log to
/// warnings; writing to a file also reports progress at info.
pub fn default_directive(verbose: bool, writing_to_file: bool) -> &'static str {
    match (verbose, writing_to_file) {
        (true, _) => "calculate_area=debug,warn",
        (false, true) => "calculate_area=info,warn",
        (false, false) => "warn",
    }
}

pub fn init_cli_logger(verbose: bool, writing_to_file: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, writing_to_file)));

    // stdout carries results
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "warn");
        assert_eq!(default_directive(false, true), "calculate_area=info,warn");
        assert_eq!(default_directive(true, false), "calculate_area=debug,warn");
    }
}
