use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a given verbosity and optional configured level.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        "age_gate=debug".to_string()
    } else {
        format!("age_gate={}", level.unwrap_or("warn"))
    }
}

// stdout only carries the prompt and the verdict, so logs go to stderr.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, None), "age_gate=warn");
        assert_eq!(default_directive(false, Some("info")), "age_gate=info");
        assert_eq!(default_directive(true, Some("error")), "age_gate=debug");
    }
}
