use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_FILTER: &str = "fuel_savings=info";
const VERBOSE_FILTER: &str = "fuel_savings=debug,info";
// JSON output defaults to warnings and errors only.
const JSON_FILTER: &str = "fuel_savings=warn";

/// `RUST_LOG` always takes precedence over `default_directives`.
fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Compact human-readable logs on stderr, so stdout stays free for the report.
pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose { VERBOSE_FILTER } else { QUIET_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// One flat JSON object per event on stderr, tagged with the emitting module.
pub fn init_json_logger(verbose: bool) {
    let filter = env_filter(if verbose { VERBOSE_FILTER } else { JSON_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for directives in [QUIET_FILTER, VERBOSE_FILTER, JSON_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{} did not parse", directives);
        }
    }

    #[test]
    fn test_json_filter_is_quieter_than_cli() {
        let json = EnvFilter::new(JSON_FILTER).to_string();
        assert!(json.contains("warn"));
        assert!(!json.contains("debug"));
    }
}
