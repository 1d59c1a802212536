use tracing_subscriber::{EnvFilter, fmt};

fn level_for(verbose: u8, quiet: u8) -> &'static str {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        3..=i16::MAX => "trace",
    }
}

/// Initialize diagnostic logging on stderr.
///
/// Default level is WARN, so normal runs only show the user-facing messages.
/// - `-v` => INFO
/// - `-vv` => DEBUG
/// - `-vvv` => TRACE
/// - `-q` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=rmapty=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = level_for(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,rmapty={level}")));

    let show_src = matches!(level, "debug" | "trace");

    // try_init: tests may call run() more than once in the same process
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_counts_net_out() {
        assert_eq!(level_for(0, 0), "warn");
        assert_eq!(level_for(2, 1), "info");
        assert_eq!(level_for(0, 3), "error");
        assert_eq!(level_for(255, 0), "trace");
        assert_eq!(level_for(0, 255), "error");
    }
}
