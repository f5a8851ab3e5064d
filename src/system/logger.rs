use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = std::env::var("XFFGEN_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn second_init_keeps_first_subscriber() -> Result<(), String> {
        init_logging(false, false);
        if !tracing::dispatcher::has_been_set() {
            return Err("Expected a global subscriber after init".to_owned());
        }
        let first = LevelFilter::current();

        init_logging(true, true);
        let second = LevelFilter::current();
        if second != first {
            return Err(format!(
                "Second init replaced the subscriber: {} -> {}",
                first, second
            ));
        }
        Ok(())
    }
}
