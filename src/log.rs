use tracing_subscriber::EnvFilter;

/// Filter for this crate and the request logger at `level`
pub fn directives(level: &str) -> String {
    format!("livedvr={},http_log={}", level, level)
}

/// `RUST_LOG` overrides `env_filter` when set
pub fn set(env_filter: String) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(env_filter)))
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        assert_eq!("livedvr=debug,http_log=debug", directives("debug"));
    }
}
