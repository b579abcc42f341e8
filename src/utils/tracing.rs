use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_standard_tracing(crate_name: &str, level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(crate_name, level).into()),
        )
        .with(tracing_subscriber::fmt::layer().event_format(tracing_subscriber::fmt::format()))
        .init();
}

fn default_directives(crate_name: &str, level: &str) -> String {
    format!("{crate_name}={level},mongodb=warn")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_name_crate_once() {
        let directives = default_directives("employees_db", "debug");

        assert_eq!(directives, "employees_db=debug,mongodb=warn");
        assert!(tracing_subscriber::EnvFilter::try_new(&directives).is_ok());
    }
}
