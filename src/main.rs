fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    connect_four_engine::protocol::run_loop();
}

/// Route `log` records to stderr when `CONNECT_FOUR_LOG` names a level.
#[cfg(feature = "logging")]
fn init_logging() {
    struct StderrLogger;

    impl log::Log for StderrLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                eprintln!("{} {}: {}", record.level(), record.target(), record.args());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: StderrLogger = StderrLogger;

    let Some(level) = std::env::var("CONNECT_FOUR_LOG")
        .ok()
        .and_then(|v| v.parse::<log::LevelFilter>().ok())
    else {
        return;
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
