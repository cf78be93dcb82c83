use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::{Limits, Size};

mod application;
mod components;
mod message;
mod pages;

use gtodo::config::{APP_ID, CONFIG_VERSION, GtodoConfig};

use application::{Flags, Gtodo};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match cosmic::cosmic_config::Config::new(APP_ID, CONFIG_VERSION) {
        Ok(cosmic_cfg) => GtodoConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg),
        Err(_) => GtodoConfig::default(),
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("gtodo: journal logging unavailable: {e}");
    }

    let settings = Settings::default()
        .size(Size::new(400.0, 500.0))
        .size_limits(Limits::NONE.min_width(300.0).min_height(300.0));

    cosmic::app::run::<Gtodo>(settings, Flags { config })?;

    Ok(())
}

/// Send logs to the systemd user journal (`journalctl --user -t gtodo -f`).
/// This crate logs at info (debug when enabled in config), everything else at warn.
fn init_logging(config: &GtodoConfig) -> Result<(), Box<dyn std::error::Error>> {
    struct FilteredJournal {
        inner: systemd_journal_logger::JournalLog,
    }

    impl log::Log for FilteredJournal {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            let target = metadata.target();
            if target.starts_with("gtodo") {
                let max = if gtodo::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                metadata.level() <= max
            } else {
                metadata.level() <= log::LevelFilter::Warn
            }
        }
        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.inner.log(record);
            }
        }
        fn flush(&self) {
            self.inner.flush();
        }
    }

    let journal = systemd_journal_logger::JournalLog::new()?
        .with_syslog_identifier("gtodo".to_string());

    gtodo::set_debug_logging(config.debug_logging);

    log::set_boxed_logger(Box::new(FilteredJournal { inner: journal }))?;
    // Global max must be Debug so debug logs can pass through when toggled
    log::set_max_level(log::LevelFilter::Debug);
    Ok(())
}
