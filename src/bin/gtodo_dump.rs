use std::path::PathBuf;
use std::process::ExitCode;

use cosmic::cosmic_config::CosmicConfigEntry;

use gtodo::config::{APP_ID, CONFIG_VERSION, GtodoConfig};

fn main() -> ExitCode {
    let logger = systemd_journal_logger::JournalLog::new()
        .and_then(|journal| {
            journal
                .with_syslog_identifier("gtodo-dump".to_string())
                .install()
                .map_err(std::io::Error::other)
        });
    if let Err(e) = logger {
        eprintln!("gtodo-dump: journal logging unavailable: {e}");
    }
    log::set_max_level(log::LevelFilter::Info);

    // Explicit path wins, otherwise resolve the same file the app uses
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let config = cosmic::cosmic_config::Config::new(APP_ID, CONFIG_VERSION)
                .ok()
                .map(|cfg| GtodoConfig::get_entry(&cfg).unwrap_or_else(|(_, cfg)| cfg))
                .unwrap_or_default();
            match config.storage_path() {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let parsed = match gtodo::store::read_records(&path) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== {} ===\n", path.display());
    for record in &parsed.records {
        let mark = if record.done { 'x' } else { ' ' };
        println!("[{}] {}", mark, record.text());
    }
    println!("\n{} items", parsed.records.len());

    for err in &parsed.errors {
        log::warn!("{}", gtodo::store::malformed_warning(&path, err));
        eprintln!("malformed: {err}");
    }

    ExitCode::SUCCESS
}
