use std::io::{self, BufRead, Write};

use anyhow::Context;
use medbook_logic::LogicManager;
use medbook_storage::{BookStorage, JsonBookStorage};

mod config;

use config::AppConfig;

fn main() -> anyhow::Result<()> {
    medbook_observability::init(&AppConfig::log_filter_from_env());
    let config = AppConfig::from_env();
    tracing::info!(
        data_file = %config.data_file.display(),
        history_limit = config.history_limit,
        "starting medbook"
    );

    let storage = JsonBookStorage::new(&config.data_file);
    let mut logic = LogicManager::open(storage, config.history_limit).with_context(|| {
        format!("failed to load records from {}", config.data_file.display())
    })?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "medbook: type `help` for the list of commands.")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(line.trim_end()) {
            Ok(result) => {
                writeln!(stdout, "{}", result.feedback)?;
                if let Some(warning) = &result.save_warning {
                    writeln!(stdout, "Warning: {warning}")?;
                }
                if result.exit {
                    break;
                }
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }

    tracing::info!(
        data_file = %logic.storage().file_path().display(),
        "medbook stopped"
    );
    Ok(())
}
