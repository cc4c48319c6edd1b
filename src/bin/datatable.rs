/// DataTable host
///
/// Loads a JSON dataset, then reads renderer events as JSON lines on stdin
/// and writes one JSON snapshot line per interaction on stdout.

use clap::Parser;
use datatable::{Dataset, JsonLinesRenderer, RenderMessage, TableConfig, TableEvent, TableState};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "datatable", version, about = "Interactive table view engine")]
struct Args {
    /// JSON file holding an array of records, each with an integer `id`
    dataset: PathBuf,

    /// Track a checkbox selection
    #[arg(long, env = "DATATABLE_SELECTABLE")]
    selectable: bool,

    /// Field the search box filters on initially
    #[arg(long, env = "DATATABLE_FILTER_FIELD")]
    filter_field: Option<String>,
}

impl Args {
    fn table_config(&self) -> TableConfig {
        TableConfig {
            selectable: self.selectable,
            filter_field: self.filter_field.clone(),
        }
    }
}

fn main() -> ExitCode {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();

    let dataset = match Dataset::from_path(&args.dataset) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("{}: {}", args.dataset.display(), e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded {} records from {}", dataset.len(), args.dataset.display());

    let mut table = TableState::new(dataset, args.table_config());
    let mut out = JsonLinesRenderer::new(std::io::stdout().lock());
    table.refresh_into(&mut out);

    for (line_no, line) in std::io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match TableEvent::from_json(&line) {
            Ok(event) => {
                table.dispatch(event);
                table.refresh_into(&mut out);
            }
            Err(e) => {
                log::warn!("line {}: {}", line_no + 1, e);
                out.write_message(&RenderMessage::Error {
                    message: format!("line {}: {}", line_no + 1, e),
                });
            }
        }
    }

    if out.failures() > 0 {
        log::error!("{} messages could not be written", out.failures());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
