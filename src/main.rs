use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use rangestats::config::{self, Config};
use rangestats::dialog::{self, StatsDialog};
use rangestats::model::Chart;
use rangestats::report::{self, Labels, OutputFormat};
use rangestats::stats::{ResolvedStat, StatsResolver};
use rangestats::storage::JsonFileStore;

/// Rank the ranges a chart uses most
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Show the most used ranges referenced by a chart"
)]
struct Args {
    /// Chart JSON file to analyse
    chart: PathBuf,

    /// Catalog JSON file (defaults to config, then the data directory)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Usage table JSON file (defaults to config, then the data directory)
    #[arg(long)]
    usage: Option<PathBuf>,

    /// Output format (defaults to config, then the interactive dialog)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also list ranges that have never been used
    #[arg(long)]
    show_zero: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/rangestats-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/rangestats-debug.log")
            .expect("Failed to open /tmp/rangestats-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== RANGESTATS DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();
    let args = Args::parse();

    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }
    let config = config_result.config;

    let chart = Chart::load(&args.chart)?;
    let store = store_for(&args, &config);
    let stats = StatsResolver::analyze(&chart, &store, &store);

    let hide_zero = config.display.hide_zero_counts && !args.show_zero;
    let visible = report::visible_stats(&stats, hide_zero);
    let labels = Labels::from_config(&config.display);

    match args.format.unwrap_or(config.display.format) {
        OutputFormat::Plain => {
            report::write_plain(&mut stdout().lock(), &chart.name, &visible, &labels)?;
        }
        OutputFormat::Json => {
            report::write_json(&mut stdout().lock(), &visible)?;
        }
        OutputFormat::Dialog => {
            let entries: Vec<ResolvedStat> = visible.into_iter().cloned().collect();
            show_dialog(StatsDialog::new(chart.name.clone(), entries), &labels)?;
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("=== RANGESTATS DEBUG SESSION ENDED ===");

    Ok(())
}

/// Command-line paths win over config, config wins over the data directory
fn store_for(args: &Args, config: &Config) -> JsonFileStore {
    let defaults = JsonFileStore::from_config(&config.storage);
    JsonFileStore::new(
        args.catalog
            .clone()
            .or_else(|| defaults.catalog_path().map(PathBuf::from)),
        args.usage
            .clone()
            .or_else(|| defaults.usage_path().map(PathBuf::from)),
    )
}

fn show_dialog(mut stats_dialog: StatsDialog, labels: &Labels) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = dialog::run_dialog(&mut terminal, &mut stats_dialog, labels);
    restore_terminal()?;
    result?;
    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}
