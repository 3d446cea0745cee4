//! htgrid - interactive viewer for static HTML tables.
//!
//! Loads an HTML document, extracts every `<table>`, and presents each one
//! as an independent searchable, sortable, paginated grid.
//!
//! Usage:
//!   htgrid tables.html                 # default options, English UI
//!   htgrid tables.html --locale it     # Italian UI strings
//!   htgrid tables.html --no-search     # hide the search box
//!   htgrid tables.html --dump          # print view models as JSON and exit

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use htgrid::config::GridOptions;
use htgrid::extract::load_file;
use htgrid::grid::Grid;
use htgrid::tui::App;

/// Interactive viewer for static HTML tables.
#[derive(Parser)]
#[command(name = "htgrid", about = "Interactive viewer for static HTML tables", version)]
struct Args {
    /// HTML document to load.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// UI language code (en, it, de, fr, es).
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Initial rows per page. Must be one of the selectable sizes.
    #[arg(long, default_value_t = 10, value_name = "N")]
    page_size: usize,

    /// Selectable page sizes, comma separated.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [10, 20, 30, 40, 50],
        value_name = "N,N,..."
    )]
    page_sizes: Vec<usize>,

    /// Disable the search box.
    #[arg(long)]
    no_search: bool,

    /// Pagination window radius (numbered controls either side of the
    /// current page).
    #[arg(long, default_value_t = 2, value_name = "N")]
    radius: usize,

    /// Print every table's initial view model as JSON and exit.
    #[arg(long)]
    dump: bool,

    /// Write logs to this file. Without it the TUI runs silently, since the
    /// terminal belongs to the alternate screen.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initializes the tracing subscriber. Logs go to the given file, or to
/// stderr in `--dump` mode where the terminal stays ours.
fn init_logging(verbose: u8, log_file: Option<&PathBuf>, dump: bool) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("htgrid={}", level).parse().unwrap());

    match log_file {
        Some(path) => {
            let file = match std::fs::File::create(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Error opening log file '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .init();
        }
        None if dump => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        None => {}
    }
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.log_file.as_ref(), args.dump);

    let tables = match load_file(&args.file) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Error loading '{}': {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    let options = GridOptions {
        search: !args.no_search,
        locale: args.locale.clone(),
        page_size: args.page_size,
        page_sizes: args.page_sizes.clone(),
        window_radius: args.radius,
    };

    let mut grids = Vec::with_capacity(tables.len());
    for table in tables {
        match Grid::new(table, options.clone()) {
            Ok(grid) => grids.push(grid),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    info!(
        "loaded {} table(s) from '{}'",
        grids.len(),
        args.file.display()
    );

    if args.dump {
        let views: Vec<_> = grids.iter().map(|g| g.view()).collect();
        match serde_json::to_string_pretty(&views) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing views: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let app = App::new(grids);
    if let Err(e) = app.run(Duration::from_millis(250)) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
