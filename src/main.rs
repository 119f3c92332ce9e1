use clap::{Parser, Subcommand};
use std::path::PathBuf;

use smilestudio::{CalendarState, Catalog, Paginator, Tab, text};

#[derive(Parser)]
#[command(name = "smilestudio")]
#[command(about = "Clinic appointment booking demo")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file overriding the built-in clinic data
    #[arg(long, value_name = "FILE", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the booking window (default)
    Gui {
        /// Page shown at startup
        #[arg(long, value_enum, default_value_t = Tab::Services)]
        tab: Tab,

        /// Start with the sidebar collapsed
        #[arg(long)]
        collapsed: bool,
    },
    /// Print a month grid
    Calendar {
        #[arg(long, default_value_t = 2024)]
        year: i32,

        /// Month number, 1-12
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,

        /// Day of that month to mark as selected
        #[arg(long)]
        day: Option<u8>,
    },
    /// Print one page of the doctor directory
    Doctors {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print the day's time slots
    Slots,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "smilestudio=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let catalog = match &args.catalog {
        Some(path) => {
            log::info!("using catalog {}", path.display());
            Catalog::load(path)?
        }
        None => Catalog::default(),
    };

    match args.command.unwrap_or(Command::Gui {
        tab: Tab::default(),
        collapsed: false,
    }) {
        Command::Gui { tab, collapsed } => run_gui(catalog, tab, collapsed)?,
        Command::Calendar { year, month, day } => {
            let mut calendar = CalendarState::for_month(year, month - 1)?;
            if let Some(day) = day {
                let date = time::Date::from_calendar_date(year, time::Month::try_from(month)?, day)?;
                calendar = calendar.with_selected(date);
            }
            print!("{}", text::month(&calendar));
        }
        Command::Doctors { page } => {
            let doctors = catalog.doctors();
            let mut paginator = Paginator::new(doctors.len(), catalog.page_size);
            paginator.go_to(page);
            print!("{}", text::doctors_page(&doctors, &paginator));
        }
        Command::Slots => print!("{}", text::slots(&catalog.slot_selector())),
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(catalog: Catalog, tab: Tab, collapsed: bool) -> anyhow::Result<()> {
    let state = smilestudio::gui::AppState::new(catalog, tab, collapsed);
    smilestudio::gui::run(state)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_catalog: Catalog, _tab: Tab, _collapsed: bool) -> anyhow::Result<()> {
    anyhow::bail!("this build has no GUI; rebuild with the `gui` feature")
}
