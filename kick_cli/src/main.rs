use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use kick_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kick")]
#[command(about = "Habit kicking tracker with streak and resistance statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Evaluate statistics as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start tracking a new habit
    Add {
        name: String,

        /// Habit description
        #[arg(long, default_value = "")]
        descr: String,

        /// Tracking granularity (daily, weekly, monthly)
        #[arg(long)]
        periodicity: String,

        /// Start tracking from this date instead of today
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// List tracked habits
    List,

    /// Show check-off history and statistics for one habit
    Show { name: String },

    /// Mark a habit as done (a guilty check-off)
    Done {
        name: String,

        /// Check-off date (defaults to today); earlier dates widen the
        /// tracking window
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Aggregate statistics across all habits
    Report {
        #[arg(value_enum, default_value = "all")]
        kind: ReportKind,

        /// Restrict to one periodicity (daily, weekly, monthly)
        #[arg(long)]
        periodicity: Option<String>,
    },

    /// Stop tracking a habit
    Delete { name: String },

    /// Insert the built-in sample habits
    Seed,

    /// Export the statistics table to CSV
    Export {
        /// Output file (defaults to stats.csv in the data directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportKind {
    /// The full statistics table
    All,
    /// Habit(s) with the longest-run current streak
    Current,
    /// Habit(s) with the longest historical streak
    Longest,
    /// Lowest and highest average streak
    Average,
    /// Lowest and highest resistance ratio
    Resistance,
}

fn main() -> Result<()> {
    kick_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!("Using data directory {:?}", data_dir);

    match cli.command {
        Commands::Add {
            name,
            descr,
            periodicity,
            start_date,
        } => cmd_add(&data_dir, &name, &descr, &periodicity, start_date, today),
        Commands::List => cmd_list(&data_dir),
        Commands::Show { name } => cmd_show(&data_dir, &name, today),
        Commands::Done { name, date } => cmd_done(&data_dir, &name, date, today),
        Commands::Report { kind, periodicity } => {
            cmd_report(&data_dir, kind, periodicity.as_deref(), today)
        }
        Commands::Delete { name } => cmd_delete(&data_dir, &name),
        Commands::Seed => cmd_seed(&data_dir),
        Commands::Export { output } => cmd_export(&data_dir, output, today),
    }
}

fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join(store::STORE_FILE)
}

fn cmd_add(
    data_dir: &Path,
    name: &str,
    descr: &str,
    periodicity: &str,
    start_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<()> {
    let periodicity = Periodicity::parse(periodicity)?;
    let start = start_date.unwrap_or(today);

    let mut added = false;
    HabitStore::update(&store_path(data_dir), |store| {
        added = store.add(HabitRecord::new(name, descr, periodicity, start));
        Ok(())
    })?;

    if added {
        println!(
            "Now tracking \"{}\" ({}, recording from {}).",
            name, periodicity, start
        );
    } else {
        println!("Habit with name '{}' already exists. Skipping insertion.", name);
    }
    Ok(())
}

fn cmd_list(data_dir: &Path) -> Result<()> {
    let store = HabitStore::load(&store_path(data_dir))?;

    if store.is_empty() {
        println!("No habits tracked yet.");
        return Ok(());
    }

    println!("Tracked habits:");
    for record in store.records() {
        println!(
            "  {:<24} {:<8} recording from {}",
            record.name, record.periodicity, record.tracking_start
        );
    }
    Ok(())
}

fn cmd_show(data_dir: &Path, name: &str, today: NaiveDate) -> Result<()> {
    let store = HabitStore::load(&store_path(data_dir))?;
    let record = store
        .get(name)
        .ok_or_else(|| Error::Other(format!("no habit named '{}'", name)))?;

    let dates: Vec<String> = record.check_offs.all().map(|d| d.to_string()).collect();
    if dates.is_empty() {
        println!("No check-off dates yet. Innocent so far.");
    } else {
        println!("Check-off dates: {}", dates.join(", "));
    }

    display_statistics(record, &record.compute_statistics(today));
    Ok(())
}

fn cmd_done(
    data_dir: &Path,
    name: &str,
    date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<()> {
    let mark_date = date.unwrap_or(today);

    let mut newly_marked = false;
    HabitStore::update(&store_path(data_dir), |store| {
        let record = store
            .get_mut(name)
            .ok_or_else(|| Error::Other(format!("no habit named '{}'", name)))?;
        newly_marked = record.mark_complete(mark_date, today);
        Ok(())
    })?;

    if newly_marked {
        println!("Habit '{}' has been sadly marked done for {}.", name, mark_date);
    } else {
        println!(
            "The period containing {} was already marked for habit '{}'. Skipping insertion.",
            mark_date, name
        );
    }
    Ok(())
}

fn cmd_report(
    data_dir: &Path,
    kind: ReportKind,
    periodicity: Option<&str>,
    today: NaiveDate,
) -> Result<()> {
    let store = HabitStore::load(&store_path(data_dir))?;
    let mut records: Vec<HabitRecord> = store.records().cloned().collect();

    if let Some(p) = periodicity {
        let p = Periodicity::parse(p)?;
        records.retain(|r| r.periodicity == p);
    }

    if records.is_empty() {
        println!("No habits found.");
        return Ok(());
    }

    match kind {
        ReportKind::All => {
            println!("All habits tracked:");
            for row in report::all_statistics(&records, today) {
                print_row(&row);
            }
        }
        ReportKind::Current => {
            println!("Longest-run current streak:");
            for row in report::longest_current_streak(&records, today) {
                println!("  {:<24} current streak {}", row.name, row.statistics.current_streak);
            }
        }
        ReportKind::Longest => {
            println!("Longest-run historical streak:");
            for row in report::longest_historical_streak(&records, today) {
                println!("  {:<24} longest streak {}", row.name, row.statistics.longest_streak);
            }
        }
        ReportKind::Average => {
            if let Some((lowest, highest)) = report::average_streak_extremes(&records, today) {
                println!("Shortest and longest average streak:");
                println!(
                    "  Lowest   {:<24} average streak {:.2}",
                    lowest.name, lowest.statistics.average_streak
                );
                println!(
                    "  Largest  {:<24} average streak {:.2}",
                    highest.name, highest.statistics.average_streak
                );
            }
        }
        ReportKind::Resistance => {
            if let Some((lowest, highest)) = report::resistance_ratio_extremes(&records, today) {
                println!("Lowest and highest resistance ratio:");
                println!(
                    "  Lowest   {:<24} resistance ratio {}",
                    lowest.name, lowest.statistics.resistance_ratio
                );
                println!(
                    "  Highest  {:<24} resistance ratio {}",
                    highest.name, highest.statistics.resistance_ratio
                );
            }
        }
    }
    Ok(())
}

fn cmd_delete(data_dir: &Path, name: &str) -> Result<()> {
    HabitStore::update(&store_path(data_dir), |store| {
        store
            .remove(name)
            .ok_or_else(|| Error::Other(format!("no habit named '{}'", name)))?;
        Ok(())
    })?;

    println!("Habit '{}' has been successfully deleted.", name);
    Ok(())
}

fn cmd_seed(data_dir: &Path) -> Result<()> {
    let mut inserted = 0;
    HabitStore::update(&store_path(data_dir), |store| {
        inserted = seed_store(store);
        Ok(())
    })?;

    if inserted > 0 {
        println!("✓ Seeded {} sample habits", inserted);
    } else {
        println!("Sample habits already present - nothing to do.");
    }
    Ok(())
}

fn cmd_export(data_dir: &Path, output: Option<PathBuf>, today: NaiveDate) -> Result<()> {
    let store = HabitStore::load(&store_path(data_dir))?;
    let records: Vec<HabitRecord> = store.records().cloned().collect();
    let rows = report::all_statistics(&records, today);

    let csv_path = output.unwrap_or_else(|| data_dir.join("stats.csv"));
    let count = write_statistics_csv(&csv_path, &rows)?;

    println!("✓ Exported statistics for {} habits", count);
    println!("  CSV: {}", csv_path.display());
    Ok(())
}

fn display_statistics(record: &HabitRecord, stats: &Statistics) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", record.name.to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!();
    if !record.descr.is_empty() {
        println!("  {}", record.descr);
        println!();
    }
    println!("  Recording from: {}", record.tracking_start.format("%Y/%m/%d"));
    println!("  Periodicity:    {}", record.periodicity);
    println!();
    println!("  Current streak:             {}", stats.current_streak);
    println!("  Total periods of guilt:     {}", stats.total_completed);
    println!("  Total periods of innocence: {}", stats.total_resisted);
    println!("  Resistance ratio:           {}", stats.resistance_ratio);
    println!("  Longest streak:             {}", stats.longest_streak);
    println!("  Average streak:             {:.2}", stats.average_streak);
    println!();
}

fn print_row(row: &StatisticsRow) {
    println!(
        "  {:<24} {:<8} from {}  current {:>3}  guilt {:>4}  innocence {:>4}  ratio {:>8}  longest {:>3}  average {:>6.2}",
        row.name,
        row.periodicity,
        row.tracking_start,
        row.statistics.current_streak,
        row.statistics.total_completed,
        row.statistics.total_resisted,
        row.statistics.resistance_ratio,
        row.statistics.longest_streak,
        row.statistics.average_streak
    );
}
