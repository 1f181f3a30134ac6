use std::path::PathBuf;

use anyhow::Context;
use astrocal_core::config::Config;
use astrocal_core::{DateKey, DayIndex, MonthCursor};
use clap::Parser;

#[derive(Parser)]
#[command(name = "astrocal", about = "Year-almanac calendar — load all sources, inspect the day index")]
struct Cli {
    /// Write debug logs to /tmp/astrocal-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file path (defaults to ~/.config/astrocal/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Month to summarize, as YYYY-MM (defaults to the configured start month).
    #[arg(long)]
    month: Option<String>,

    /// Print one day's detail instead of a month summary, as YYYY-MM-DD.
    #[arg(long)]
    day: Option<String>,

    /// Dump the whole merged index as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/astrocal-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("astrocal debug log started — tail -f /tmp/astrocal-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let client = reqwest::Client::new();
    let index = astrocal_feeds::load_day_index(&client, &config.sources)
        .await
        .context("loading calendar data")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    if let Some(raw) = cli.day.as_deref() {
        let day = DateKey::parse_iso(raw)
            .with_context(|| format!("--day expects YYYY-MM-DD, got {raw:?}"))?;
        print_day(&index, &day);
        return Ok(());
    }

    let raw_month = cli.month.as_deref().unwrap_or(&config.calendar.start_month);
    let cursor = MonthCursor::parse(raw_month)
        .with_context(|| format!("--month expects YYYY-MM, got {raw_month:?}"))?
        .clamp_to_year(config.calendar.year);
    print_month(&index, cursor);
    Ok(())
}

fn print_day(index: &DayIndex, day: &DateKey) {
    println!("{day}");

    if let Some(name) = index.holiday_on(day) {
        println!("  holiday: {name}");
    }

    let moon = index
        .almanac_for(day)
        .and_then(|info| info.moon.as_ref())
        .map(|moon| {
            let phase = moon.phase.as_deref().unwrap_or("");
            match moon.illumination_percent {
                Some(pct) => format!("{phase} ({pct}%)"),
                None => phase.to_string(),
            }
        })
        .unwrap_or_else(|| "—".to_string());
    println!("  moon: {moon}");

    for entry in index.special_on(day) {
        let label = if entry.title.is_empty() { &entry.code } else { &entry.title };
        match entry.time.as_str() {
            "" => println!("  special: {label}"),
            time => println!("  special: {label} — {time}"),
        }
    }

    for event in index.events_on(day) {
        match event.location.as_str() {
            "" => println!("  activity: {}", event.title),
            location => println!("  activity: {} — {location}", event.title),
        }
    }
}

fn print_month(index: &DayIndex, cursor: MonthCursor) {
    match index.photo_for(&cursor.month_key()) {
        Some(photo) if !photo.author.is_empty() => {
            println!("{cursor}  photo: {} — {}", photo.title, photo.author);
        }
        Some(photo) => println!("{cursor}  photo: {}", photo.title),
        None => println!("{cursor}"),
    }

    for day_number in 1..=cursor.days_in_month() {
        let Some(day) = cursor.day(day_number) else { continue };
        let specials = index.special_on(&day).len();
        let events = index.events_on(&day).len();
        let holiday = index.holiday_on(&day).is_some();
        if specials == 0 && events == 0 && !holiday {
            continue;
        }
        let mut markers = Vec::new();
        if holiday {
            markers.push("holiday".to_string());
        }
        if specials > 0 {
            markers.push(format!("{specials} special"));
        }
        if events > 0 {
            markers.push(format!("{events} activities"));
        }
        println!("  {day}: {}", markers.join(", "));
    }
}
