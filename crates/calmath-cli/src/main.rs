use calmath_core::error::CalendarError;
use chrono::Utc;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing::warn;

mod cli;
mod commands;
mod config;
mod logging;
mod parser;
mod timezone;
mod views;

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);

    let config = config::Config::new().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable configuration");
        config::Config::default()
    });

    let tz_name = cli.timezone.as_deref().unwrap_or(&config.timezone);
    let tz = match timezone::resolve_timezone(tz_name) {
        Ok(tz) => tz,
        Err(e) => {
            handle_error(e.into());
            std::process::exit(1);
        }
    };

    let ctx = commands::Context {
        tz,
        json: cli.json,
        date_input: config.date_input,
        schedule: config.schedule,
        now: Utc::now(),
    };

    let result = match cli.command {
        cli::Commands::Timestamp(command) => commands::instant::timestamp(&ctx, command),
        cli::Commands::Time(command) => commands::instant::time(&ctx, command),
        cli::Commands::Format(command) => commands::instant::format(&ctx, command),
        cli::Commands::DayName(command) => commands::instant::day_name(&ctx, command),
        cli::Commands::DaysBetween(command) => commands::period::days_between(&ctx, command),
        cli::Commands::InPeriod(command) => commands::period::in_period(&ctx, command),
        cli::Commands::DaysInMonth(command) => commands::calendar::days_in_month(&ctx, command),
        cli::Commands::Weekends(command) => commands::calendar::weekends(&ctx, command),
        cli::Commands::Month(command) => commands::calendar::month(&ctx, command),
        cli::Commands::Quarter(command) => commands::calendar::quarter(&ctx, command),
        cli::Commands::LeapYear(command) => commands::calendar::leap_year(&ctx, command),
        cli::Commands::Week(command) => commands::calendar::week(&ctx, command),
        cli::Commands::NextFriday(command) => commands::friday::next_friday(&ctx, command),
        cli::Commands::NextFriday13th(command) => commands::friday::next_friday_13th(&ctx, command),
        cli::Commands::Schedule(command) => commands::schedule::schedule(&ctx, command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(calendar_error) = err.downcast_ref::<CalendarError>() {
        match calendar_error {
            CalendarError::InvalidDate { input, expected } => {
                eprintln!(
                    "{} Could not read '{}' as a date; expected {}",
                    "Error:".style(error_style),
                    input.yellow(),
                    expected
                );
            }
            CalendarError::InvalidSchedule { work_days, off_days } => {
                eprintln!(
                    "{} A rotation of {} work day(s) and {} off day(s) never advances",
                    "Error:".style(error_style),
                    work_days,
                    off_days
                );
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), calendar_error),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
