use clap::{Args, Parser, Subcommand};

/// Calendar arithmetic from the command line
#[derive(Parser, Debug)]
#[command(name = "calmath", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Timezone used for local views and offset-less input (IANA name)
    #[arg(long, global = true)]
    pub timezone: Option<String>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Milliseconds since the Unix epoch
    Timestamp(DateArg),
    /// Local time of day as HH:MM:SS
    Time(OptionalDateArg),
    /// Format a date as M/D/YYYY, h:mm:ss AM|PM (UTC)
    Format(DateArg),
    /// Weekday name of a date
    DayName(DateArg),
    /// Inclusive number of days between two dates
    DaysBetween(RangeCommand),
    /// Check whether a date lies within a period (inclusive)
    InPeriod(InPeriodCommand),
    /// Number of days in a month
    DaysInMonth(MonthArg),
    /// Number of Saturdays and Sundays in a month
    Weekends(MonthArg),
    /// Summary of a month
    Month(MonthArg),
    /// Quarter of a date
    Quarter(DateArg),
    /// Check whether a year (or the year of a date) is a leap year
    LeapYear(LeapYearCommand),
    /// Week number of a date
    Week(DateArg),
    /// The next Friday after a date
    NextFriday(OptionalDateArg),
    /// The next Friday the 13th
    #[command(name = "next-friday-13th")]
    NextFriday13th(OptionalDateArg),
    /// Work-block start dates for a rotation schedule
    Schedule(ScheduleCommand),
}

#[derive(Args, Debug, Clone)]
pub struct DateArg {
    /// Date (ISO 8601, or natural language such as "next monday")
    pub date: String,
}

#[derive(Args, Debug, Clone)]
pub struct OptionalDateArg {
    /// Date (defaults to now)
    pub date: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RangeCommand {
    /// First day of the period
    pub start: String,
    /// Last day of the period
    pub end: String,
}

#[derive(Args, Debug, Clone)]
pub struct InPeriodCommand {
    /// Date to check
    pub date: String,
    /// First day of the period
    pub start: String,
    /// Last day of the period
    pub end: String,
}

#[derive(Args, Debug, Clone)]
pub struct MonthArg {
    /// Month number (1-12)
    pub month: u32,
    /// Year
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

#[derive(Args, Debug, Clone)]
pub struct LeapYearCommand {
    /// A year, or a date whose year is checked
    pub year_or_date: String,
}

#[derive(Args, Debug, Clone)]
pub struct ScheduleCommand {
    /// First day of the period (DD-MM-YYYY)
    pub start: String,
    /// Last day of the period (DD-MM-YYYY)
    pub end: String,
    /// Consecutive work days per cycle
    #[arg(short, long)]
    pub work: Option<u32>,
    /// Consecutive days off per cycle
    #[arg(short, long)]
    pub off: Option<u32>,
}
