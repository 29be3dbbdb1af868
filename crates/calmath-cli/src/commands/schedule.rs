use anyhow::Result;
use calmath_core::instant::day_name;
use calmath_core::period::DatePeriod;
use calmath_core::schedule::{format_dmy, WorkSchedulePattern};
use calmath_core::week::get_week_number_by_date;
use chrono::{Datelike, Weekday};
use tracing::info;

use super::Context;
use crate::cli::ScheduleCommand;
use crate::views::print_json;
use crate::views::table::{display_schedule, ViewShift};

pub fn schedule(ctx: &Context, command: ScheduleCommand) -> Result<()> {
    let work_days = command.work.unwrap_or(ctx.schedule.work_days);
    let off_days = command.off.unwrap_or(ctx.schedule.off_days);

    let period = DatePeriod::new(command.start.as_str(), command.end.as_str()).parse_dmy()?;
    let pattern = WorkSchedulePattern::new(work_days, off_days)?;
    info!(work_days, off_days, start = %period.start, end = %period.end, "building work schedule");

    let shifts: Vec<ViewShift> = pattern
        .dates(&period)
        .into_iter()
        .map(|date| ViewShift {
            date: format_dmy(date),
            weekday: day_name(date.weekday()),
            week: get_week_number_by_date(&date),
            is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        })
        .collect();

    if ctx.json {
        let dates: Vec<&str> = shifts.iter().map(|shift| shift.date.as_str()).collect();
        print_json(&dates)
    } else {
        display_schedule(&shifts);
        Ok(())
    }
}
