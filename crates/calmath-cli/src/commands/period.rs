use anyhow::Result;
use calmath_core::period::{get_count_days_on_period, is_date_in_period, DatePeriod};

use super::{invalid_instant, Context};
use crate::cli::{InPeriodCommand, RangeCommand};
use crate::parser::canonical;
use crate::views::print_value;

pub fn days_between(ctx: &Context, command: RangeCommand) -> Result<()> {
    let start = canonical(&ctx.date(&command.start)?);
    let end = canonical(&ctx.date(&command.end)?);

    let days = get_count_days_on_period(&start, &end).ok_or_else(|| invalid_instant(&command.start))?;
    print_value(ctx.json, "days", &days)
}

pub fn in_period(ctx: &Context, command: InPeriodCommand) -> Result<()> {
    let date = canonical(&ctx.date(&command.date)?);
    let start = canonical(&ctx.date(&command.start)?);
    let end = canonical(&ctx.date(&command.end)?);

    let inside = is_date_in_period(&date, DatePeriod::new(start.as_str(), end.as_str()))
        .ok_or_else(|| invalid_instant(&command.date))?;
    print_value(ctx.json, "in_period", &inside)
}
