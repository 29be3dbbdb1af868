use anyhow::Result;
use calmath_core::format::{date_to_timestamp, format_date, get_day_name, get_time};
use calmath_core::timezone::{get_timezone_abbreviation, get_timezone_offset};
use serde_json::json;

use super::{invalid_instant, Context};
use crate::cli::{DateArg, OptionalDateArg};
use crate::parser::canonical;
use crate::views::{print_json, print_value};

pub fn timestamp(ctx: &Context, command: DateArg) -> Result<()> {
    let instant = ctx.date(&command.date)?;
    let millis = date_to_timestamp(&canonical(&instant)).ok_or_else(|| invalid_instant(&command.date))?;
    print_value(ctx.json, "timestamp", &millis)
}

pub fn time(ctx: &Context, command: OptionalDateArg) -> Result<()> {
    let instant = ctx.date_or_now(command.date.as_deref())?;
    let time = get_time(&instant, &ctx.tz);
    let abbreviation = get_timezone_abbreviation(&ctx.tz, instant);
    let offset = get_timezone_offset(&ctx.tz, instant);

    if ctx.json {
        print_json(&json!({
            "time": time,
            "timezone": ctx.tz.name(),
            "offset": offset,
        }))
    } else {
        println!("{time} {abbreviation} ({offset})");
        Ok(())
    }
}

pub fn format(ctx: &Context, command: DateArg) -> Result<()> {
    let instant = ctx.date(&command.date)?;
    let formatted = format_date(&canonical(&instant)).ok_or_else(|| invalid_instant(&command.date))?;
    print_value(ctx.json, "formatted", &formatted)
}

pub fn day_name(ctx: &Context, command: DateArg) -> Result<()> {
    let instant = ctx.date(&command.date)?;
    let name = get_day_name(&canonical(&instant), &ctx.tz).ok_or_else(|| invalid_instant(&command.date))?;
    print_value(ctx.json, "day", &name)
}
