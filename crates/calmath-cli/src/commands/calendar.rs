use anyhow::Result;
use calmath_core::month::{
    get_count_days_in_month, get_count_weekends_in_month, get_quarter, is_leap, is_leap_year, Quarter,
};
use calmath_core::week::get_week_number_by_date;
use chrono::NaiveDate;
use tracing::info;

use super::Context;
use crate::cli::{DateArg, LeapYearCommand, MonthArg};
use crate::views::table::{display_month, ViewMonth};
use crate::views::{print_json, print_value};

pub fn days_in_month(ctx: &Context, command: MonthArg) -> Result<()> {
    let days = get_count_days_in_month(command.month, command.year)?;
    print_value(ctx.json, "days", &days)
}

pub fn weekends(ctx: &Context, command: MonthArg) -> Result<()> {
    let weekends = get_count_weekends_in_month(command.month, command.year)?;
    print_value(ctx.json, "weekends", &weekends)
}

pub fn month(ctx: &Context, command: MonthArg) -> Result<()> {
    let days = get_count_days_in_month(command.month, command.year)?;
    let weekends = get_count_weekends_in_month(command.month, command.year)?;
    let quarter = Quarter::from_month(command.month)?;
    let first_day = NaiveDate::from_ymd_opt(command.year, command.month, 1)
        .ok_or_else(|| anyhow::anyhow!("{}-{} is out of range", command.year, command.month))?;

    let view = ViewMonth {
        month: command.month,
        year: command.year,
        first_day,
        days,
        weekends,
        quarter,
        leap_year: is_leap(command.year),
    };

    if ctx.json {
        print_json(&view)
    } else {
        display_month(&view);
        Ok(())
    }
}

pub fn quarter(ctx: &Context, command: DateArg) -> Result<()> {
    let local = ctx.date(&command.date)?.with_timezone(&ctx.tz);
    let quarter = get_quarter(&local);
    if ctx.json {
        print_value(true, "quarter", &quarter.number())
    } else {
        println!("{quarter}");
        Ok(())
    }
}

pub fn leap_year(ctx: &Context, command: LeapYearCommand) -> Result<()> {
    let leap = match command.year_or_date.trim().parse::<i32>() {
        Ok(year) => is_leap(year),
        Err(_) => {
            let local = ctx.date(&command.year_or_date)?.with_timezone(&ctx.tz);
            info!(date = %local, "checking year of date");
            is_leap_year(&local)
        }
    };
    print_value(ctx.json, "leap_year", &leap)
}

pub fn week(ctx: &Context, command: DateArg) -> Result<()> {
    let local = ctx.date(&command.date)?.with_timezone(&ctx.tz);
    let week = get_week_number_by_date(&local);
    print_value(ctx.json, "week", &week)
}
