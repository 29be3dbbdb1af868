use anyhow::{anyhow, Result};
use calmath_core::week::{get_next_friday, get_next_friday_the_13th};
use chrono::{DateTime, SecondsFormat};
use chrono_humanize::{Accuracy, HumanTime, Tense};
use chrono_tz::Tz;
use serde_json::json;

use super::Context;
use crate::cli::OptionalDateArg;
use crate::views::print_json;

pub fn next_friday(ctx: &Context, command: OptionalDateArg) -> Result<()> {
    let from = ctx.date_or_now(command.date.as_deref())?.with_timezone(&ctx.tz);
    let found = get_next_friday(&from)
        .ok_or_else(|| anyhow!("No Friday after {} within the supported date range", from))?;
    report(ctx, &from, &found)
}

pub fn next_friday_13th(ctx: &Context, command: OptionalDateArg) -> Result<()> {
    let from = ctx.date_or_now(command.date.as_deref())?.with_timezone(&ctx.tz);
    let found = get_next_friday_the_13th(&from)
        .ok_or_else(|| anyhow!("No Friday the 13th after {} within the supported date range", from))?;
    report(ctx, &from, &found)
}

fn report(ctx: &Context, from: &DateTime<Tz>, found: &DateTime<Tz>) -> Result<()> {
    let days_ahead = found.date_naive().signed_duration_since(from.date_naive()).num_days();

    if ctx.json {
        return print_json(&json!({
            "date": found.to_rfc3339_opts(SecondsFormat::Secs, false),
            "days_ahead": days_ahead,
        }));
    }

    let relative = if days_ahead == 0 {
        "today".to_string()
    } else {
        HumanTime::from(found.clone() - from.clone()).to_text_en(Accuracy::Precise, Tense::Future)
    };
    println!("{} ({})", found.format("%A %Y-%m-%d %H:%M:%S %Z"), relative);
    Ok(())
}
