use calmath_core::month::Quarter;
use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ViewShift {
    pub date: String,
    pub weekday: &'static str,
    pub week: u32,
    pub is_weekend: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewMonth {
    pub month: u32,
    pub year: i32,
    pub first_day: NaiveDate,
    pub days: u32,
    pub weekends: u32,
    pub quarter: Quarter,
    pub leap_year: bool,
}

pub fn display_schedule(shifts: &[ViewShift]) {
    if shifts.is_empty() {
        println!("No work blocks in period.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Start", "Weekday", "Week"]);

    for (index, shift) in shifts.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(index + 1));
        row.add_cell(Cell::new(&shift.date).add_attribute(Attribute::Bold));

        // Weekend starts stand out
        let weekday_cell = if shift.is_weekend {
            Cell::new(shift.weekday).fg(Color::Yellow)
        } else {
            Cell::new(shift.weekday)
        };
        row.add_cell(weekday_cell);
        row.add_cell(Cell::new(shift.week));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_month(month: &ViewMonth) {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(month.first_day.format("%B %Y")).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    table.add_row(vec![Cell::new("Days"), Cell::new(month.days)]);
    table.add_row(vec![Cell::new("Weekend days"), Cell::new(month.weekends)]);
    table.add_row(vec![Cell::new("Working days"), Cell::new(month.days - month.weekends)]);
    table.add_row(vec![Cell::new("Quarter"), Cell::new(month.quarter)]);

    let leap_cell = if month.leap_year {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no")
    };
    table.add_row(vec![Cell::new("Leap year"), leap_cell]);

    println!("{table}");
}
