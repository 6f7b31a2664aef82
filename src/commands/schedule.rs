use crate::db::db::Storage;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::schedule::Schedule;
use crate::libs::view::View;
use crate::libs::week::Week;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[arg(long, short, default_value = "today", help = "Any date of the week to show (YYYY-MM-DD or 'today')")]
    date: String,
}

pub fn cmd(args: ScheduleArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let week = Week::containing(date).ok_or_else(|| msg_error_anyhow!(Message::WeekOutOfRange(date)))?;

    let storage = Storage::new(Config::read()?.with_env().database_path()?);
    storage.init()?;
    let shifts = Schedule::open(&storage)?.week_schedule(date)?;

    View::week(&week, &shifts);
    Ok(())
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}
