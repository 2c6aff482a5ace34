//! Appointment calendar: visible appointments bucketed by day.

use chrono::{NaiveDate, NaiveTime};
use std::cmp::Ordering;

use crate::controller::ListAction;
use crate::entity::Appointment;
use crate::view::{ViewMode, ViewRenderer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an appointment time against each format in turn.
pub fn parse_time(raw: &str, formats: &[String]) -> Option<NaiveTime> {
    let raw = raw.trim();
    formats
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

// Parsed values first, in value order; unparseable ones after, by raw text.
fn compare_parsed<T: Ord>(a: (Option<T>, &str), b: (Option<T>, &str)) -> Ordering {
    match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.1.cmp(b.1)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.1.cmp(b.1),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry<'a> {
    pub appointment: &'a Appointment,
    pub time: Option<NaiveTime>,
    pub actions: Vec<ListAction>,
}

/// All appointments sharing one date string.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: String,
    pub parsed_date: Option<NaiveDate>,
    pub entries: Vec<CalendarEntry<'a>>,
}

impl CalendarDay<'_> {
    /// Header text, e.g. `Saturday, January 20, 2024`.
    pub fn heading(&self) -> String {
        match self.parsed_date {
            Some(date) => date.format("%A, %B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    pub fn summary(&self) -> String {
        let n = self.entries.len();
        format!("{n} appointment{}", if n == 1 { "" } else { "s" })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendarView<'a> {
    pub days: Vec<CalendarDay<'a>>,
}

impl CalendarView<'_> {
    /// True when nothing matched; the page shows its empty state.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Buckets appointments by exact date string, orders the buckets by date
/// and each bucket by time of day. Equal keys keep their input order.
pub fn group_by_date<'a, I>(appointments: I, time_formats: &[String]) -> Vec<CalendarDay<'a>>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut days: Vec<CalendarDay<'a>> = Vec::new();
    for appointment in appointments {
        let entry = CalendarEntry {
            appointment,
            time: parse_time(&appointment.time, time_formats),
            actions: vec![ListAction::Edit(appointment.id)],
        };
        match days.iter_mut().find(|day| day.date == appointment.date) {
            Some(day) => day.entries.push(entry),
            None => days.push(CalendarDay {
                date: appointment.date.clone(),
                parsed_date: parse_date(&appointment.date),
                entries: vec![entry],
            }),
        }
    }

    days.sort_by(|a, b| {
        compare_parsed(
            (a.parsed_date, a.date.as_str()),
            (b.parsed_date, b.date.as_str()),
        )
    });
    for day in &mut days {
        day.entries.sort_by(|a, b| {
            compare_parsed(
                (a.time, a.appointment.time.as_str()),
                (b.time, b.appointment.time.as_str()),
            )
        });
    }
    days
}

/// Renders the calendar layout of the appointments page.
#[derive(Debug, Clone)]
pub struct CalendarRenderer {
    time_formats: Vec<String>,
}

impl CalendarRenderer {
    pub fn new(time_formats: Vec<String>) -> Self {
        Self { time_formats }
    }
}

impl<'a> ViewRenderer<'a, Appointment> for CalendarRenderer {
    type Output = CalendarView<'a>;

    fn mode(&self) -> ViewMode {
        ViewMode::Calendar
    }

    fn render(&self, visible: &[&'a Appointment]) -> CalendarView<'a> {
        CalendarView {
            days: group_by_date(visible.iter().copied(), &self.time_formats),
        }
    }
}
