mod common;

use chrono::NaiveTime;
use marble_admin::calendar::parse_time;
use marble_admin::entity::{Appointment, AppointmentStatus};
use marble_admin::{group_by_date, CalendarRenderer, DashboardConfig, ListAction, ViewRenderer};

use common::appointment;

fn formats() -> Vec<String> {
    DashboardConfig::default().calendar_time_formats
}

#[test]
fn test_days_are_ordered_by_date() {
    let appointments = vec![
        appointment(1, "A", "2024-01-22", "10:00 AM", AppointmentStatus::Pending),
        appointment(2, "B", "2024-01-18", "10:00 AM", AppointmentStatus::Pending),
        appointment(3, "C", "2024-01-20", "10:00 AM", AppointmentStatus::Pending),
    ];
    let days = group_by_date(&appointments, &formats());
    let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-18", "2024-01-20", "2024-01-22"]);
}

#[test]
fn test_same_day_grouped_and_ordered_by_parsed_time() {
    let appointments = vec![
        appointment(1, "Afternoon", "2024-01-20", "2:00 PM", AppointmentStatus::Pending),
        appointment(2, "Morning", "2024-01-20", "10:00 AM", AppointmentStatus::Pending),
        appointment(3, "Noon", "2024-01-20", "12:15", AppointmentStatus::Pending),
        appointment(4, "Other day", "2024-01-21", "9:00 AM", AppointmentStatus::Pending),
    ];
    let days = group_by_date(&appointments, &formats());
    assert_eq!(days.len(), 2);

    let order: Vec<u64> = days[0].entries.iter().map(|e| e.appointment.id).collect();
    assert_eq!(order, vec![2, 3, 1]);
    assert_eq!(days[0].summary(), "3 appointments");
    assert_eq!(days[1].summary(), "1 appointment");
}

#[test]
fn test_afternoon_sorts_after_morning() {
    let appointments = vec![
        appointment(1, "Late", "2024-01-20", "2:00 PM", AppointmentStatus::Pending),
        appointment(2, "Early", "2024-01-20", "11:30 AM", AppointmentStatus::Pending),
    ];
    let days = group_by_date(&appointments, &formats());
    let order: Vec<u64> = days[0].entries.iter().map(|e| e.appointment.id).collect();
    assert_eq!(order, vec![2, 1]);
}

#[test]
fn test_unparseable_values_sort_last() {
    let appointments = vec![
        appointment(1, "Someday", "sometime soon", "10:00 AM", AppointmentStatus::Pending),
        appointment(2, "Dated", "2024-03-01", "whenever", AppointmentStatus::Pending),
        appointment(3, "Dated early", "2024-03-01", "8:00 AM", AppointmentStatus::Pending),
    ];
    let days = group_by_date(&appointments, &formats());
    assert_eq!(days[0].date, "2024-03-01");
    assert_eq!(days[1].date, "sometime soon");
    assert!(days[1].parsed_date.is_none());

    let order: Vec<u64> = days[0].entries.iter().map(|e| e.appointment.id).collect();
    assert_eq!(order, vec![3, 2]);
    assert!(days[0].entries[1].time.is_none());
}

#[test]
fn test_parse_time_formats() {
    let f = formats();
    assert_eq!(parse_time("2:00 PM", &f), NaiveTime::from_hms_opt(14, 0, 0));
    assert_eq!(parse_time(" 10:00 am ", &f), NaiveTime::from_hms_opt(10, 0, 0));
    assert_eq!(parse_time("14:30", &f), NaiveTime::from_hms_opt(14, 30, 0));
    assert_eq!(parse_time("noonish", &f), None);
}

#[test]
fn test_renderer_empty_state_and_actions() {
    let renderer = CalendarRenderer::new(formats());
    let none: Vec<&Appointment> = Vec::new();
    assert!(renderer.render(&none).is_empty());

    let appointments = vec![appointment(
        7,
        "Alice Johnson",
        "2024-01-20",
        "10:00 AM",
        AppointmentStatus::Confirmed,
    )];
    let visible: Vec<&Appointment> = appointments.iter().collect();
    let view = renderer.render(&visible);
    assert!(!view.is_empty());
    assert_eq!(view.days[0].heading(), "Saturday, January 20, 2024");
    assert_eq!(view.days[0].entries[0].actions, vec![ListAction::Edit(7)]);
}
