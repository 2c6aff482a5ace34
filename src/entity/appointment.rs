use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::{require, Entity, EntityKind, FilterField, StatusSet};
use crate::view::ViewMode;
use crate::{StoreError, StoreResult};

/// Length of a newly scheduled appointment, in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl StatusSet for AppointmentStatus {
    const ALL: &'static [Self] = &[
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentFilter {
    Status,
    Service,
}

impl FilterField for AppointmentFilter {
    fn name(&self) -> &'static str {
        match self {
            AppointmentFilter::Status => "status",
            AppointmentFilter::Service => "service",
        }
    }
}

/// A client consultation or service visit.
///
/// `date` is an ISO calendar date (`2024-01-20`); `time` is a wall-clock
/// time as typed into the form (`10:00 AM` or `14:30`). Both are kept as
/// entered and parsed only where ordering needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appointment {
    pub id: u64,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub status: AppointmentStatus,
    pub notes: String,
}

impl Default for Appointment {
    fn default() -> Self {
        Self {
            id: 0,
            client_name: String::new(),
            client_email: String::new(),
            client_phone: String::new(),
            service: String::new(),
            date: String::new(),
            time: String::new(),
            duration: DEFAULT_DURATION_MINUTES,
            status: AppointmentStatus::Pending,
            notes: String::new(),
        }
    }
}

impl Entity for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;
    const VIEW_MODES: &'static [ViewMode] = &[ViewMode::Table, ViewMode::Calendar];

    type Status = AppointmentStatus;
    type Filter = AppointmentFilter;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn status(&self) -> AppointmentStatus {
        self.status
    }

    fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
    }

    fn label(&self) -> &str {
        &self.client_name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.service.as_str()]
    }

    fn filter_value(&self, field: AppointmentFilter) -> Cow<'_, str> {
        match field {
            AppointmentFilter::Status => Cow::Borrowed(self.status.as_str()),
            AppointmentFilter::Service => Cow::Borrowed(self.service.as_str()),
        }
    }

    fn validate(&self) -> StoreResult<()> {
        require("clientName", &self.client_name)?;
        require("clientEmail", &self.client_email)?;
        require("clientPhone", &self.client_phone)?;
        require("date", &self.date)?;
        require("time", &self.time)?;
        if self.duration == 0 {
            return Err(StoreError::validation("duration", "must be at least one minute"));
        }
        Ok(())
    }
}
