//! Scheduling feature view built on the generic data-fetch wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chairside_application::DataFetch;
use chairside_domain::{ApiRequest, FetchState};

use crate::portal::Portal;

/// Endpoint for the appointment collection.
const APPOINTMENTS_PATH: &str = "/api/appointments";

/// Appointment record returned by the scheduling API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Server-assigned identifier.
    pub id: String,
    /// The patient being seen.
    pub patient_id: String,
    /// The treating dentist.
    pub doctor_id: String,
    /// Scheduled start.
    pub start_time: DateTime<Utc>,
    /// Scheduled end.
    pub end_time: DateTime<Utc>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields for creating an appointment; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    /// The patient being seen.
    pub patient_id: String,
    /// The treating dentist.
    pub doctor_id: String,
    /// Scheduled start.
    pub start_time: DateTime<Utc>,
    /// Scheduled end.
    pub end_time: DateTime<Utc>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The appointments list as a feature view: one fetch per operation,
/// loading/data/error observable after each call.
#[derive(Debug, Default)]
pub struct AppointmentsView {
    list: DataFetch<Vec<Appointment>>,
}

impl AppointmentsView {
    /// Creates an idle view.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: DataFetch::new(),
        }
    }

    /// State of the last list fetch.
    #[must_use]
    pub const fn list_state(&self) -> &FetchState<Vec<Appointment>> {
        self.list.state()
    }

    /// Loads the appointment list.
    pub async fn load(&mut self, portal: &Portal) -> &FetchState<Vec<Appointment>> {
        self.list
            .dispatch(
                portal.api(),
                &portal.request_authorizer(),
                ApiRequest::get(APPOINTMENTS_PATH),
            )
            .await
    }

    /// Creates an appointment and returns the server's copy.
    pub async fn create(
        portal: &Portal,
        appointment: &NewAppointment,
    ) -> FetchState<Appointment> {
        let mut fetch = DataFetch::new();
        let body = match serde_json::to_value(appointment) {
            Ok(body) => body,
            Err(err) => return FetchState::error(format!("invalid appointment: {err}")),
        };
        fetch
            .dispatch(
                portal.api(),
                &portal.request_authorizer(),
                ApiRequest::post(APPOINTMENTS_PATH, body),
            )
            .await;
        fetch.into_state()
    }
}
