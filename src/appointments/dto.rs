use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::appointments::{
    repo_types::Appointment,
    timeslot::{format_date, format_time, minute_timestamp},
};

#[derive(Debug, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: i64,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
}

#[derive(Debug, Deserialize)]
pub struct RescheduleRequest {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub id: i64,
    pub user_id: i64,
    pub doctor_id: i64,
    #[serde(with = "minute_timestamp")]
    pub time: PrimitiveDateTime,
    /// `time` split back into the form fields it was booked with.
    pub date: String,
    pub time_of_day: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            doctor_id: a.doctor_id,
            date: format_date(a.time),
            time_of_day: format_time(a.time),
            time: a.time,
        }
    }
}
