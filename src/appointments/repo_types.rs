use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::appointments::timeslot::minute_timestamp;

/// A booked visit. Cancelling deletes the row; there is no status column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub user_id: i64,
    pub doctor_id: i64,
    #[serde(with = "minute_timestamp")]
    pub time: PrimitiveDateTime,
}
