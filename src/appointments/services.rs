use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::appointments::{repo_types::Appointment, timeslot::combine};
use crate::doctors::repo_types::Doctor;
use crate::error::{AppError, AppResult};
use crate::users::repo_types::User;

/// Books `doctor_id` for `user_id` at the given slot.
///
/// Both references must exist; the checks and the insert share one transaction.
/// Overlapping bookings are allowed.
#[instrument(skip(db))]
pub async fn book_appointment(
    db: &SqlitePool,
    user_id: i64,
    doctor_id: i64,
    date: &str,
    time: &str,
) -> AppResult<Appointment> {
    let at = combine(date, time)?;

    let mut tx = db.begin().await?;
    if User::find_by_id(&mut *tx, user_id).await?.is_none() {
        return Err(AppError::not_found("user", user_id));
    }
    if Doctor::find_by_id(&mut *tx, doctor_id).await?.is_none() {
        return Err(AppError::not_found("doctor", doctor_id));
    }
    let appointment = Appointment::create(&mut *tx, user_id, doctor_id, at).await?;
    tx.commit().await?;

    info!(
        appointment_id = appointment.id,
        user_id,
        doctor_id,
        time = %at,
        "appointment booked"
    );
    Ok(appointment)
}

#[instrument(skip(db))]
pub async fn reschedule_appointment(
    db: &SqlitePool,
    id: i64,
    date: &str,
    time: &str,
) -> AppResult<Appointment> {
    let mut tx = db.begin().await?;
    if Appointment::find_by_id(&mut *tx, id).await?.is_none() {
        return Err(AppError::not_found("appointment", id));
    }

    let at = combine(date, time)?;
    let appointment = Appointment::update_time(&mut *tx, id, at)
        .await?
        .ok_or_else(|| AppError::not_found("appointment", id))?;
    tx.commit().await?;

    info!(appointment_id = id, time = %at, "appointment rescheduled");
    Ok(appointment)
}

#[instrument(skip(db))]
pub async fn cancel_appointment(db: &SqlitePool, id: i64) -> AppResult<()> {
    if !Appointment::delete(db, id).await? {
        return Err(AppError::not_found("appointment", id));
    }
    info!(appointment_id = id, "appointment cancelled");
    Ok(())
}

#[instrument(skip(db))]
pub async fn get_appointment(db: &SqlitePool, id: i64) -> AppResult<Appointment> {
    Appointment::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::not_found("appointment", id))
}

#[instrument(skip(db))]
pub async fn list_appointments(db: &SqlitePool, user_id: i64) -> AppResult<Vec<Appointment>> {
    Ok(Appointment::list_by_user(db, user_id).await?)
}
