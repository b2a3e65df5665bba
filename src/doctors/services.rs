use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::doctors::{dto::CreateDoctorRequest, repo_types::Doctor};
use crate::error::{AppError, AppResult};

#[instrument(skip(db))]
pub async fn list_doctors(db: &SqlitePool) -> AppResult<Vec<Doctor>> {
    Ok(Doctor::list_all(db).await?)
}

#[instrument(skip(db))]
pub async fn get_doctor(db: &SqlitePool, id: i64) -> AppResult<Doctor> {
    Doctor::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::not_found("doctor", id))
}

#[instrument(skip(db, req))]
pub async fn create_doctor(db: &SqlitePool, req: &CreateDoctorRequest) -> AppResult<Doctor> {
    for (field, value, max) in [
        ("name", &req.name, 100),
        ("address", &req.address, 200),
        ("specialization", &req.specialization, 100),
    ] {
        let len = value.trim().chars().count();
        if len == 0 {
            return Err(AppError::Validation(format!("{field} must not be empty")));
        }
        if len > max {
            return Err(AppError::Validation(format!(
                "{field} longer than {max} characters"
            )));
        }
    }

    let doctor = Doctor::create(
        db,
        req.name.trim(),
        req.address.trim(),
        req.specialization.trim(),
    )
    .await?;
    info!(doctor_id = doctor.id, name = %doctor.name, "doctor created");
    Ok(doctor)
}
