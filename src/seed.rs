use sqlx::SqlitePool;
use tracing::info;

use crate::doctors::repo_types::Doctor;
use crate::users::{password::hash_password, repo_types::User};

pub const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "demo-password";

const DEMO_DOCTORS: [(&str, &str, &str); 3] = [
    ("Dr. Maria Alvarez", "12 Harbor Rd, Suite 3", "Family Medicine"),
    ("Dr. Kenji Watanabe", "401 Elm Ave", "Cardiology"),
    ("Dr. Priya Nair", "77 Lakeview Blvd", "Dermatology"),
];

/// Fills an empty database with a demo user and a few doctors.
/// Does nothing once any user exists.
pub async fn seed_demo_data(db: &SqlitePool) -> anyhow::Result<()> {
    if User::count(db).await? > 0 {
        info!("database already has users; demo seed skipped");
        return Ok(());
    }

    let mut tx = db.begin().await?;
    let hash = hash_password(DEMO_PASSWORD)?;
    let user = User::create(&mut *tx, DEMO_USERNAME, &hash).await?;
    for (name, address, specialization) in DEMO_DOCTORS {
        Doctor::create(&mut *tx, name, address, specialization).await?;
    }
    tx.commit().await?;

    info!(user_id = user.id, doctors = DEMO_DOCTORS.len(), "demo data seeded");
    Ok(())
}
