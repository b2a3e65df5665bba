use sqlx::{Sqlite, SqliteExecutor};

use crate::insurance::repo_types::{Insurance, InsuranceChanges};

impl Insurance {
    pub async fn find_by_id<'e, E>(db: E, id: i64) -> Result<Option<Insurance>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Insurance>(
            r#"
            SELECT id, name, policy_number, dob, address, phone,
                   copay, deductible, coinsurance, out_of_pocket_max, covered_services
            FROM insurance
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create<'e, E>(
        db: E,
        dob: &str,
        fields: &InsuranceChanges<'_>,
    ) -> Result<Insurance, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Insurance>(
            r#"
            INSERT INTO insurance (name, policy_number, dob, address, phone,
                                   copay, deductible, coinsurance, out_of_pocket_max,
                                   covered_services)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, policy_number, dob, address, phone,
                      copay, deductible, coinsurance, out_of_pocket_max, covered_services
            "#,
        )
        .bind(fields.name)
        .bind(fields.policy_number)
        .bind(dob)
        .bind(fields.address)
        .bind(fields.phone)
        .bind(fields.coverage.copay)
        .bind(fields.coverage.deductible)
        .bind(fields.coverage.coinsurance)
        .bind(fields.coverage.out_of_pocket_max)
        .bind(fields.covered_services)
        .fetch_one(db)
        .await
    }

    /// Overwrites every column except `dob`. `None` when the id does not exist.
    pub async fn update<'e, E>(
        db: E,
        id: i64,
        fields: &InsuranceChanges<'_>,
    ) -> Result<Option<Insurance>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<Sqlite, Insurance>(
            r#"
            UPDATE insurance
            SET name = ?, policy_number = ?, address = ?, phone = ?,
                copay = ?, deductible = ?, coinsurance = ?, out_of_pocket_max = ?,
                covered_services = ?
            WHERE id = ?
            RETURNING id, name, policy_number, dob, address, phone,
                      copay, deductible, coinsurance, out_of_pocket_max, covered_services
            "#,
        )
        .bind(fields.name)
        .bind(fields.policy_number)
        .bind(fields.address)
        .bind(fields.phone)
        .bind(fields.coverage.copay)
        .bind(fields.coverage.deductible)
        .bind(fields.coverage.coinsurance)
        .bind(fields.coverage.out_of_pocket_max)
        .bind(fields.covered_services)
        .bind(id)
        .fetch_optional(db)
        .await
    }
}
