use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::error::{AppError, AppResult};
use crate::insurance::{
    dto::{CoverageInput, CoverageRequest, CreateInsuranceRequest, UpdateInsuranceRequest},
    repo_types::{Coverage, Insurance, InsuranceChanges},
};

/// Absent or blank input is NULL; anything else must be a finite number.
pub fn parse_coverage_field(field: &str, input: Option<&CoverageInput>) -> AppResult<Option<f64>> {
    let value = match input {
        None => return Ok(None),
        Some(CoverageInput::Number(n)) => *n,
        Some(CoverageInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map_err(|_| AppError::Parse(format!("{field} {text:?} is not a number")))?
        }
    };
    if !value.is_finite() {
        return Err(AppError::Parse(format!("{field} must be a finite number")));
    }
    Ok(Some(value))
}

fn parse_coverage(req: &CoverageRequest) -> AppResult<Coverage> {
    Ok(Coverage {
        copay: parse_coverage_field("copay", req.copay.as_ref())?,
        deductible: parse_coverage_field("deductible", req.deductible.as_ref())?,
        coinsurance: parse_coverage_field("coinsurance", req.coinsurance.as_ref())?,
        out_of_pocket_max: parse_coverage_field(
            "out_of_pocket_max",
            req.out_of_pocket_max.as_ref(),
        )?,
    })
}

fn changes(req: &UpdateInsuranceRequest) -> AppResult<InsuranceChanges<'_>> {
    for (field, value) in [("name", &req.name), ("policy_number", &req.policy_number)] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} must not be empty")));
        }
    }
    Ok(InsuranceChanges {
        name: &req.name,
        policy_number: &req.policy_number,
        address: req.address.as_deref(),
        phone: req.phone.as_deref(),
        coverage: parse_coverage(&req.coverage)?,
        covered_services: req.covered_services.as_deref(),
    })
}

/// A missing profile is `None`, not an error.
#[instrument(skip(db))]
pub async fn get_insurance(db: &SqlitePool, id: i64) -> AppResult<Option<Insurance>> {
    Ok(Insurance::find_by_id(db, id).await?)
}

#[instrument(skip(db, req))]
pub async fn create_insurance(db: &SqlitePool, req: &CreateInsuranceRequest) -> AppResult<Insurance> {
    let fields = changes(&req.fields)?;
    let insurance = Insurance::create(db, &req.dob, &fields).await?;
    info!(insurance_id = insurance.id, "insurance created");
    Ok(insurance)
}

/// Overwrites everything but `dob`.
///
/// A missing target is a no-op returning `None`; the input is not even parsed then.
#[instrument(skip(db, req))]
pub async fn update_insurance(
    db: &SqlitePool,
    id: i64,
    req: &UpdateInsuranceRequest,
) -> AppResult<Option<Insurance>> {
    let mut tx = db.begin().await?;
    if Insurance::find_by_id(&mut *tx, id).await?.is_none() {
        debug!(insurance_id = id, "insurance not found; update skipped");
        return Ok(None);
    }

    let fields = changes(req)?;
    let updated = Insurance::update(&mut *tx, id, &fields).await?;
    tx.commit().await?;

    info!(insurance_id = id, "insurance updated");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    fn update_request() -> UpdateInsuranceRequest {
        UpdateInsuranceRequest {
            name: "Jane Roe".into(),
            policy_number: "POL-2".into(),
            address: Some("2 Side St".into()),
            phone: Some("555-0102".into()),
            coverage: CoverageRequest {
                copay: Some("12.5".into()),
                deductible: Some("".into()),
                coinsurance: Some(0.2_f64.into()),
                out_of_pocket_max: None,
            },
            covered_services: Some("dental".into()),
        }
    }

    async fn create_profile(db: &SqlitePool) -> Insurance {
        let req = CreateInsuranceRequest {
            dob: "1990-04-12".into(),
            fields: UpdateInsuranceRequest {
                name: "Jane Doe".into(),
                policy_number: "POL-1".into(),
                coverage: CoverageRequest {
                    copay: Some("20".into()),
                    deductible: Some("1500".into()),
                    coinsurance: Some("0.1".into()),
                    out_of_pocket_max: Some("6000".into()),
                },
                covered_services: Some("primary care".into()),
                ..Default::default()
            },
        };
        create_insurance(db, &req).await.unwrap()
    }

    #[test]
    fn coverage_field_parsing() {
        let parse = |s: &str| parse_coverage_field("copay", Some(&CoverageInput::from(s)));
        assert_eq!(parse("12.5").unwrap(), Some(12.5));
        assert_eq!(parse(" 40 ").unwrap(), Some(40.0));
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse_coverage_field("copay", None).unwrap(), None);
        assert_eq!(
            parse_coverage_field("copay", Some(&CoverageInput::from(7.0_f64))).unwrap(),
            Some(7.0)
        );
        assert!(matches!(parse("twelve"), Err(AppError::Parse(_))));
        assert!(matches!(parse("inf"), Err(AppError::Parse(_))));
        assert!(matches!(parse("NaN"), Err(AppError::Parse(_))));
    }

    #[tokio::test]
    async fn create_then_get() {
        let state = test_state().await;
        let created = create_profile(&state.db).await;
        assert_eq!(created.dob, "1990-04-12");
        assert_eq!(created.deductible, Some(1500.0));
        assert_eq!(created.address, None);

        let loaded = get_insurance(&state.db, created.id).await.unwrap();
        assert_eq!(loaded, Some(created));
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let state = test_state().await;
        assert_eq!(get_insurance(&state.db, 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_overwrites_fields_but_not_dob() {
        let state = test_state().await;
        let created = create_profile(&state.db).await;

        let updated = update_insurance(&state.db, created.id, &update_request())
            .await
            .unwrap()
            .expect("profile exists");

        assert_eq!(updated.dob, "1990-04-12");
        assert_eq!(updated.name, "Jane Roe");
        assert_eq!(updated.policy_number, "POL-2");
        assert_eq!(updated.address.as_deref(), Some("2 Side St"));
        assert_eq!(updated.copay, Some(12.5));
        assert_eq!(updated.deductible, None);
        assert_eq!(updated.coinsurance, Some(0.2));
        assert_eq!(updated.out_of_pocket_max, None);
        assert_eq!(updated.covered_services.as_deref(), Some("dental"));
    }

    #[tokio::test]
    async fn invalid_number_fails_and_leaves_record_untouched() {
        let state = test_state().await;
        let created = create_profile(&state.db).await;

        let mut req = update_request();
        req.coverage.deductible = Some("lots".into());
        let err = update_insurance(&state.db, created.id, &req).await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));

        let loaded = get_insurance(&state.db, created.id).await.unwrap();
        assert_eq!(loaded, Some(created));
    }

    #[tokio::test]
    async fn update_of_missing_profile_is_a_no_op() {
        let state = test_state().await;
        let mut req = update_request();
        req.coverage.copay = Some("not a number".into());

        let res = update_insurance(&state.db, 1, &req).await.unwrap();
        assert_eq!(res, None);
        assert_eq!(get_insurance(&state.db, 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_update_form_is_a_no_op_for_missing_profile() {
        let state = test_state().await;
        let req: UpdateInsuranceRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(update_insurance(&state.db, 9, &req).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_requires_name_and_policy_number() {
        let state = test_state().await;
        let created = create_profile(&state.db).await;

        let mut req = update_request();
        req.policy_number = "  ".into();
        let err = update_insurance(&state.db, created.id, &req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(get_insurance(&state.db, created.id).await.unwrap(), Some(created));
    }

    #[test]
    fn submitted_dob_is_ignored_by_update_form() {
        let req: UpdateInsuranceRequest = serde_json::from_value(serde_json::json!({
            "name": "A",
            "policy_number": "P",
            "dob": "2000-01-01",
            "copay": 15,
            "deductible": "250.75"
        }))
        .unwrap();
        assert_eq!(req.coverage.copay, Some(CoverageInput::Number(15.0)));
        assert_eq!(req.coverage.deductible, Some(CoverageInput::from("250.75")));
        assert_eq!(req.coverage.coinsurance, None);
    }
}
