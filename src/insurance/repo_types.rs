use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Insurance profile. `dob` is written once at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Insurance {
    pub id: i64,
    pub name: String,
    pub policy_number: String,
    pub dob: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub copay: Option<f64>,
    pub deductible: Option<f64>,
    pub coinsurance: Option<f64>,
    pub out_of_pocket_max: Option<f64>,
    pub covered_services: Option<String>,
}

/// The four cost-sharing fields after parsing; `None` is stored as NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coverage {
    pub copay: Option<f64>,
    pub deductible: Option<f64>,
    pub coinsurance: Option<f64>,
    pub out_of_pocket_max: Option<f64>,
}

/// Everything an update may overwrite.
#[derive(Debug, Clone)]
pub struct InsuranceChanges<'a> {
    pub name: &'a str,
    pub policy_number: &'a str,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub coverage: Coverage,
    pub covered_services: Option<&'a str>,
}
