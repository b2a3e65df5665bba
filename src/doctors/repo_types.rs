use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Doctor reference data; appointments point at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub specialization: String,
}
