use serde::Deserialize;

/// A cost-sharing value as submitted: form text or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoverageInput {
    Number(f64),
    Text(String),
}

impl From<&str> for CoverageInput {
    fn from(s: &str) -> Self {
        CoverageInput::Text(s.to_string())
    }
}

impl From<f64> for CoverageInput {
    fn from(n: f64) -> Self {
        CoverageInput::Number(n)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageRequest {
    #[serde(default)]
    pub copay: Option<CoverageInput>,
    #[serde(default)]
    pub deductible: Option<CoverageInput>,
    #[serde(default)]
    pub coinsurance: Option<CoverageInput>,
    #[serde(default)]
    pub out_of_pocket_max: Option<CoverageInput>,
}

/// Update form. Has no `dob` field, so a submitted one is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInsuranceRequest {
    // Checked by the service once the target is known to exist.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub policy_number: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub coverage: CoverageRequest,
    #[serde(default)]
    pub covered_services: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInsuranceRequest {
    pub dob: String,
    #[serde(flatten)]
    pub fields: UpdateInsuranceRequest,
}
