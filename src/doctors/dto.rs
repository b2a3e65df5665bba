use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub address: String,
    pub specialization: String,
}
