use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One listing exactly as the API returned it.
pub type RawRecord = Map<String, Value>;

/// A fully populated output row.
///
/// Field order is the CSV column order; the serde names are the CSV headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "job_title")]
    pub title: String,
    #[serde(rename = "company_name")]
    pub company: String,
    pub location: String,
    #[serde(rename = "tags_skills")]
    pub tags: String,
    pub job_url: String,
    pub posted_date: String,
    pub salary: String,
    pub job_type: String,
    pub experience_level: String,
    #[serde(rename = "industry_department")]
    pub department: String,
    #[serde(rename = "job_description")]
    pub description: String,
    pub application_deadline: String,
    pub apply_url: String,
    #[serde(rename = "company_logo")]
    pub logo_url: String,
    pub verified: bool,
    #[serde(rename = "remote_ok_id")]
    pub source_id: String,
    pub raw_date: String,
}
