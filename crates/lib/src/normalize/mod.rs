//! # Job Normalization
//!
//! Maps raw API listings onto [`NormalizedRecord`]. Field-level problems degrade
//! to sentinel values; a record that cannot be mapped at all is logged and
//! skipped while the rest of the batch continues.

pub mod fields;
pub mod text;

pub use fields::{
    extract_experience_level, format_thousands, parse_date, parse_salary, tags_to_string, Coerced,
};
pub use text::TextCleaner;

use crate::constants::{DEFAULT_LOCATION, JOB_PATH_SEGMENT, NOT_SPECIFIED};
use crate::errors::RecordError;
use crate::types::{NormalizedRecord, RawRecord};
use fields::plain_text;
use serde_json::Value;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct Normalizer {
    base_url: String,
    cleaner: TextCleaner,
}

impl Normalizer {
    pub fn new(base_url: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cleaner: TextCleaner::new()?,
        })
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    /// `<base_url>/job/<id>`. A `slug` in the source is not used.
    pub fn job_url(&self, id: &str) -> String {
        format!("{}/{JOB_PATH_SEGMENT}/{id}", self.base_url)
    }

    /// Normalizes the listing at position `index` of the batch.
    pub fn normalize_job(
        &self,
        job: &RawRecord,
        index: usize,
    ) -> Result<NormalizedRecord, RecordError> {
        let job_id = match job.get("id") {
            Some(id) => plain_text(Some(id)),
            None => format!("job_{index}"),
        };

        let tags = job.get("tags");
        let tags_str = tags_to_string(tags).ok_or(RecordError::InvalidTags { index })?;
        let tags_clean = self.cleaner.clean(&tags_str);
        let description = job.get("description");

        Ok(NormalizedRecord {
            title: self.text_or(job, "position", NOT_SPECIFIED),
            company: self.text_or(job, "company", NOT_SPECIFIED),
            location: self.text_or(job, "location", DEFAULT_LOCATION),
            tags: tags_clean.clone(),
            job_url: self.job_url(&job_id),
            posted_date: parse_date(job.get("date")),
            salary: parse_salary(job),
            job_type: self.text_or(job, "type", NOT_SPECIFIED),
            experience_level: extract_experience_level(description, tags),
            department: tags_clean,
            description: description
                .map(|d| self.cleaner.clean_value(d))
                .unwrap_or_default(),
            application_deadline: NOT_SPECIFIED.to_string(),
            apply_url: plain_text(job.get("apply_url")),
            logo_url: plain_text(job.get("logo")),
            verified: matches!(job.get("verified"), Some(Value::Bool(true))),
            source_id: job_id,
            raw_date: plain_text(job.get("date")),
        })
    }

    /// Normalizes every listing, skipping the ones that fail. Order is kept.
    pub fn process_jobs(&self, jobs: &[RawRecord]) -> Vec<NormalizedRecord> {
        let processed: Vec<NormalizedRecord> = jobs
            .iter()
            .enumerate()
            .filter_map(|(i, job)| match self.normalize_job(job, i) {
                Ok(record) => Some(record),
                Err(e) => {
                    error!("Error processing job {i}: {e}");
                    None
                }
            })
            .collect();

        info!("Processed {} of {} jobs", processed.len(), jobs.len());
        processed
    }

    /// Cleans `job[key]`, using `default` only when the key is missing entirely.
    fn text_or(&self, job: &RawRecord, key: &str, default: &str) -> String {
        match job.get(key) {
            Some(value) => self.cleaner.clean_value(value),
            None => self.cleaner.clean(default),
        }
    }
}
