//! # Normalizer Tests
//!
//! Field extraction rules and batch isolation for `Normalizer`.

use anyhow::Result;
use chrono::{DateTime, Local};
use remotejobs::normalize::{extract_experience_level, parse_date, parse_salary};
use remotejobs::{Normalizer, RecordError};
use remotejobs_test_utils::{raw_from, raw_job};
use serde_json::json;

fn normalizer() -> Normalizer {
    Normalizer::new("https://remoteok.com").unwrap()
}

fn local_date(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .unwrap()
        .with_timezone(&Local)
        .format("%Y-%m-%d")
        .to_string()
}

// --- Salary ---

#[test]
fn test_salary_missing_both_is_not_specified() {
    let job = raw_job("1", "Engineer");
    assert_eq!(parse_salary(&job), "Not specified");
}

#[test]
fn test_salary_min_only() {
    let job = raw_from(json!({ "salary_min": 50000 }));
    assert_eq!(parse_salary(&job), "$50,000+");
}

#[test]
fn test_salary_range() {
    let job = raw_from(json!({ "salary_min": 50000, "salary_max": 80000 }));
    assert_eq!(parse_salary(&job), "$50,000 - $80,000");
}

#[test]
fn test_salary_max_only_and_numeric_strings() {
    let job = raw_from(json!({ "salary_max": "95000" }));
    assert_eq!(parse_salary(&job), "Up to $95,000");

    let job = raw_from(json!({ "salary_min": "60000", "salary_max": 1200000 }));
    assert_eq!(parse_salary(&job), "$60,000 - $1,200,000");
}

#[test]
fn test_salary_zero_counts_as_absent() {
    let job = raw_from(json!({ "salary_min": 0, "salary_max": 0 }));
    assert_eq!(parse_salary(&job), "Not specified");

    let job = raw_from(json!({ "salary_min": 0, "salary_max": 70000 }));
    assert_eq!(parse_salary(&job), "Up to $70,000");
}

#[test]
fn test_salary_unparseable_value_degrades_to_sentinel() {
    let job = raw_from(json!({ "salary_min": "competitive", "salary_max": 80000 }));
    assert_eq!(parse_salary(&job), "Not specified");

    let job = raw_from(json!({ "salary_max": { "amount": 1 } }));
    assert_eq!(parse_salary(&job), "Not specified");
}

// --- Date ---

#[test]
fn test_date_from_integer_and_string_timestamps() {
    let expected = local_date(1_700_000_000);
    assert_eq!(parse_date(Some(&json!(1_700_000_000))), expected);
    assert_eq!(parse_date(Some(&json!("1700000000"))), expected);
}

#[test]
fn test_date_invalid_or_missing_is_not_specified() {
    assert_eq!(parse_date(None), "Not specified");
    assert_eq!(parse_date(Some(&json!(null))), "Not specified");
    assert_eq!(parse_date(Some(&json!(""))), "Not specified");
    assert_eq!(parse_date(Some(&json!("2023-11-14T22:13:20+00:00"))), "Not specified");
    assert_eq!(parse_date(Some(&json!(i64::MAX))), "Not specified");
}

// --- Experience Level ---

#[test]
fn test_senior_keywords_take_priority() {
    let description = json!("Mentor junior developers as a senior engineer.");
    assert_eq!(extract_experience_level(Some(&description), None), "Senior");
}

#[test]
fn test_experience_level_from_tags() {
    let tags = json!(["react", "Intern"]);
    assert_eq!(extract_experience_level(None, Some(&tags)), "Entry");

    let tags = json!("python, 3-5 years");
    assert_eq!(extract_experience_level(Some(&json!("")), Some(&tags)), "Mid");
}

#[test]
fn test_entry_beats_mid_and_no_match_is_not_specified() {
    let description = json!("Intermediate or entry level candidates");
    assert_eq!(extract_experience_level(Some(&description), None), "Entry");

    let description = json!("We build software.");
    assert_eq!(
        extract_experience_level(Some(&description), Some(&json!(["go"]))),
        "Not specified"
    );
}

// --- Text Cleaning ---

#[test]
fn test_clean_text_removes_markup_and_double_spaces() {
    let cleaner = normalizer();
    let cleaned = cleaner.cleaner().clean("A <b>bold</b>    move\n\n  ahead");

    assert!(!cleaned.contains('<'));
    assert!(!cleaned.contains('>'));
    assert!(!cleaned.contains("  "));
    assert_eq!(cleaned, "A bold move ahead");
}

// --- Whole Records ---

#[test]
fn test_normalize_job_populates_every_field() -> Result<()> {
    // --- Arrange ---
    let job = raw_from(json!({
        "id": "1001",
        "slug": "ignored-slug-1001",
        "position": "Senior <b>Rust</b> Engineer",
        "company": "Acme \"Rockets\" Corp",
        "tags": ["rust", "backend"],
        "description": "<p>Build\tfast\n\nthings.</p>",
        "date": 1_700_000_000,
        "salary_min": 120000,
        "salary_max": 160000,
        "type": "Full-time",
        "apply_url": "https://remoteok.com/apply/1001",
        "logo": "https://remoteok.com/logo.png",
        "verified": true
    }));

    // --- Act ---
    let record = normalizer().normalize_job(&job, 0)?;

    // --- Assert ---
    assert_eq!(record.title, "Senior Rust Engineer");
    assert_eq!(record.company, "Acme \"\"Rockets\"\" Corp");
    assert_eq!(record.location, "Remote");
    assert_eq!(record.tags, "rust, backend");
    assert_eq!(record.department, "rust, backend");
    assert_eq!(record.job_url, "https://remoteok.com/job/1001");
    assert_eq!(record.posted_date, local_date(1_700_000_000));
    assert_eq!(record.salary, "$120,000 - $160,000");
    assert_eq!(record.job_type, "Full-time");
    // Only the description and tags feed the heuristic, not the title.
    assert_eq!(record.experience_level, "Not specified");
    assert_eq!(record.description, "Build fast things.");
    assert_eq!(record.application_deadline, "Not specified");
    assert_eq!(record.apply_url, "https://remoteok.com/apply/1001");
    assert_eq!(record.logo_url, "https://remoteok.com/logo.png");
    assert!(record.verified);
    assert_eq!(record.source_id, "1001");
    assert_eq!(record.raw_date, "1700000000");

    Ok(())
}

#[test]
fn test_normalize_job_sparse_record_uses_sentinels() -> Result<()> {
    // --- Arrange ---
    let job = raw_from(json!({ "id": 42, "position": "Analyst", "location": null }));

    // --- Act ---
    let record = normalizer().normalize_job(&job, 3)?;

    // --- Assert ---
    assert_eq!(record.company, "Not specified");
    // A present-but-null location is cleaned to empty; only a missing key defaults.
    assert_eq!(record.location, "");
    assert_eq!(record.tags, "");
    assert_eq!(record.posted_date, "Not specified");
    assert_eq!(record.salary, "Not specified");
    assert_eq!(record.job_type, "Not specified");
    assert_eq!(record.experience_level, "Not specified");
    assert_eq!(record.description, "");
    assert_eq!(record.apply_url, "");
    assert_eq!(record.logo_url, "");
    assert!(!record.verified);
    assert_eq!(record.source_id, "42");
    assert_eq!(record.job_url, "https://remoteok.com/job/42");
    assert_eq!(record.raw_date, "");

    Ok(())
}

#[test]
fn test_normalize_job_rejects_non_string_tags() {
    let job = raw_from(json!({ "id": "7", "position": "Dev", "tags": ["rust", 5] }));
    let err = normalizer().normalize_job(&job, 7).unwrap_err();
    assert_eq!(err, RecordError::InvalidTags { index: 7 });
}

#[test]
fn test_process_jobs_skips_bad_records_and_keeps_order() {
    // --- Arrange ---
    let jobs = vec![
        raw_job("1", "First"),
        raw_from(json!({ "id": "2", "position": "Broken", "tags": [null] })),
        raw_job("3", "Third"),
    ];

    // --- Act ---
    let processed = normalizer().process_jobs(&jobs);

    // --- Assert ---
    let titles: Vec<_> = processed.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Third"]);
}

#[test]
fn test_job_url_trims_trailing_slash_from_base() {
    let normalizer = Normalizer::new("https://remoteok.com/").unwrap();
    assert_eq!(normalizer.job_url("55"), "https://remoteok.com/job/55");
}
