mod types;
pub mod validation;

pub use types::{
    ApplicantRecord, CreditHistory, CreditInfo, Education, EmploymentType, FinancialInfo,
    PersonalInfo,
};
pub use validation::validate_applicant;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load an applicant record from a JSON or YAML file.
///
/// Files ending in `.json` are read as JSON; anything else as YAML.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a record.
pub fn load_applicant(path: &Path) -> Result<ApplicantRecord> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read applicant file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse applicant: invalid JSON in {}", path.display())
        })
    } else {
        serde_saphyr::from_str(&content).with_context(|| {
            format!("Failed to parse applicant: invalid YAML in {}", path.display())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    const SAMPLE_YAML: &str = r#"
personalInfo:
  firstName: Piotr
  lastName: Zieliński
  dob: "1988-09-30"
  education: secondary
  maritalStatus: married
  dependents: 2
financialInfo:
  income: 6200
  expenses: 2100
  employmentType: b2b
creditInfo:
  amount: 30000
  term: 48
  rate: 8.9
  type: mortgage
creditHistory:
  historyLength: 72
  paidOnTime: 30
  paidWithDelay: 1
  creditInquiries: 2
"#;

    #[test]
    fn test_load_yaml_applicant() {
        let temp_path = env::temp_dir().join("credit_score_test_applicant.yaml");
        fs::write(&temp_path, SAMPLE_YAML).unwrap();

        let record = load_applicant(&temp_path).unwrap();
        assert_eq!(record.personal_info.last_name, "Zieliński");
        assert_eq!(record.financial_info.employment_type, EmploymentType::B2b);
        assert_eq!(record.credit_history.paid_with_delay, 1);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_json_applicant() {
        let record: ApplicantRecord = serde_saphyr::from_str(SAMPLE_YAML).unwrap();
        let temp_path = env::temp_dir().join("credit_score_test_applicant.json");
        fs::write(&temp_path, serde_json::to_string_pretty(&record).unwrap()).unwrap();

        let loaded = load_applicant(&temp_path).unwrap();
        assert_eq!(loaded, record);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let temp_path = env::temp_dir().join("credit_score_test_no_such_applicant.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_applicant(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Failed to read applicant file"));
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let temp_path = env::temp_dir().join("credit_score_test_bad_applicant.json");
        fs::write(&temp_path, "{\"personalInfo\": 3}").unwrap();

        let err = load_applicant(&temp_path).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));

        let _ = fs::remove_file(&temp_path);
    }
}
