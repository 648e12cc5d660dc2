use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the applicant supplied, grouped the way the form collects it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    pub personal_info: PersonalInfo,
    pub financial_info: FinancialInfo,
    pub credit_info: CreditInfo,
    pub credit_history: CreditHistory,
}

impl ApplicantRecord {
    /// Age in whole calendar years on `as_of`.
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        self.personal_info.age_on(as_of)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "dob", alias = "dateOfBirth")]
    pub date_of_birth: NaiveDate,
    pub education: Education,
    pub marital_status: String,
    #[serde(default)]
    pub dependents: u32,
}

impl PersonalInfo {
    /// Year difference only; birthdays later in the year are not subtracted.
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        as_of.year() - self.date_of_birth.year()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInfo {
    pub income: f64,
    pub expenses: f64,
    pub employment_type: EmploymentType,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditInfo {
    pub amount: f64,
    pub term: u32,
    #[serde(rename = "rate", alias = "annualRate")]
    pub annual_rate: f64,
    #[serde(rename = "type")]
    pub credit_type: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditHistory {
    #[serde(default, rename = "historyLength", alias = "historyLengthMonths")]
    pub history_length_months: u32,
    #[serde(default)]
    pub paid_on_time: u32,
    #[serde(default)]
    pub paid_with_delay: u32,
    #[serde(default)]
    pub credit_inquiries: u32,
}

/// Highest completed education.
///
/// Labels outside the known set land in `Unrecognized` and score nothing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Education {
    Primary,
    Vocational,
    Secondary,
    Higher,
    Unrecognized(String),
}

impl Education {
    pub fn label(&self) -> &str {
        match self {
            Education::Primary => "primary",
            Education::Vocational => "vocational",
            Education::Secondary => "secondary",
            Education::Higher => "higher",
            Education::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Education {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "primary" => Education::Primary,
            "vocational" => Education::Vocational,
            "secondary" => Education::Secondary,
            "higher" => Education::Higher,
            _ => Education::Unrecognized(raw),
        }
    }
}

impl From<Education> for String {
    fn from(education: Education) -> Self {
        education.label().to_string()
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Form of employment backing the declared income.
///
/// `unknown` and any label outside the known set land in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum EmploymentType {
    ContractEmployment,
    B2b,
    CivilContract,
    Pension,
    Unemployed,
    Other,
    Unrecognized(String),
}

impl EmploymentType {
    pub fn label(&self) -> &str {
        match self {
            EmploymentType::ContractEmployment => "contract_employment",
            EmploymentType::B2b => "b2b",
            EmploymentType::CivilContract => "civil_contract",
            EmploymentType::Pension => "pension",
            EmploymentType::Unemployed => "unemployed",
            EmploymentType::Other => "other",
            EmploymentType::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for EmploymentType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "contract_employment" => EmploymentType::ContractEmployment,
            "b2b" => EmploymentType::B2b,
            "civil_contract" => EmploymentType::CivilContract,
            "pension" => EmploymentType::Pension,
            "unemployed" => EmploymentType::Unemployed,
            "other" => EmploymentType::Other,
            _ => EmploymentType::Unrecognized(raw),
        }
    }
}

impl From<EmploymentType> for String {
    fn from(employment: EmploymentType) -> Self {
        employment.label().to_string()
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "personalInfo": {
            "firstName": "Anna",
            "lastName": "Nowak",
            "dob": "1991-04-12",
            "education": "higher",
            "maritalStatus": "single",
            "dependents": 1
        },
        "financialInfo": {
            "income": 5000,
            "expenses": 1500,
            "employmentType": "contract_employment"
        },
        "creditInfo": {
            "amount": 20000,
            "term": 24,
            "rate": 9.5,
            "type": "cash"
        },
        "creditHistory": {
            "historyLength": 24,
            "paidOnTime": 10,
            "paidWithDelay": 0,
            "creditInquiries": 1
        }
    }"#;

    #[test]
    fn test_parse_form_record() {
        let record: ApplicantRecord = serde_json::from_str(SAMPLE_JSON).unwrap();

        assert_eq!(record.personal_info.first_name, "Anna");
        assert_eq!(record.personal_info.education, Education::Higher);
        assert_eq!(record.personal_info.dependents, 1);
        assert_eq!(
            record.financial_info.employment_type,
            EmploymentType::ContractEmployment
        );
        assert_eq!(record.credit_info.annual_rate, 9.5);
        assert_eq!(record.credit_info.credit_type, "cash");
        assert_eq!(record.credit_history.history_length_months, 24);
    }

    #[test]
    fn test_unrecognized_labels_are_kept() {
        assert_eq!(
            EmploymentType::from("freelance".to_string()),
            EmploymentType::Unrecognized("freelance".to_string())
        );
        assert_eq!(
            EmploymentType::from("unknown".to_string()),
            EmploymentType::Unrecognized("unknown".to_string())
        );
        assert_eq!(
            Education::from("doctorate".to_string()),
            Education::Unrecognized("doctorate".to_string())
        );
    }

    #[test]
    fn test_labels_serialize_back() {
        let json = serde_json::to_string(&EmploymentType::CivilContract).unwrap();
        assert_eq!(json, "\"civil_contract\"");

        let json = serde_json::to_string(&Education::Unrecognized("phd".to_string())).unwrap();
        assert_eq!(json, "\"phd\"");
    }

    #[test]
    fn test_age_ignores_month_and_day() {
        let record: ApplicantRecord = serde_json::from_str(SAMPLE_JSON).unwrap();

        // Birthday in April; still counted as a full year in January.
        let january = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let december = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(record.age_on(january), 35);
        assert_eq!(record.age_on(december), 35);
    }

    #[test]
    fn test_grouped_field_aliases() {
        let yaml = r#"
personalInfo:
  firstName: Jan
  lastName: Kowalski
  dateOfBirth: "1980-01-01"
  education: vocational
  maritalStatus: married
financialInfo:
  income: 3000
  expenses: 800
  employmentType: b2b
creditInfo:
  amount: 15000
  term: 36
  annualRate: 7
  type: car
creditHistory:
  historyLengthMonths: 60
"#;
        let record: ApplicantRecord = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(record.personal_info.dependents, 0);
        assert_eq!(record.personal_info.education, Education::Vocational);
        assert_eq!(record.credit_info.annual_rate, 7.0);
        assert_eq!(record.credit_history.history_length_months, 60);
        assert_eq!(record.credit_history.paid_on_time, 0);
    }
}
