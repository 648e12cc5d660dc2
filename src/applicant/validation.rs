use chrono::NaiveDate;

use super::types::ApplicantRecord;

pub const MIN_LOAN_AMOUNT: f64 = 1000.0;
pub const MIN_LOAN_TERM: u32 = 3;

/// Check an applicant record the way the collecting form does before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_applicant(record: &ApplicantRecord, as_of: NaiveDate) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let personal = &record.personal_info;
    require_text(&mut errors, "personalInfo.firstName", &personal.first_name);
    require_text(&mut errors, "personalInfo.lastName", &personal.last_name);
    require_text(&mut errors, "personalInfo.education", personal.education.label());
    require_text(&mut errors, "personalInfo.maritalStatus", &personal.marital_status);
    if personal.date_of_birth > as_of {
        errors.push(format!(
            "personalInfo.dob: {} is after {}",
            personal.date_of_birth, as_of
        ));
    }

    let financial = &record.financial_info;
    require_at_least(&mut errors, "financialInfo.income", financial.income, 0.0);
    require_at_least(&mut errors, "financialInfo.expenses", financial.expenses, 0.0);
    require_text(
        &mut errors,
        "financialInfo.employmentType",
        financial.employment_type.label(),
    );

    let credit = &record.credit_info;
    require_at_least(&mut errors, "creditInfo.amount", credit.amount, MIN_LOAN_AMOUNT);
    if credit.term < MIN_LOAN_TERM {
        errors.push(format!(
            "creditInfo.term: must be at least {} months (got {})",
            MIN_LOAN_TERM, credit.term
        ));
    }
    require_at_least(&mut errors, "creditInfo.rate", credit.annual_rate, 0.0);
    require_text(&mut errors, "creditInfo.type", &credit.credit_type);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require_text(errors: &mut Vec<String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{}: required", field));
    }
}

fn require_at_least(errors: &mut Vec<String>, field: &str, value: f64, min: f64) {
    if !value.is_finite() {
        errors.push(format!("{}: must be a finite number", field));
    } else if value < min {
        errors.push(format!("{}: must be at least {} (got {})", field, min, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::{
        CreditHistory, CreditInfo, Education, EmploymentType, FinancialInfo, PersonalInfo,
    };

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn valid_record() -> ApplicantRecord {
        ApplicantRecord {
            personal_info: PersonalInfo {
                first_name: "Anna".to_string(),
                last_name: "Nowak".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 3).unwrap(),
                education: Education::Secondary,
                marital_status: "married".to_string(),
                dependents: 2,
            },
            financial_info: FinancialInfo {
                income: 4000.0,
                expenses: 1200.0,
                employment_type: EmploymentType::Pension,
            },
            credit_info: CreditInfo {
                amount: 1000.0,
                term: 3,
                annual_rate: 0.0,
                credit_type: "cash".to_string(),
            },
            credit_history: CreditHistory::default(),
        }
    }

    #[test]
    fn test_valid_record_at_minimums() {
        assert!(validate_applicant(&valid_record(), as_of()).is_ok());
    }

    #[test]
    fn test_unrecognized_label_is_not_an_error() {
        let mut record = valid_record();
        record.financial_info.employment_type =
            EmploymentType::Unrecognized("seasonal".to_string());
        record.personal_info.education = Education::Unrecognized("doctorate".to_string());
        assert!(validate_applicant(&record, as_of()).is_ok());
    }

    #[test]
    fn test_loan_minimums() {
        let mut record = valid_record();
        record.credit_info.amount = 999.99;
        record.credit_info.term = 2;

        let errors = validate_applicant(&record, as_of()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("creditInfo.amount"));
        assert!(errors[1].contains("creditInfo.term"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut record = valid_record();
        record.personal_info.first_name = "  ".to_string();
        record.financial_info.income = -1.0;
        record.financial_info.expenses = f64::NAN;
        record.financial_info.employment_type = EmploymentType::Unrecognized(String::new());
        record.credit_info.annual_rate = -0.5;
        record.credit_info.credit_type = String::new();

        let errors = validate_applicant(&record, as_of()).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.iter().any(|e| e.contains("firstName")));
        assert!(errors.iter().any(|e| e.contains("finite")));
        assert!(errors.iter().any(|e| e.contains("employmentType")));
    }

    #[test]
    fn test_birth_date_in_future() {
        let mut record = valid_record();
        record.personal_info.date_of_birth = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();

        let errors = validate_applicant(&record, as_of()).unwrap_err();
        assert!(errors[0].contains("personalInfo.dob"));
    }
}
