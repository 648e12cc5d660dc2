use serde::Serialize;
use std::fmt;

use super::weights::WeightConfig;
use crate::applicant::{CreditHistory, Education, EmploymentType};

/// Cap on the bonus earned from the length of the credit history.
pub const HISTORY_LENGTH_CAP: f64 = 100.0;

/// Score-sense disposable income above which the high bonus applies.
pub const INCOME_HIGH_THRESHOLD: f64 = 2000.0;
/// Score-sense disposable income above which the medium bonus applies.
pub const INCOME_MED_THRESHOLD: f64 = 1000.0;
/// Score-sense disposable income below which the low-income penalty applies.
pub const INCOME_LOW_THRESHOLD: f64 = 500.0;

/// Ages strictly between these bounds earn the age bonus.
pub const AGE_BONUS_MIN_EXCLUSIVE: i32 = 25;
pub const AGE_BONUS_MAX_EXCLUSIVE: i32 = 60;

/// One adjustment in the score formula, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Income,
    Employment,
    Education,
    HistoryLength,
    OnTimePayments,
    DelayedPayments,
    CreditInquiries,
    Age,
}

impl Factor {
    pub const ORDER: [Factor; 8] = [
        Factor::Income,
        Factor::Employment,
        Factor::Education,
        Factor::HistoryLength,
        Factor::OnTimePayments,
        Factor::DelayedPayments,
        Factor::CreditInquiries,
        Factor::Age,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Factor::Income => "Income",
            Factor::Employment => "Employment",
            Factor::Education => "Education",
            Factor::HistoryLength => "History length",
            Factor::OnTimePayments => "On-time payments",
            Factor::DelayedPayments => "Delayed payments",
            Factor::CreditInquiries => "Credit inquiries",
            Factor::Age => "Age",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed adjustment with a short note on how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub delta: f64,
    pub description: String,
}

impl Adjustment {
    fn new(delta: f64, description: impl Into<String>) -> Self {
        Self {
            delta,
            description: description.into(),
        }
    }
}

/// Income bracket on income minus expenses, checked high to low.
///
/// This deliberately ignores the loan installment and subsistence floor; the
/// capacity gate has already judged affordability.
pub fn income_adjustment(income: f64, expenses: f64, weights: &WeightConfig) -> Adjustment {
    let disposable = income - expenses;
    if disposable > INCOME_HIGH_THRESHOLD {
        Adjustment::new(
            weights.income_high_bonus,
            format!("disposable {:.2} > {}", disposable, INCOME_HIGH_THRESHOLD),
        )
    } else if disposable > INCOME_MED_THRESHOLD {
        Adjustment::new(
            weights.income_med_bonus,
            format!("disposable {:.2} > {}", disposable, INCOME_MED_THRESHOLD),
        )
    } else if disposable < INCOME_LOW_THRESHOLD {
        Adjustment::new(
            -weights.income_low_penalty,
            format!("disposable {:.2} < {}", disposable, INCOME_LOW_THRESHOLD),
        )
    } else {
        Adjustment::new(
            0.0,
            format!(
                "disposable {:.2} within {}-{}",
                disposable, INCOME_LOW_THRESHOLD, INCOME_MED_THRESHOLD
            ),
        )
    }
}

pub fn employment_adjustment(employment: &EmploymentType, weights: &WeightConfig) -> Adjustment {
    let delta = match employment {
        EmploymentType::ContractEmployment => weights.contract_bonus,
        EmploymentType::B2b => weights.b2b_bonus,
        EmploymentType::CivilContract => weights.civil_contract_bonus,
        EmploymentType::Pension => weights.pension_bonus,
        EmploymentType::Unemployed => -weights.unemployed_penalty,
        EmploymentType::Other => weights.other_employment_bonus,
        EmploymentType::Unrecognized(raw) => {
            return Adjustment::new(0.0, format!("unrecognized '{}'", raw));
        }
    };
    Adjustment::new(delta, employment.label())
}

pub fn education_adjustment(education: &Education, weights: &WeightConfig) -> Adjustment {
    let delta = match education {
        Education::Higher => weights.higher_education_bonus,
        Education::Secondary => weights.secondary_education_bonus,
        Education::Vocational => weights.vocational_education_bonus,
        Education::Primary => weights.primary_education_bonus,
        Education::Unrecognized(raw) => {
            return Adjustment::new(0.0, format!("unrecognized '{}'", raw));
        }
    };
    Adjustment::new(delta, education.label())
}

pub fn history_length_adjustment(history: &CreditHistory, weights: &WeightConfig) -> Adjustment {
    let months = history.history_length_months;
    let bonus = (f64::from(months) * weights.history_length_bonus).min(HISTORY_LENGTH_CAP);
    Adjustment::new(
        bonus,
        format!(
            "{} months x {}, max {}",
            months, weights.history_length_bonus, HISTORY_LENGTH_CAP
        ),
    )
}

pub fn on_time_adjustment(history: &CreditHistory, weights: &WeightConfig) -> Adjustment {
    let count = history.paid_on_time;
    Adjustment::new(
        f64::from(count) * weights.on_time_multiplier,
        format!("{} x {}", count, weights.on_time_multiplier),
    )
}

pub fn delay_adjustment(history: &CreditHistory, weights: &WeightConfig) -> Adjustment {
    let count = history.paid_with_delay;
    Adjustment::new(
        -(f64::from(count) * weights.delay_multiplier),
        format!("{} x {}", count, weights.delay_multiplier),
    )
}

pub fn inquiry_adjustment(history: &CreditHistory, weights: &WeightConfig) -> Adjustment {
    let count = history.credit_inquiries;
    Adjustment::new(
        -(f64::from(count) * weights.inquiry_penalty),
        format!("{} x {}", count, weights.inquiry_penalty),
    )
}

pub fn age_adjustment(age: i32, weights: &WeightConfig) -> Adjustment {
    if age > AGE_BONUS_MIN_EXCLUSIVE && age < AGE_BONUS_MAX_EXCLUSIVE {
        Adjustment::new(
            weights.age_bonus,
            format!(
                "{} years, within {}-{}",
                age, AGE_BONUS_MIN_EXCLUSIVE, AGE_BONUS_MAX_EXCLUSIVE
            ),
        )
    } else {
        Adjustment::new(
            0.0,
            format!(
                "{} years, outside {}-{}",
                age, AGE_BONUS_MIN_EXCLUSIVE, AGE_BONUS_MAX_EXCLUSIVE
            ),
        )
    }
}
