//! Display-only classifications derived from a result.
//!
//! None of these feed back into scoring; they only decide how a result is
//! described to a person.

use serde::Serialize;
use std::fmt;

use crate::applicant::{ApplicantRecord, EmploymentType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    VeryGood,
    Good,
    Average,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 750.0 {
            ScoreBand::Excellent
        } else if score >= 700.0 {
            ScoreBand::VeryGood
        } else if score >= 600.0 {
            ScoreBand::Good
        } else if score >= 500.0 {
            ScoreBand::Average
        } else {
            ScoreBand::Low
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::VeryGood => "Very good",
            ScoreBand::Good => "Good",
            ScoreBand::Average => "Average",
            ScoreBand::Low => "Low",
        }
    }

    /// Traffic-light colour: green from 700, yellow from 600, red below.
    pub fn tone(self) -> Tone {
        match self {
            ScoreBand::Excellent | ScoreBand::VeryGood => Tone::Green,
            ScoreBand::Good => Tone::Yellow,
            ScoreBand::Average | ScoreBand::Low => Tone::Red,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorStatus {
    Good,
    Average,
    Poor,
}

impl FactorStatus {
    pub fn tone(self) -> Tone {
        match self {
            FactorStatus::Good => Tone::Green,
            FactorStatus::Average => Tone::Yellow,
            FactorStatus::Poor => Tone::Red,
        }
    }
}

impl fmt::Display for FactorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FactorStatus::Good => "good",
            FactorStatus::Average => "average",
            FactorStatus::Poor => "poor",
        };
        f.write_str(s)
    }
}

/// Qualitative view of one aspect of the applicant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorInsight {
    pub label: &'static str,
    pub status: FactorStatus,
}

pub fn payment_history_status(paid_with_delay: u32) -> FactorStatus {
    match paid_with_delay {
        0 => FactorStatus::Good,
        1 => FactorStatus::Average,
        _ => FactorStatus::Poor,
    }
}

/// Expenses as a share of income.
pub fn debt_load_status(income: f64, expenses: f64) -> FactorStatus {
    if income <= 0.0 {
        return FactorStatus::Poor;
    }
    let ratio = expenses / income;
    if ratio < 0.3 {
        FactorStatus::Good
    } else if ratio < 0.5 {
        FactorStatus::Average
    } else {
        FactorStatus::Poor
    }
}

pub fn age_status(age: i32) -> FactorStatus {
    if age > 30 {
        FactorStatus::Good
    } else if age > 25 {
        FactorStatus::Average
    } else {
        FactorStatus::Poor
    }
}

pub fn employment_status(employment: &EmploymentType) -> FactorStatus {
    match employment {
        EmploymentType::ContractEmployment | EmploymentType::B2b => FactorStatus::Good,
        EmploymentType::CivilContract | EmploymentType::Pension => FactorStatus::Average,
        EmploymentType::Unemployed | EmploymentType::Other | EmploymentType::Unrecognized(_) => {
            FactorStatus::Poor
        }
    }
}

pub fn factor_insights(record: &ApplicantRecord, age: i32) -> Vec<FactorInsight> {
    let financial = &record.financial_info;
    vec![
        FactorInsight {
            label: "Payment history",
            status: payment_history_status(record.credit_history.paid_with_delay),
        },
        FactorInsight {
            label: "Debt load",
            status: debt_load_status(financial.income, financial.expenses),
        },
        FactorInsight {
            label: "Age",
            status: age_status(age),
        },
        FactorInsight {
            label: "Employment",
            status: employment_status(&financial.employment_type),
        },
    ]
}
