use chrono::NaiveDate;
use serde::Serialize;

use super::capacity::{check_capacity, CapacityCheck};
use super::factors::{self, Adjustment, Factor};
use super::weights::WeightConfig;
use crate::applicant::ApplicantRecord;

pub const BASE_SCORE: f64 = 400.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 850.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorContribution {
    pub factor: Factor,
    pub delta: f64,
    pub description: String, // e.g. "24 months x 2, max 100"
    pub before: f64,         // Running score before this factor
    pub after: f64,          // Running score after this factor
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub base_score: f64,
    /// Running total before clamping.
    pub raw_score: f64,
    pub final_score: f64,
    pub breakdown: Vec<FactorContribution>,
}

impl ScoreCard {
    pub fn contribution(&self, factor: Factor) -> Option<&FactorContribution> {
        self.breakdown.iter().find(|c| c.factor == factor)
    }

    pub fn delta(&self, factor: Factor) -> f64 {
        self.contribution(factor).map_or(0.0, |c| c.delta)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub reason: String,
    pub shortfall: f64,
    pub capacity: CapacityCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScoreResult {
    Rejected(Rejection),
    Accepted(ScoreCard),
}

impl ScoreResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ScoreResult::Accepted(_))
    }

    pub fn final_score(&self) -> Option<f64> {
        match self {
            ScoreResult::Accepted(card) => Some(card.final_score),
            ScoreResult::Rejected(_) => None,
        }
    }
}

/// Score an applicant: the capacity gate first, the weighted score only if it passes.
///
/// Rejected applicants never receive a score.
pub fn score(record: &ApplicantRecord, weights: &WeightConfig, as_of: NaiveDate) -> ScoreResult {
    let capacity = check_applicant_capacity(record, weights);

    if !capacity.has_capacity() {
        tracing::debug!(
            shortfall = capacity.shortfall,
            installment = capacity.installment,
            "applicant rejected by capacity gate"
        );
        return ScoreResult::Rejected(Rejection {
            reason: capacity.message(),
            shortfall: capacity.shortfall,
            capacity,
        });
    }

    let card = compute_score(record, weights, as_of);
    tracing::debug!(
        final_score = card.final_score,
        raw_score = card.raw_score,
        "applicant scored"
    );
    ScoreResult::Accepted(card)
}

/// Run the capacity gate on the loan the applicant asked for.
pub fn check_applicant_capacity(record: &ApplicantRecord, weights: &WeightConfig) -> CapacityCheck {
    let credit = &record.credit_info;
    check_capacity(
        &record.financial_info,
        record.personal_info.dependents,
        credit.amount,
        credit.term,
        credit.annual_rate,
        weights,
    )
}

/// Weighted score from the base, one contribution per factor, clamped to 0-850.
pub fn compute_score(
    record: &ApplicantRecord,
    weights: &WeightConfig,
    as_of: NaiveDate,
) -> ScoreCard {
    let financial = &record.financial_info;
    let history = &record.credit_history;

    let adjustments = Factor::ORDER.map(|factor| {
        let adjustment = match factor {
            Factor::Income => {
                factors::income_adjustment(financial.income, financial.expenses, weights)
            }
            Factor::Employment => {
                factors::employment_adjustment(&financial.employment_type, weights)
            }
            Factor::Education => {
                factors::education_adjustment(&record.personal_info.education, weights)
            }
            Factor::HistoryLength => factors::history_length_adjustment(history, weights),
            Factor::OnTimePayments => factors::on_time_adjustment(history, weights),
            Factor::DelayedPayments => factors::delay_adjustment(history, weights),
            Factor::CreditInquiries => factors::inquiry_adjustment(history, weights),
            Factor::Age => factors::age_adjustment(record.age_on(as_of), weights),
        };
        (factor, adjustment)
    });

    let mut running = BASE_SCORE;
    let mut breakdown = Vec::with_capacity(adjustments.len());
    for (factor, Adjustment { delta, description }) in adjustments {
        let before = running;
        running += delta;
        breakdown.push(FactorContribution {
            factor,
            delta,
            description,
            before,
            after: running,
        });
    }

    ScoreCard {
        base_score: BASE_SCORE,
        raw_score: running,
        final_score: running.clamp(MIN_SCORE, MAX_SCORE),
        breakdown,
    }
}
