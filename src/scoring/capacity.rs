use serde::Serialize;

use super::installment::monthly_installment;
use super::weights::WeightConfig;
use crate::applicant::FinancialInfo;

/// Affordability of a loan against the applicant's household budget.
///
/// Carries every figure used in the decision so a caller can explain a
/// rejection without recomputing anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityCheck {
    pub income: f64,
    pub expenses: f64,
    pub installment: f64,
    pub family_size: u32,
    pub subsistence_per_person: f64,
    pub subsistence_floor: f64,
    /// Income left after expenses, the installment and the subsistence floor.
    pub disposable_income: f64,
    /// How far `disposable_income` falls below zero; 0 when affordable.
    pub shortfall: f64,
}

impl CapacityCheck {
    /// Zero disposable income still passes.
    pub fn has_capacity(&self) -> bool {
        self.disposable_income >= 0.0
    }

    /// Multi-line explanation of the figures behind the verdict.
    pub fn message(&self) -> String {
        let mut message = format!(
            "Income: {:.2}\n\
             Expenses: {:.2}\n\
             Loan installment: {:.2}\n\
             Subsistence floor ({} x {:.2}): {:.2}\n\
             \n\
             Disposable income: {:.2}",
            self.income,
            self.expenses,
            self.installment,
            self.family_size,
            self.subsistence_per_person,
            self.subsistence_floor,
            self.disposable_income,
        );
        if !self.has_capacity() {
            message.push_str(&format!("\n\nShortfall: {:.2}", self.shortfall));
        }
        message
    }
}

/// Run the creditworthiness gate.
///
/// The household is the applicant plus `dependents`, each needing
/// `min_subsistence_per_person` a month on top of expenses and the installment.
pub fn check_capacity(
    financial: &FinancialInfo,
    dependents: u32,
    loan_amount: f64,
    loan_term: u32,
    annual_rate: f64,
    weights: &WeightConfig,
) -> CapacityCheck {
    let installment = monthly_installment(loan_amount, loan_term, annual_rate);
    let family_size = dependents.saturating_add(1);
    let subsistence_floor = weights.min_subsistence_per_person * f64::from(family_size);
    let disposable_income =
        financial.income - financial.expenses - installment - subsistence_floor;
    let shortfall = if disposable_income < 0.0 {
        disposable_income.abs()
    } else {
        0.0
    };

    CapacityCheck {
        income: financial.income,
        expenses: financial.expenses,
        installment,
        family_size,
        subsistence_per_person: weights.min_subsistence_per_person,
        subsistence_floor,
        disposable_income,
        shortfall,
    }
}
