/// Fixed monthly payment for a loan.
///
/// A zero rate is repaid straight-line (`principal / term`). Any other rate is
/// converted to a monthly rate and run through the annuity formula. Callers
/// guarantee `term_months >= 3`, so neither branch can divide by zero.
pub fn monthly_installment(principal: f64, term_months: u32, annual_rate_percent: f64) -> f64 {
    let term = f64::from(term_months);
    if annual_rate_percent == 0.0 {
        return principal / term;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powf(term);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Totals over the whole loan for a given monthly installment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepaymentSummary {
    pub installment: f64,
    pub total_repaid: f64,
    pub total_interest: f64,
}

pub fn repayment_summary(
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
) -> RepaymentSummary {
    let installment = monthly_installment(principal, term_months, annual_rate_percent);
    let total_repaid = installment * f64::from(term_months);
    RepaymentSummary {
        installment,
        total_repaid,
        total_interest: total_repaid - principal,
    }
}
