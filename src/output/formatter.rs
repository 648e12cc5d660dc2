use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use super::bands::{factor_insights, FactorInsight, ScoreBand, Tone};
use crate::applicant::ApplicantRecord;
use crate::scoring::{
    FactorContribution, PartialWeights, Rejection, RepaymentSummary, ScoreCard, ScoreResult,
    WeightConfig, WeightKey,
};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn paint(text: &str, tone: Tone, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match tone {
        Tone::Green => text.green().to_string(),
        Tone::Yellow => text.yellow().to_string(),
        Tone::Red => text.red().to_string(),
    }
}

/// Format a score as a whole number
pub fn format_score(score: f64) -> String {
    format!("{:.0}", score)
}

/// Signed delta with trailing zeros trimmed ("+100", "-15", "+2.5", "0")
pub fn format_delta(delta: f64) -> String {
    if delta == 0.0 {
        return "0".to_string();
    }
    let sign = if delta > 0.0 { "+" } else { "-" };
    let magnitude = format!("{:.2}", delta.abs());
    let trimmed = magnitude.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", sign, trimmed)
}

/// One line per factor: label, signed delta, running score and how it was reached
pub fn format_breakdown(breakdown: &[FactorContribution], use_colors: bool) -> String {
    breakdown
        .iter()
        .map(|c| {
            let delta = format!("{:>6}", format_delta(c.delta));
            let delta = if !use_colors || c.delta == 0.0 {
                delta
            } else if c.delta > 0.0 {
                delta.green().to_string()
            } else {
                delta.red().to_string()
            };
            let running = format!("{:>5}", format_score(c.after));
            let note = if use_colors {
                c.description.dimmed().to_string()
            } else {
                c.description.clone()
            };
            format!("  {:<18}{}  {}  {}", c.factor.label(), delta, running, note)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_insights(insights: &[FactorInsight], use_colors: bool) -> String {
    insights
        .iter()
        .map(|insight| {
            let status = paint(&insight.status.to_string(), insight.status.tone(), use_colors);
            format!("  {:<18}{}", insight.label, status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_accepted(
    card: &ScoreCard,
    record: &ApplicantRecord,
    as_of: NaiveDate,
    use_colors: bool,
) -> String {
    let band = ScoreBand::from_score(card.final_score);
    let headline = format!("{} ({})", format_score(card.final_score), band);
    let headline = if use_colors {
        paint(&headline, band.tone(), true).bold().to_string()
    } else {
        headline
    };

    let mut out = format!("Credit score: {}\n\n", headline);
    out.push_str(&format!("  {:<18}{:>6}\n", "Base score", format_score(card.base_score)));
    out.push_str(&format_breakdown(&card.breakdown, use_colors));
    if card.raw_score != card.final_score {
        out.push_str(&format!(
            "\n  {:<18}{:>6}  clamped from {}",
            "Final",
            format_score(card.final_score),
            format_score(card.raw_score)
        ));
    }
    out.push_str("\n\nFactors:\n");
    out.push_str(&format_insights(
        &factor_insights(record, record.age_on(as_of)),
        use_colors,
    ));
    out
}

fn format_rejected(rejection: &Rejection, use_colors: bool) -> String {
    let headline = "No credit capacity";
    let headline = if use_colors {
        headline.red().bold().to_string()
    } else {
        headline.to_string()
    };
    let reason = rejection
        .reason
        .lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("  {}", line) })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{}", headline, reason)
}

/// Human-readable rendering of a scoring result
pub fn format_result(
    result: &ScoreResult,
    record: &ApplicantRecord,
    as_of: NaiveDate,
    use_colors: bool,
) -> String {
    match result {
        ScoreResult::Accepted(card) => format_accepted(card, record, as_of, use_colors),
        ScoreResult::Rejected(rejection) => format_rejected(rejection, use_colors),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    as_of: NaiveDate,
    #[serde(flatten)]
    result: &'a ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    band: Option<ScoreBand>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    factors: Vec<FactorInsight>,
}

/// Pretty JSON rendering of a scoring result for scripting
pub fn format_json(
    result: &ScoreResult,
    record: &ApplicantRecord,
    as_of: NaiveDate,
) -> Result<String> {
    let (band, factors) = match result {
        ScoreResult::Accepted(card) => (
            Some(ScoreBand::from_score(card.final_score)),
            factor_insights(record, record.age_on(as_of)),
        ),
        ScoreResult::Rejected(_) => (None, Vec::new()),
    };
    let report = JsonReport {
        as_of,
        result,
        band,
        factors,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize result")
}

/// Table of effective weights; overridden ones are marked with an asterisk
pub fn format_weights(
    weights: &WeightConfig,
    overrides: &PartialWeights,
    use_colors: bool,
) -> String {
    WeightKey::ALL
        .into_iter()
        .map(|key| {
            let value = format!("{:>8}", format_delta(weights.get(key)).trim_start_matches('+'));
            if overrides.get(key).is_some() {
                let line = format!("{:<26}{} *", key.name(), value);
                if use_colors {
                    line.bold().to_string()
                } else {
                    line
                }
            } else {
                format!("{:<26}{}", key.name(), value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_repayment(principal: f64, term_months: u32, summary: &RepaymentSummary) -> String {
    format!(
        "Monthly installment: {:.2}\n\
         Total repaid over {} months: {:.2}\n\
         Total interest on {:.2}: {:.2}",
        summary.installment,
        term_months,
        summary.total_repaid,
        principal,
        summary.total_interest
    )
}
