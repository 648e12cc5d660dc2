pub mod bands;
pub mod formatter;

pub use bands::{FactorInsight, FactorStatus, ScoreBand};
pub use formatter::{
    format_breakdown, format_json, format_repayment, format_result, format_score, format_weights,
    should_use_colors,
};
