pub mod capacity;
pub mod engine;
pub mod factors;
pub mod installment;
pub mod validation;
pub mod weights;

pub use capacity::{check_capacity, CapacityCheck};
pub use engine::{compute_score, score, FactorContribution, Rejection, ScoreCard, ScoreResult};
pub use factors::Factor;
pub use installment::{monthly_installment, repayment_summary, RepaymentSummary};
pub use validation::validate_weights;
pub use weights::{PartialWeights, WeightConfig, WeightKey};
