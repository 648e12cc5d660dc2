//! Retail credit scoring.
//!
//! An applicant is first run through a creditworthiness gate (disposable
//! income after the loan installment and a subsistence floor). Only applicants
//! who pass receive a weighted score between 0 and 850, with a per-factor
//! breakdown of how it was reached.

pub mod applicant;
pub mod config;
pub mod output;
pub mod scoring;
pub mod telemetry;
