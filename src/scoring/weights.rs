use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Complete set of scoring weights.
///
/// Every bonus and penalty in the score formula, plus the per-person
/// subsistence amount used by the capacity gate. Penalties are stored as
/// positive numbers and subtracted by the engine.
///
/// Example YAML (keys as stored by the settings layer):
/// ```yaml
/// incomeHighBonus: 100
/// contractBonus: 50
/// ageBonus: 30
/// minSubsistencePerPerson: 800
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfig {
    pub income_high_bonus: f64,
    pub income_med_bonus: f64,
    pub income_low_penalty: f64,

    pub contract_bonus: f64,
    pub b2b_bonus: f64,
    pub civil_contract_bonus: f64,
    pub pension_bonus: f64,
    pub unemployed_penalty: f64,
    pub other_employment_bonus: f64,

    pub higher_education_bonus: f64,
    pub secondary_education_bonus: f64,
    pub vocational_education_bonus: f64,
    pub primary_education_bonus: f64,

    pub on_time_multiplier: f64,
    pub delay_multiplier: f64,
    pub age_bonus: f64,
    pub history_length_bonus: f64,
    pub inquiry_penalty: f64,

    pub min_subsistence_per_person: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            income_high_bonus: 100.0,
            income_med_bonus: 50.0,
            income_low_penalty: 50.0,
            contract_bonus: 50.0,
            b2b_bonus: 40.0,
            civil_contract_bonus: 20.0,
            pension_bonus: 30.0,
            unemployed_penalty: 100.0,
            other_employment_bonus: 0.0,
            higher_education_bonus: 50.0,
            secondary_education_bonus: 30.0,
            vocational_education_bonus: 15.0,
            primary_education_bonus: 0.0,
            on_time_multiplier: 10.0,
            delay_multiplier: 20.0,
            age_bonus: 30.0,
            history_length_bonus: 2.0,
            inquiry_penalty: 15.0,
            min_subsistence_per_person: 800.0,
        }
    }
}

impl WeightConfig {
    /// Read a weight by key.
    pub fn get(&self, key: WeightKey) -> f64 {
        *self.slot(key)
    }

    /// Return a copy with `key` set to `value`.
    pub fn with(mut self, key: WeightKey, value: f64) -> Self {
        *self.slot_mut(key) = value;
        self
    }

    fn slot(&self, key: WeightKey) -> &f64 {
        match key {
            WeightKey::IncomeHighBonus => &self.income_high_bonus,
            WeightKey::IncomeMedBonus => &self.income_med_bonus,
            WeightKey::IncomeLowPenalty => &self.income_low_penalty,
            WeightKey::ContractBonus => &self.contract_bonus,
            WeightKey::B2bBonus => &self.b2b_bonus,
            WeightKey::CivilContractBonus => &self.civil_contract_bonus,
            WeightKey::PensionBonus => &self.pension_bonus,
            WeightKey::UnemployedPenalty => &self.unemployed_penalty,
            WeightKey::OtherEmploymentBonus => &self.other_employment_bonus,
            WeightKey::HigherEducationBonus => &self.higher_education_bonus,
            WeightKey::SecondaryEducationBonus => &self.secondary_education_bonus,
            WeightKey::VocationalEducationBonus => &self.vocational_education_bonus,
            WeightKey::PrimaryEducationBonus => &self.primary_education_bonus,
            WeightKey::OnTimeMultiplier => &self.on_time_multiplier,
            WeightKey::DelayMultiplier => &self.delay_multiplier,
            WeightKey::AgeBonus => &self.age_bonus,
            WeightKey::HistoryLengthBonus => &self.history_length_bonus,
            WeightKey::InquiryPenalty => &self.inquiry_penalty,
            WeightKey::MinSubsistencePerPerson => &self.min_subsistence_per_person,
        }
    }

    fn slot_mut(&mut self, key: WeightKey) -> &mut f64 {
        match key {
            WeightKey::IncomeHighBonus => &mut self.income_high_bonus,
            WeightKey::IncomeMedBonus => &mut self.income_med_bonus,
            WeightKey::IncomeLowPenalty => &mut self.income_low_penalty,
            WeightKey::ContractBonus => &mut self.contract_bonus,
            WeightKey::B2bBonus => &mut self.b2b_bonus,
            WeightKey::CivilContractBonus => &mut self.civil_contract_bonus,
            WeightKey::PensionBonus => &mut self.pension_bonus,
            WeightKey::UnemployedPenalty => &mut self.unemployed_penalty,
            WeightKey::OtherEmploymentBonus => &mut self.other_employment_bonus,
            WeightKey::HigherEducationBonus => &mut self.higher_education_bonus,
            WeightKey::SecondaryEducationBonus => &mut self.secondary_education_bonus,
            WeightKey::VocationalEducationBonus => &mut self.vocational_education_bonus,
            WeightKey::PrimaryEducationBonus => &mut self.primary_education_bonus,
            WeightKey::OnTimeMultiplier => &mut self.on_time_multiplier,
            WeightKey::DelayMultiplier => &mut self.delay_multiplier,
            WeightKey::AgeBonus => &mut self.age_bonus,
            WeightKey::HistoryLengthBonus => &mut self.history_length_bonus,
            WeightKey::InquiryPenalty => &mut self.inquiry_penalty,
            WeightKey::MinSubsistencePerPerson => &mut self.min_subsistence_per_person,
        }
    }
}

/// Name of a single weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeightKey {
    IncomeHighBonus,
    IncomeMedBonus,
    IncomeLowPenalty,
    ContractBonus,
    B2bBonus,
    CivilContractBonus,
    PensionBonus,
    UnemployedPenalty,
    OtherEmploymentBonus,
    HigherEducationBonus,
    SecondaryEducationBonus,
    VocationalEducationBonus,
    PrimaryEducationBonus,
    OnTimeMultiplier,
    DelayMultiplier,
    AgeBonus,
    HistoryLengthBonus,
    InquiryPenalty,
    MinSubsistencePerPerson,
}

impl WeightKey {
    pub const ALL: [WeightKey; 19] = [
        WeightKey::IncomeHighBonus,
        WeightKey::IncomeMedBonus,
        WeightKey::IncomeLowPenalty,
        WeightKey::ContractBonus,
        WeightKey::B2bBonus,
        WeightKey::CivilContractBonus,
        WeightKey::PensionBonus,
        WeightKey::UnemployedPenalty,
        WeightKey::OtherEmploymentBonus,
        WeightKey::HigherEducationBonus,
        WeightKey::SecondaryEducationBonus,
        WeightKey::VocationalEducationBonus,
        WeightKey::PrimaryEducationBonus,
        WeightKey::OnTimeMultiplier,
        WeightKey::DelayMultiplier,
        WeightKey::AgeBonus,
        WeightKey::HistoryLengthBonus,
        WeightKey::InquiryPenalty,
        WeightKey::MinSubsistencePerPerson,
    ];

    /// Stored (camelCase) name of the key.
    pub fn name(self) -> &'static str {
        match self {
            WeightKey::IncomeHighBonus => "incomeHighBonus",
            WeightKey::IncomeMedBonus => "incomeMedBonus",
            WeightKey::IncomeLowPenalty => "incomeLowPenalty",
            WeightKey::ContractBonus => "contractBonus",
            WeightKey::B2bBonus => "b2bBonus",
            WeightKey::CivilContractBonus => "civilContractBonus",
            WeightKey::PensionBonus => "pensionBonus",
            WeightKey::UnemployedPenalty => "unemployedPenalty",
            WeightKey::OtherEmploymentBonus => "otherEmploymentBonus",
            WeightKey::HigherEducationBonus => "higherEducationBonus",
            WeightKey::SecondaryEducationBonus => "secondaryEducationBonus",
            WeightKey::VocationalEducationBonus => "vocationalEducationBonus",
            WeightKey::PrimaryEducationBonus => "primaryEducationBonus",
            WeightKey::OnTimeMultiplier => "onTimeMultiplier",
            WeightKey::DelayMultiplier => "delayMultiplier",
            WeightKey::AgeBonus => "ageBonus",
            WeightKey::HistoryLengthBonus => "historyLengthBonus",
            WeightKey::InquiryPenalty => "inquiryPenalty",
            WeightKey::MinSubsistencePerPerson => "minSubsistencePerPerson",
        }
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeightKey {
    type Err = String;

    /// Accepts the stored camelCase name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        WeightKey::ALL
            .into_iter()
            .find(|key| key.name().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown weight '{}'", s))
    }
}

/// Sparse weight overrides.
///
/// Only the keys present here differ from the defaults. Unknown keys are
/// dropped on load so an old or hand-edited settings file never zeroes a
/// weight; their names are kept in `ignored_keys` for reporting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct PartialWeights {
    values: BTreeMap<WeightKey, f64>,
    ignored: Vec<String>,
}

impl PartialWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: WeightKey, value: f64) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: WeightKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names that did not match any weight when these overrides were loaded.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeightKey, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Build the effective configuration: defaults overlaid key by key.
    pub fn merge_with_defaults(&self) -> WeightConfig {
        self.merge_over(WeightConfig::default())
    }

    /// Overlay these overrides on `base`, producing a new configuration.
    pub fn merge_over(&self, base: WeightConfig) -> WeightConfig {
        self.iter()
            .fold(base, |config, (key, value)| config.with(key, value))
    }
}

impl From<BTreeMap<String, f64>> for PartialWeights {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        let mut partial = PartialWeights::new();
        for (name, value) in raw {
            match name.parse::<WeightKey>() {
                Ok(key) => partial.set(key, value),
                Err(_) => partial.ignored.push(name),
            }
        }
        partial
    }
}

impl From<PartialWeights> for BTreeMap<String, f64> {
    fn from(partial: PartialWeights) -> Self {
        partial
            .iter()
            .map(|(key, value)| (key.name().to_string(), value))
            .collect()
    }
}
