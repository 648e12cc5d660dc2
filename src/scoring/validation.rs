use super::weights::{WeightConfig, WeightKey};

/// Validate the effective weights at startup.
/// Returns all validation errors at once (not just the first).
///
/// Penalties are stored as positive amounts and subtracted, so a negative
/// weight would silently flip a penalty into a bonus.
pub fn validate_weights(weights: &WeightConfig) -> Result<(), Vec<String>> {
    let errors: Vec<String> = WeightKey::ALL
        .into_iter()
        .filter_map(|key| {
            let value = weights.get(key);
            if !value.is_finite() {
                Some(format!("weights.{}: must be a finite number", key))
            } else if value < 0.0 {
                Some(format!("weights.{}: must be non-negative (got {})", key, value))
            } else {
                None
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(validate_weights(&WeightConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_weights_are_valid() {
        let zeroed = WeightKey::ALL
            .into_iter()
            .fold(WeightConfig::default(), |w, key| w.with(key, 0.0));
        assert!(validate_weights(&zeroed).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let weights = WeightConfig::default().with(WeightKey::DelayMultiplier, -5.0);
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("weights.delayMultiplier"));
    }

    #[test]
    fn test_collects_all_errors() {
        let weights = WeightConfig::default()
            .with(WeightKey::AgeBonus, f64::NAN)
            .with(WeightKey::MinSubsistencePerPerson, -1.0)
            .with(WeightKey::InquiryPenalty, f64::INFINITY);
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("ageBonus") && e.contains("finite")));
        assert!(errors.iter().any(|e| e.contains("minSubsistencePerPerson")));
    }
}
