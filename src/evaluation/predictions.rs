use crate::core::{ConfigurationError, validate_key};

/// Keys that would collide with the residual histograms of `a`, `b` and `z`.
const RESERVED_KEYS: [&str; 3] = ["a", "b", "z"];

/// Checks that `key` can name an estimator's histograms.
pub fn check_estimator_key(key: &str) -> Result<(), ConfigurationError> {
    validate_key(key)?;
    if RESERVED_KEYS.contains(&key) {
        return Err(ConfigurationError::InvalidEstimatorKey(key.to_string()));
    }
    Ok(())
}

/// Per-estimator prediction sequences, in insertion order.
///
/// Each sequence is expected to align index-for-index with the test dataset
/// it will be evaluated against; that is checked by the evaluator, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predictions {
    entries: Vec<(String, Vec<f64>)>,
}

impl Predictions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the predictions of estimator `key`. Keys follow `[a-z0-9_]+`, must
    /// be unique, and may not be `a`, `b` or `z`.
    pub fn insert<K: Into<String>>(
        &mut self,
        key: K,
        values: Vec<f64>,
    ) -> Result<(), ConfigurationError> {
        let key = key.into();
        check_estimator_key(&key)?;
        if self.get(&key).is_some() {
            return Err(ConfigurationError::DuplicateEstimatorKey(key));
        }
        self.entries.push((key, values));
        Ok(())
    }

    pub fn with<K: Into<String>>(
        mut self,
        key: K,
        values: Vec<f64>,
    ) -> Result<Self, ConfigurationError> {
        self.insert(key, values)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let p = Predictions::new()
            .with("smlp", vec![1.0])
            .unwrap()
            .with("bdt", vec![2.0])
            .unwrap();
        assert_eq!(p.keys().collect::<Vec<_>>(), vec!["smlp", "bdt"]);
        assert_eq!(p.get("bdt"), Some(&[2.0][..]));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn rejects_bad_keys() {
        let mut p = Predictions::new();
        p.insert("bdt", vec![]).unwrap();
        assert_eq!(
            p.insert("bdt", vec![]).unwrap_err(),
            ConfigurationError::DuplicateEstimatorKey("bdt".into())
        );
        assert!(p.insert("BDT", vec![]).is_err());
        assert!(p.insert("z", vec![]).is_err());
        assert!(p.insert("", vec![]).is_err());
    }
}
