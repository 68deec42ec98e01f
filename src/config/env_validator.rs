//! Environment variable validation
//!
//! Invalid values never abort a run: a `tracing` warning naming the variable,
//! the accepted values and (when close enough) a suggested spelling is
//! emitted, and the current value is kept.

use tracing::warn;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, falling back to `fallback` with a warning
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                warn!(var = self.var_name, "{}", self.rejection(value));
                fallback
            }
        }
    }

    /// Warning text for a rejected `value`
    pub fn rejection(&self, value: &str) -> String {
        let hint = self
            .closest(value)
            .map(|s| format!(". Did you mean '{s}'?"))
            .unwrap_or_default();
        format!(
            "invalid {} value '{}'{} (valid values: {})",
            self.var_name,
            value,
            hint,
            self.valid_values.join(", ")
        )
    }

    /// Closest valid value within two edits (exact matches excluded)
    fn closest(&self, value: &str) -> Option<&'a str> {
        let input = value.to_lowercase();
        self.valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist)
            .filter(|(_, dist)| (1..=2).contains(dist))
            .map(|(valid, _)| valid)
    }
}

/// Levenshtein distance over bytes, used for typo suggestions
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
