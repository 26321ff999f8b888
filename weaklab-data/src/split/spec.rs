use weaklab_core::WeakLabError;

/// One entry of a loosely-typed split list: an absolute count or a fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitSize {
    Count(usize),
    Fraction(f64),
}

impl From<usize> for SplitSize {
    fn from(count: usize) -> Self {
        SplitSize::Count(count)
    }
}

impl From<f64> for SplitSize {
    fn from(fraction: f64) -> Self {
        SplitSize::Fraction(fraction)
    }
}

/// Sizes of the K output splits, either as absolute counts (which must sum to
/// the number of samples) or as fractions (which must sum to exactly 1.0).
#[derive(Debug, Clone, PartialEq)]
pub enum SplitSpec {
    Counts(Vec<usize>),
    Fractions(Vec<f64>),
}

impl Default for SplitSpec {
    fn default() -> Self {
        SplitSpec::Fractions(vec![0.5, 0.5])
    }
}

impl From<Vec<usize>> for SplitSpec {
    fn from(counts: Vec<usize>) -> Self {
        SplitSpec::Counts(counts)
    }
}

impl From<Vec<f64>> for SplitSpec {
    fn from(fractions: Vec<f64>) -> Self {
        SplitSpec::Fractions(fractions)
    }
}

impl SplitSpec {
    /// Infers the spec kind from a list of sizes: all counts or all fractions.
    ///
    /// # Errors
    /// `WeakLabError::InvalidSplit` for an empty list or a mix of kinds.
    pub fn from_sizes(sizes: &[SplitSize]) -> Result<Self, WeakLabError> {
        if sizes.is_empty() {
            return Err(WeakLabError::invalid_split("Splits must not be empty."));
        }
        let counts: Option<Vec<usize>> = sizes
            .iter()
            .map(|size| match size {
                SplitSize::Count(c) => Some(*c),
                SplitSize::Fraction(_) => None,
            })
            .collect();
        if let Some(counts) = counts {
            return Ok(SplitSpec::Counts(counts));
        }
        let fractions: Option<Vec<f64>> = sizes
            .iter()
            .map(|size| match size {
                SplitSize::Fraction(f) => Some(*f),
                SplitSize::Count(_) => None,
            })
            .collect();
        fractions
            .map(SplitSpec::Fractions)
            .ok_or_else(|| WeakLabError::invalid_split("Splits must contain all ints or all floats."))
    }

    /// Number of splits K.
    pub fn num_splits(&self) -> usize {
        match self {
            SplitSpec::Counts(counts) => counts.len(),
            SplitSpec::Fractions(fractions) => fractions.len(),
        }
    }

    /// Validates the spec against `n` samples and returns one fraction per split.
    ///
    /// Counts must sum to `n` exactly and become `count / n`. Fractions must be
    /// finite, non-negative, and their left-to-right sum must be exactly `1.0`;
    /// no tolerance is applied.
    pub fn resolve(&self, n: usize) -> Result<Vec<f64>, WeakLabError> {
        if self.num_splits() == 0 {
            return Err(WeakLabError::invalid_split("Splits must not be empty."));
        }
        match self {
            SplitSpec::Counts(counts) => {
                let total = counts
                    .iter()
                    .try_fold(0usize, |acc, &c| acc.checked_add(c))
                    .ok_or_else(|| {
                        WeakLabError::invalid_split(format!(
                            "Provided split counts must sum to n ({}), but their sum overflows.",
                            n
                        ))
                    })?;
                if total != n {
                    return Err(WeakLabError::invalid_split(format!(
                        "Provided split counts must sum to n ({}), not {}.",
                        n, total
                    )));
                }
                if n == 0 {
                    return Err(WeakLabError::invalid_split(
                        "Cannot convert split counts to fractions for an empty input.",
                    ));
                }
                Ok(counts.iter().map(|&c| c as f64 / n as f64).collect())
            }
            SplitSpec::Fractions(fractions) => {
                if let Some(bad) = fractions.iter().find(|f| !f.is_finite() || **f < 0.0) {
                    return Err(WeakLabError::invalid_split(format!(
                        "Split fractions must be finite and non-negative, got {}.",
                        bad
                    )));
                }
                let total: f64 = fractions.iter().fold(0.0, |acc, f| acc + f);
                if total != 1.0 {
                    return Err(WeakLabError::invalid_split(format!(
                        "Split fractions must sum to 1.0, not {}.",
                        total
                    )));
                }
                Ok(fractions.clone())
            }
        }
    }
}

#[cfg(test)]
#[path = "spec_test.rs"]
mod tests;
