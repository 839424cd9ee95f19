//! Sequential output file names.

/// Number of decimal digits in `n`. Zero has one digit.
pub fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Numbers files `1..=n` within a single output directory, zero-padded to the width of `n`.
#[derive(Debug, Clone)]
pub struct NamingCounter {
    next: usize,
    width: usize,
}

impl NamingCounter {
    /// `total` is the number of files in the scope, which fixes the padding width.
    pub fn new(total: usize) -> Self {
        Self {
            next: 1,
            width: digit_count(total),
        }
    }

    /// Returns the next zero-padded number and advances the counter.
    pub fn next_number(&mut self) -> String {
        let number = format!("{:0width$}", self.next, width = self.width);
        self.next += 1;
        number
    }

    /// `<label>_<number>` without an extension.
    pub fn next_labeled(&mut self, label: &str) -> String {
        format!("{label}_{}", self.next_number())
    }
}
