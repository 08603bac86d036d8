//! Session statistics.

use crate::{Operation, Record};

/// Statistics over a set of calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of calculation attempts.
    pub total: usize,
    /// Number of successful calculations.
    pub successful: usize,
    /// Number of failed calculations.
    pub failed: usize,
    /// The most frequent operation among the successful calculations.
    ///
    /// On a tie, the operation used first wins.
    pub most_used: Option<Operation>,
}

impl Summary {
    /// Compute the statistics of the given records.
    pub fn of<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut summary = Self::default();
        // counts in order of first use
        let mut counts: Vec<(Operation, usize)> = Vec::new();

        for record in records {
            summary.total += 1;
            if !record.is_success() {
                summary.failed += 1;
                continue;
            }
            summary.successful += 1;
            match counts.iter_mut().find(|(op, _)| *op == record.operation) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.operation, 1)),
            }
        }

        summary.most_used = counts
            .iter()
            .fold(None, |best: Option<(Operation, usize)>, &(op, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((op, count)),
            })
            .map(|(op, _)| op);
        summary
    }

    /// Whether there were no calculations at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
