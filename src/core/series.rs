use std::iter::FusedIterator;

use super::engine::project_years;
use super::types::{ProjectionInput, YearlyProjection};

/// Year-by-year projection for `1..=input.years`.
///
/// Every year is an independent closed-form evaluation, so the iterator can be
/// cloned or rebuilt from the same input and yields identical snapshots.
#[derive(Clone, Debug)]
pub struct ProjectionSeries {
    input: ProjectionInput,
    next_year: u32,
}

impl ProjectionSeries {
    pub fn new(input: ProjectionInput) -> Self {
        Self {
            input,
            next_year: 1,
        }
    }
}

impl Iterator for ProjectionSeries {
    type Item = YearlyProjection;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_year > self.input.years {
            return None;
        }
        let year = self.next_year;
        self.next_year += 1;
        Some(YearlyProjection {
            year,
            result: project_years(&self.input, year),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.input.years.saturating_sub(self.next_year - 1) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProjectionSeries {}

impl FusedIterator for ProjectionSeries {}

pub fn build_series(input: &ProjectionInput) -> Vec<YearlyProjection> {
    ProjectionSeries::new(*input).collect()
}
