use crate::{Result, TrainError};

/// A fixed, ordered sequence of `(x, y)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<(f32, f32)>,
}

impl Dataset {
    /// Returns a new `Dataset`.
    ///
    /// # Errors
    /// `TrainError::InvalidInput` if `points` is empty.
    pub fn new(points: Vec<(f32, f32)>) -> Result<Self> {
        if points.is_empty() {
            return Err(TrainError::InvalidInput("the dataset has no points"));
        }

        Ok(Self { points })
    }

    /// Builds a dataset out of `[x, y]` rows.
    ///
    /// # Errors
    /// * `TrainError::ShapeMismatch` if a row doesn't hold exactly one feature and one target.
    /// * `TrainError::InvalidInput` if there are no rows.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let points = rows
            .iter()
            .map(|row| match row.as_ref() {
                &[x, y] => Ok((x, y)),
                row => Err(TrainError::ShapeMismatch {
                    what: "dataset row",
                    got: row.len(),
                    expected: 2,
                }),
            })
            .collect::<Result<_>>()?;

        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the points in their original order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.points.iter().copied()
    }
}
