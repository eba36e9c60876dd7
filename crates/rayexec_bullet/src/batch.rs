use rayexec_error::{RayexecError, Result};

use crate::array::Array;
use crate::row::Row;

/// A batch of same-length arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Columns that make up this batch.
    cols: Vec<Array>,

    /// Number of rows in this batch.
    num_rows: usize,
}

impl Batch {
    /// A batch with no columns and no rows.
    ///
    /// Returned by readers to indicate they have nothing left to produce.
    pub const fn empty() -> Self {
        Batch {
            cols: Vec::new(),
            num_rows: 0,
        }
    }

    /// Create a new batch from some number of arrays.
    ///
    /// All arrays should have the same length.
    pub fn try_new(cols: impl IntoIterator<Item = Array>) -> Result<Self> {
        let cols: Vec<_> = cols.into_iter().collect();
        let len = match cols.first() {
            Some(arr) => arr.len(),
            None => return Ok(Self::empty()),
        };

        for (idx, col) in cols.iter().enumerate() {
            if col.len() != len {
                return Err(RayexecError::new(format!(
                    "Expected column length to be {len}, got {}. Column idx: {idx}",
                    col.len()
                )));
            }
        }

        Ok(Batch {
            cols,
            num_rows: len,
        })
    }

    /// Get the row at some index.
    pub fn row(&self, idx: usize) -> Option<Row> {
        if idx >= self.num_rows {
            return None;
        }

        self.cols.iter().map(|col| col.value(idx)).collect()
    }

    /// Iterate over all rows in the batch.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.num_rows).filter_map(|idx| self.row(idx))
    }

    pub fn columns(&self) -> &[Array] {
        &self.cols
    }

    pub fn num_columns(&self) -> usize {
        self.cols.len()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns true if this batch has neither columns nor rows.
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty() && self.num_rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{UInt32Array, Utf8Array};
    use crate::scalar::ScalarValue;

    #[test]
    fn try_new_mismatched_lengths() {
        let cols = [
            Array::UInt32(UInt32Array::from_iter([1, 2])),
            Array::Utf8(Utf8Array::from_iter(["a"])),
        ];
        Batch::try_new(cols).unwrap_err();
    }

    #[test]
    fn try_new_no_columns_is_empty() {
        let batch = Batch::try_new([]).unwrap();
        assert!(batch.is_empty());
        assert_eq!(Batch::empty(), batch);
    }

    #[test]
    fn rows() {
        let batch = Batch::try_new([
            Array::UInt32(UInt32Array::from_iter([1, 2])),
            Array::Utf8(Utf8Array::from_iter(["a", "b"])),
        ])
        .unwrap();

        assert_eq!(2, batch.num_rows());
        assert_eq!(2, batch.num_columns());
        assert!(!batch.is_empty());

        let row = batch.row(1).unwrap();
        assert_eq!(
            vec![ScalarValue::UInt32(2), ScalarValue::Utf8("b".into())],
            row.columns
        );
        assert_eq!(None, batch.row(2));
        assert_eq!(2, batch.rows().count());
    }
}
