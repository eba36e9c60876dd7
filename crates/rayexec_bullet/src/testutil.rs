//! Utilities useful for testing.
//!
//! Note these aren't placed behind an `cfg[(test)]` annotation since they
//! should be usable outside of the crate.

use crate::batch::Batch;
use crate::row::OwnedRow;

/// Asserts that two batches are logically equal, comparing row by row.
pub fn assert_batches_eq(a: &Batch, b: &Batch) {
    assert_eq!(
        a.num_columns(),
        b.num_columns(),
        "Batches have different number of columns"
    );
    assert_eq!(
        a.num_rows(),
        b.num_rows(),
        "Batches have different number of rows"
    );

    for (idx, (a_row, b_row)) in a.rows().zip(b.rows()).enumerate() {
        assert_eq!(a_row, b_row, "Rows differ at index {idx}");
    }
}

/// Collect all rows in a batch into owned rows.
pub fn batch_to_rows(batch: &Batch) -> Vec<OwnedRow> {
    batch.rows().map(|row| row.into_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{Array, Int64Array, UInt8Array};

    #[test]
    fn assert_batches_eq_true() {
        let a = Batch::try_new([Array::Int64(Int64Array::from_iter([2, 3, 4]))]).unwrap();
        let b = Batch::try_new([Array::Int64(Int64Array::from_iter([2, 3, 4]))]).unwrap();
        assert_batches_eq(&a, &b);
    }

    #[test]
    #[should_panic]
    fn assert_batches_eq_different_values() {
        let a = Batch::try_new([Array::Int64(Int64Array::from_iter([2, 3, 4]))]).unwrap();
        let b = Batch::try_new([Array::Int64(Int64Array::from_iter([2, 3, 5]))]).unwrap();
        assert_batches_eq(&a, &b);
    }

    #[test]
    #[should_panic]
    fn assert_batches_eq_different_types() {
        let a = Batch::try_new([Array::Int64(Int64Array::from_iter([2]))]).unwrap();
        let b = Batch::try_new([Array::UInt8(UInt8Array::from_iter([2]))]).unwrap();
        assert_batches_eq(&a, &b);
    }
}
