use crate::scalar::ScalarValue;

/// Representation of a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    pub columns: Vec<ScalarValue<'a>>,
}

/// A row with full ownership of all its values.
pub type OwnedRow = Row<'static>;

impl<'a> Row<'a> {
    /// Return an iterator over all columns in the row.
    pub fn iter(&self) -> impl Iterator<Item = &ScalarValue<'a>> {
        self.columns.iter()
    }

    pub fn into_owned(self) -> OwnedRow {
        Row {
            columns: self
                .columns
                .into_iter()
                .map(|scalar| scalar.into_owned())
                .collect(),
        }
    }
}

impl<'a> FromIterator<ScalarValue<'a>> for Row<'a> {
    fn from_iter<T: IntoIterator<Item = ScalarValue<'a>>>(iter: T) -> Self {
        Row {
            columns: iter.into_iter().collect(),
        }
    }
}
