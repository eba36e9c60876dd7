use std::error::Error;
use std::fmt;

use rayexec_bullet::datatype::DataType;
use rayexec_error::RayexecError;

use crate::document::ElementType;

/// Failure converting a document field into a column value.
///
/// Always fatal for the batch being read. Converted into a `RayexecError`
/// with this as the source, use `RayexecError::downcast_source` to get it
/// back.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The element's runtime type can't be stored in the column.
    TypeMismatch {
        column: String,
        expected: DataType,
        actual: ElementType,
    },
    /// A string element couldn't be parsed into the column's numeric type.
    Parse {
        column: String,
        text: String,
        datatype: DataType,
    },
}

impl ConversionError {
    pub fn column(&self) -> &str {
        match self {
            Self::TypeMismatch { column, .. } => column,
            Self::Parse { column, .. } => column,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                column,
                expected,
                actual,
            } => write!(
                f,
                "Type mismatch, expected {expected}, got {actual} for column '{column}'"
            ),
            Self::Parse {
                column,
                text,
                datatype,
            } => write!(
                f,
                "Failed to parse '{text}' into {datatype} for column '{column}'"
            ),
        }
    }
}

impl Error for ConversionError {}

impl From<ConversionError> for RayexecError {
    fn from(value: ConversionError) -> Self {
        RayexecError::with_source(
            format!("Failed to convert value for column '{}'", value.column()),
            Box::new(value),
        )
    }
}
