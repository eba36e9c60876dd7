use std::fmt;

use crate::scalar::{OwnedScalarValue, ScalarValue};

/// Supported data types.
///
/// This is intentionally a closed set covering what external sources can be
/// materialized into. Every type has a canonical default value (see
/// `default_scalar`) used when a source omits a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Utf8,
    /// Days since epoch.
    Date,
    /// Seconds since epoch.
    DateTime,
}

impl DataType {
    /// Return if this datatype is one of the integer or float types.
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Float32
                | Self::Float64
        )
    }

    /// Return if this datatype is a date or datetime.
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    /// The canonical empty value for this type.
    ///
    /// Zero for numerics, the empty string for utf8, and the epoch for dates
    /// and datetimes.
    pub fn default_scalar(&self) -> OwnedScalarValue {
        match self {
            Self::UInt8 => ScalarValue::UInt8(0),
            Self::UInt16 => ScalarValue::UInt16(0),
            Self::UInt32 => ScalarValue::UInt32(0),
            Self::UInt64 => ScalarValue::UInt64(0),
            Self::Int8 => ScalarValue::Int8(0),
            Self::Int16 => ScalarValue::Int16(0),
            Self::Int32 => ScalarValue::Int32(0),
            Self::Int64 => ScalarValue::Int64(0),
            Self::Float32 => ScalarValue::Float32(0.0),
            Self::Float64 => ScalarValue::Float64(0.0),
            Self::Utf8 => ScalarValue::Utf8("".into()),
            Self::Date => ScalarValue::Date(0),
            Self::DateTime => ScalarValue::DateTime(0),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt8 => write!(f, "UInt8"),
            Self::UInt16 => write!(f, "UInt16"),
            Self::UInt32 => write!(f, "UInt32"),
            Self::UInt64 => write!(f, "UInt64"),
            Self::Int8 => write!(f, "Int8"),
            Self::Int16 => write!(f, "Int16"),
            Self::Int32 => write!(f, "Int32"),
            Self::Int64 => write!(f, "Int64"),
            Self::Float32 => write!(f, "Float32"),
            Self::Float64 => write!(f, "Float64"),
            Self::Utf8 => write!(f, "Utf8"),
            Self::Date => write!(f, "Date"),
            Self::DateTime => write!(f, "DateTime"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scalar_matches_type() {
        let types = [
            DataType::UInt8,
            DataType::UInt16,
            DataType::UInt32,
            DataType::UInt64,
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::Float32,
            DataType::Float64,
            DataType::Utf8,
            DataType::Date,
            DataType::DateTime,
        ];

        for typ in types {
            assert_eq!(typ, typ.default_scalar().datatype(), "type: {typ}");
        }
    }

    #[test]
    fn classify() {
        assert!(DataType::Float32.is_numeric());
        assert!(!DataType::Utf8.is_numeric());
        assert!(!DataType::Date.is_numeric());
        assert!(DataType::DateTime.is_temporal());
    }
}
