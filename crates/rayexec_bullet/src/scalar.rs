use std::borrow::Cow;
use std::fmt;

use rayexec_error::{RayexecError, Result};

use crate::compute::date::{days_to_date, seconds_to_datetime};
use crate::datatype::DataType;

/// A single scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue<'a> {
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Utf8(Cow<'a, str>),
    /// Days since epoch.
    Date(u16),
    /// Seconds since epoch.
    DateTime(u32),
}

pub type OwnedScalarValue = ScalarValue<'static>;

impl<'a> ScalarValue<'a> {
    pub fn datatype(&self) -> DataType {
        match self {
            Self::UInt8(_) => DataType::UInt8,
            Self::UInt16(_) => DataType::UInt16,
            Self::UInt32(_) => DataType::UInt32,
            Self::UInt64(_) => DataType::UInt64,
            Self::Int8(_) => DataType::Int8,
            Self::Int16(_) => DataType::Int16,
            Self::Int32(_) => DataType::Int32,
            Self::Int64(_) => DataType::Int64,
            Self::Float32(_) => DataType::Float32,
            Self::Float64(_) => DataType::Float64,
            Self::Utf8(_) => DataType::Utf8,
            Self::Date(_) => DataType::Date,
            Self::DateTime(_) => DataType::DateTime,
        }
    }

    pub fn into_owned(self) -> OwnedScalarValue {
        match self {
            Self::UInt8(v) => OwnedScalarValue::UInt8(v),
            Self::UInt16(v) => OwnedScalarValue::UInt16(v),
            Self::UInt32(v) => OwnedScalarValue::UInt32(v),
            Self::UInt64(v) => OwnedScalarValue::UInt64(v),
            Self::Int8(v) => OwnedScalarValue::Int8(v),
            Self::Int16(v) => OwnedScalarValue::Int16(v),
            Self::Int32(v) => OwnedScalarValue::Int32(v),
            Self::Int64(v) => OwnedScalarValue::Int64(v),
            Self::Float32(v) => OwnedScalarValue::Float32(v),
            Self::Float64(v) => OwnedScalarValue::Float64(v),
            Self::Utf8(v) => OwnedScalarValue::Utf8(v.into_owned().into()),
            Self::Date(v) => OwnedScalarValue::Date(v),
            Self::DateTime(v) => OwnedScalarValue::DateTime(v),
        }
    }

    /// Try to get an unsigned integer as a usize.
    ///
    /// Signed integers are accepted as long as they're not negative.
    pub fn try_as_usize(&self) -> Result<usize> {
        let v = match self {
            Self::UInt8(v) => Some(*v as usize),
            Self::UInt16(v) => Some(*v as usize),
            Self::UInt32(v) => usize::try_from(*v).ok(),
            Self::UInt64(v) => usize::try_from(*v).ok(),
            Self::Int8(v) => usize::try_from(*v).ok(),
            Self::Int16(v) => usize::try_from(*v).ok(),
            Self::Int32(v) => usize::try_from(*v).ok(),
            Self::Int64(v) => usize::try_from(*v).ok(),
            other => {
                return Err(RayexecError::new(format!(
                    "Not an integer: {other} ({})",
                    other.datatype()
                )))
            }
        };

        v.ok_or_else(|| RayexecError::new(format!("Cannot convert {self} into a usize")))
    }

    pub fn try_as_str(&self) -> Result<&str> {
        match self {
            Self::Utf8(v) => Ok(v.as_ref()),
            other => Err(RayexecError::new(format!(
                "Not a string: {other} ({})",
                other.datatype()
            ))),
        }
    }

    pub fn try_into_string(self) -> Result<String> {
        match self {
            Self::Utf8(v) => Ok(v.into_owned()),
            other => Err(RayexecError::new(format!(
                "Not a string: {other} ({})",
                other.datatype()
            ))),
        }
    }
}

impl fmt::Display for ScalarValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt8(v) => write!(f, "{v}"),
            Self::UInt16(v) => write!(f, "{v}"),
            Self::UInt32(v) => write!(f, "{v}"),
            Self::UInt64(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Utf8(v) => write!(f, "{v}"),
            Self::Date(v) => match days_to_date(*v) {
                Some(date) => write!(f, "{date}"),
                None => write!(f, "{v}"),
            },
            Self::DateTime(v) => match seconds_to_datetime(*v) {
                Some(datetime) => write!(f, "{datetime}"),
                None => write!(f, "{v}"),
            },
        }
    }
}

impl From<&'static str> for OwnedScalarValue {
    fn from(value: &'static str) -> Self {
        ScalarValue::Utf8(value.into())
    }
}

impl From<String> for OwnedScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Utf8(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_temporal() {
        assert_eq!("1970-01-01", ScalarValue::Date(0).to_string());
        assert_eq!("1992-10-11", ScalarValue::Date(8319).to_string());
        assert_eq!(
            "1970-01-02 00:00:01",
            ScalarValue::DateTime(86401).to_string()
        );
    }

    #[test]
    fn as_usize() {
        assert_eq!(12, ScalarValue::UInt32(12).try_as_usize().unwrap());
        assert_eq!(12, ScalarValue::Int64(12).try_as_usize().unwrap());
        ScalarValue::Int64(-1).try_as_usize().unwrap_err();
        ScalarValue::from("12").try_as_usize().unwrap_err();
    }

    #[test]
    fn into_string() {
        assert_eq!("abc", ScalarValue::from("abc").try_into_string().unwrap());
        ScalarValue::Int8(1).try_into_string().unwrap_err();
    }
}
