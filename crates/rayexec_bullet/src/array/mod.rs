mod primitive;
pub use primitive::*;
mod varlen;
pub use varlen::*;

use rayexec_error::{RayexecError, Result};

use crate::datatype::DataType;
use crate::scalar::ScalarValue;

/// A column of values all of the same type.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    UInt8(UInt8Array),
    UInt16(UInt16Array),
    UInt32(UInt32Array),
    UInt64(UInt64Array),
    Int8(Int8Array),
    Int16(Int16Array),
    Int32(Int32Array),
    Int64(Int64Array),
    Float32(Float32Array),
    Float64(Float64Array),
    Utf8(Utf8Array),
    Date(DateArray),
    DateTime(DateTimeArray),
}

impl Array {
    /// Create a new empty array for the given type, preallocating room for
    /// `cap` values.
    pub fn with_capacity(datatype: DataType, cap: usize) -> Self {
        match datatype {
            DataType::UInt8 => Self::UInt8(PrimitiveArray::with_capacity(cap)),
            DataType::UInt16 => Self::UInt16(PrimitiveArray::with_capacity(cap)),
            DataType::UInt32 => Self::UInt32(PrimitiveArray::with_capacity(cap)),
            DataType::UInt64 => Self::UInt64(PrimitiveArray::with_capacity(cap)),
            DataType::Int8 => Self::Int8(PrimitiveArray::with_capacity(cap)),
            DataType::Int16 => Self::Int16(PrimitiveArray::with_capacity(cap)),
            DataType::Int32 => Self::Int32(PrimitiveArray::with_capacity(cap)),
            DataType::Int64 => Self::Int64(PrimitiveArray::with_capacity(cap)),
            DataType::Float32 => Self::Float32(PrimitiveArray::with_capacity(cap)),
            DataType::Float64 => Self::Float64(PrimitiveArray::with_capacity(cap)),
            DataType::Utf8 => Self::Utf8(Utf8Array::with_capacity(cap)),
            DataType::Date => Self::Date(PrimitiveArray::with_capacity(cap)),
            DataType::DateTime => Self::DateTime(PrimitiveArray::with_capacity(cap)),
        }
    }

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

    pub fn len(&self) -> usize {
        match self {
            Self::UInt8(arr) => arr.len(),
            Self::UInt16(arr) => arr.len(),
            Self::UInt32(arr) => arr.len(),
            Self::UInt64(arr) => arr.len(),
            Self::Int8(arr) => arr.len(),
            Self::Int16(arr) => arr.len(),
            Self::Int32(arr) => arr.len(),
            Self::Int64(arr) => arr.len(),
            Self::Float32(arr) => arr.len(),
            Self::Float64(arr) => arr.len(),
            Self::Utf8(arr) => arr.len(),
            Self::Date(arr) => arr.len(),
            Self::DateTime(arr) => arr.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the scalar value at the given index.
    pub fn value(&self, idx: usize) -> Option<ScalarValue> {
        Some(match self {
            Self::UInt8(arr) => ScalarValue::UInt8(*arr.value(idx)?),
            Self::UInt16(arr) => ScalarValue::UInt16(*arr.value(idx)?),
            Self::UInt32(arr) => ScalarValue::UInt32(*arr.value(idx)?),
            Self::UInt64(arr) => ScalarValue::UInt64(*arr.value(idx)?),
            Self::Int8(arr) => ScalarValue::Int8(*arr.value(idx)?),
            Self::Int16(arr) => ScalarValue::Int16(*arr.value(idx)?),
            Self::Int32(arr) => ScalarValue::Int32(*arr.value(idx)?),
            Self::Int64(arr) => ScalarValue::Int64(*arr.value(idx)?),
            Self::Float32(arr) => ScalarValue::Float32(*arr.value(idx)?),
            Self::Float64(arr) => ScalarValue::Float64(*arr.value(idx)?),
            Self::Utf8(arr) => ScalarValue::Utf8(arr.value(idx)?.into()),
            Self::Date(arr) => ScalarValue::Date(*arr.value(idx)?),
            Self::DateTime(arr) => ScalarValue::DateTime(*arr.value(idx)?),
        })
    }

    /// Append a scalar to the end of this array.
    ///
    /// Errors if the scalar's type doesn't exactly match the array's type. No
    /// casting happens here.
    pub fn push_scalar(&mut self, scalar: &ScalarValue) -> Result<()> {
        match (self, scalar) {
            (Self::UInt8(arr), ScalarValue::UInt8(v)) => arr.push(*v),
            (Self::UInt16(arr), ScalarValue::UInt16(v)) => arr.push(*v),
            (Self::UInt32(arr), ScalarValue::UInt32(v)) => arr.push(*v),
            (Self::UInt64(arr), ScalarValue::UInt64(v)) => arr.push(*v),
            (Self::Int8(arr), ScalarValue::Int8(v)) => arr.push(*v),
            (Self::Int16(arr), ScalarValue::Int16(v)) => arr.push(*v),
            (Self::Int32(arr), ScalarValue::Int32(v)) => arr.push(*v),
            (Self::Int64(arr), ScalarValue::Int64(v)) => arr.push(*v),
            (Self::Float32(arr), ScalarValue::Float32(v)) => arr.push(*v),
            (Self::Float64(arr), ScalarValue::Float64(v)) => arr.push(*v),
            (Self::Utf8(arr), ScalarValue::Utf8(v)) => arr.push(v),
            (Self::Date(arr), ScalarValue::Date(v)) => arr.push(*v),
            (Self::DateTime(arr), ScalarValue::DateTime(v)) => arr.push(*v),
            (arr, scalar) => {
                return Err(RayexecError::new(format!(
                    "Cannot push scalar of type {} onto array of type {}",
                    scalar.datatype(),
                    arr.datatype(),
                )))
            }
        }

        Ok(())
    }
}
