//! Conversion of dynamically typed document elements into typed column
//! values.
//!
//! Dispatch is on the pair (column array, element tag):
//!
//! | Column              | Accepted elements                           |
//! |---------------------|---------------------------------------------|
//! | integers and floats | Bool, Int32, Int64, Float64, String, Null   |
//! | Utf8                | String                                      |
//! | Date                | Timestamp                                   |
//! | DateTime            | Timestamp                                   |
//!
//! Numeric values are cast with `as` semantics. Integer narrowing wraps,
//! floats are truncated towards zero and saturate at the bounds of the
//! target integer type.
use std::str::FromStr;

use num_traits::AsPrimitive;
use rayexec_bullet::array::{Array, PrimitiveArray};
use rayexec_bullet::compute::cast::parse::{FromStrParser, Parser};
use rayexec_bullet::compute::date::days_since_epoch;
use rayexec_bullet::datatype::DataType;

use crate::document::Element;
use crate::errors::ConversionError;

/// Convert and append an element onto the array for a column.
///
/// Null elements are only accepted by numeric columns, and are appended as
/// zero.
pub fn insert_value(array: &mut Array, value: &Element, column: &str) -> Result<(), ConversionError> {
    match array {
        Array::UInt8(arr) => insert_number(arr, DataType::UInt8, value, column),
        Array::UInt16(arr) => insert_number(arr, DataType::UInt16, value, column),
        Array::UInt32(arr) => insert_number(arr, DataType::UInt32, value, column),
        Array::UInt64(arr) => insert_number(arr, DataType::UInt64, value, column),
        Array::Int8(arr) => insert_number(arr, DataType::Int8, value, column),
        Array::Int16(arr) => insert_number(arr, DataType::Int16, value, column),
        Array::Int32(arr) => insert_number(arr, DataType::Int32, value, column),
        Array::Int64(arr) => insert_number(arr, DataType::Int64, value, column),
        Array::Float32(arr) => insert_number(arr, DataType::Float32, value, column),
        Array::Float64(arr) => insert_number(arr, DataType::Float64, value, column),
        Array::Utf8(arr) => match value {
            Element::String(s) => {
                arr.push(s);
                Ok(())
            }
            other => Err(type_mismatch(column, DataType::Utf8, other)),
        },
        Array::Date(arr) => match value {
            Element::Timestamp(ts) => {
                arr.push(days_since_epoch(ts) as u16);
                Ok(())
            }
            other => Err(type_mismatch(column, DataType::Date, other)),
        },
        Array::DateTime(arr) => match value {
            Element::Timestamp(ts) => {
                arr.push(ts.timestamp() as u32);
                Ok(())
            }
            other => Err(type_mismatch(column, DataType::DateTime, other)),
        },
    }
}

fn insert_number<T>(
    arr: &mut PrimitiveArray<T>,
    datatype: DataType,
    value: &Element,
    column: &str,
) -> Result<(), ConversionError>
where
    T: Copy + Default + FromStr + 'static,
    u8: AsPrimitive<T>,
    i32: AsPrimitive<T>,
    i64: AsPrimitive<T>,
    f64: AsPrimitive<T>,
{
    let v: T = match value {
        Element::Bool(v) => (*v as u8).as_(),
        Element::Int32(v) => (*v).as_(),
        Element::Int64(v) => (*v).as_(),
        Element::Float64(v) => (*v).as_(),
        Element::Null => T::default(),
        Element::String(s) => match FromStrParser::<T>::new().parse(s) {
            Some(v) => v,
            None => {
                return Err(ConversionError::Parse {
                    column: column.to_string(),
                    text: s.clone(),
                    datatype,
                })
            }
        },
        other => return Err(type_mismatch(column, datatype, other)),
    };

    arr.push(v);
    Ok(())
}

fn type_mismatch(column: &str, expected: DataType, value: &Element) -> ConversionError {
    ConversionError::TypeMismatch {
        column: column.to_string(),
        expected,
        actual: value.element_type(),
    }
}
