//! A suspiciously Arrow-like columnar storage implementation.
pub mod array;
pub mod batch;
pub mod compute;
pub mod datatype;
pub mod field;
pub mod row;
pub mod scalar;
pub mod storage;
pub mod testutil;
