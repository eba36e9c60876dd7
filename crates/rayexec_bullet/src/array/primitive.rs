use crate::storage::PrimitiveStorage;

/// Array for storing primitive values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrimitiveArray<T> {
    /// Underlying primitive values.
    values: PrimitiveStorage<T>,
}

pub type Int8Array = PrimitiveArray<i8>;
pub type Int16Array = PrimitiveArray<i16>;
pub type Int32Array = PrimitiveArray<i32>;
pub type Int64Array = PrimitiveArray<i64>;
pub type UInt8Array = PrimitiveArray<u8>;
pub type UInt16Array = PrimitiveArray<u16>;
pub type UInt32Array = PrimitiveArray<u32>;
pub type UInt64Array = PrimitiveArray<u64>;
pub type Float32Array = PrimitiveArray<f32>;
pub type Float64Array = PrimitiveArray<f64>;
pub type DateArray = PrimitiveArray<u16>;
pub type DateTimeArray = PrimitiveArray<u32>;

impl<T> PrimitiveArray<T> {
    pub fn with_capacity(cap: usize) -> Self {
        PrimitiveArray {
            values: PrimitiveStorage::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value)
    }

    /// Get the value at the given index.
    pub fn value(&self, idx: usize) -> Option<&T> {
        self.values.get(idx)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> {
        self.values.as_ref().iter()
    }
}

impl<A> FromIterator<A> for PrimitiveArray<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        PrimitiveArray {
            values: PrimitiveStorage::from(iter.into_iter().collect::<Vec<_>>()),
        }
    }
}

impl<T> From<Vec<T>> for PrimitiveArray<T> {
    fn from(value: Vec<T>) -> Self {
        PrimitiveArray {
            values: value.into(),
        }
    }
}
