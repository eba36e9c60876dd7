mod varlen;
pub use varlen::*;

/// Backing storage for primitive values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimitiveStorage<T>(Vec<T>);

impl<T> PrimitiveStorage<T> {
    pub fn with_capacity(cap: usize) -> Self {
        PrimitiveStorage(Vec::with_capacity(cap))
    }

    pub fn push(&mut self, value: T) {
        self.0.push(value)
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.0.get(idx)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<Vec<T>> for PrimitiveStorage<T> {
    fn from(value: Vec<T>) -> Self {
        PrimitiveStorage(value)
    }
}

impl<T> AsRef<[T]> for PrimitiveStorage<T> {
    fn as_ref(&self) -> &[T] {
        self.0.as_slice()
    }
}

impl<T> Extend<T> for PrimitiveStorage<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}
