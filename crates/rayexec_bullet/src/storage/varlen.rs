use super::PrimitiveStorage;

/// Backing storage for multiple variable length values stored in a contiguous
/// vector.
///
/// Offsets are usize, a single storage can hold as much data as a page of
/// documents can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContiguousVarlenStorage {
    /// Offsets into the data buffer. The first value should be 0.
    offsets: PrimitiveStorage<usize>,
    /// The data buffer being indexed into.
    data: PrimitiveStorage<u8>,
}

impl Default for ContiguousVarlenStorage {
    fn default() -> Self {
        Self::with_offsets_and_data_capacity(0, 0)
    }
}

impl ContiguousVarlenStorage {
    pub fn with_offsets_and_data_capacity(offsets_cap: usize, data_cap: usize) -> Self {
        let mut offsets = PrimitiveStorage::with_capacity(offsets_cap + 1);
        offsets.push(0);

        ContiguousVarlenStorage {
            offsets,
            data: PrimitiveStorage::with_capacity(data_cap),
        }
    }

    pub fn push(&mut self, value: &[u8]) {
        self.data.extend(value.iter().copied());
        self.offsets.push(self.data.len());
    }

    pub fn get(&self, idx: usize) -> Option<&[u8]> {
        let start = *self.offsets.get(idx)?;
        let end = *self.offsets.get(idx + 1)?;

        self.data.as_ref().get(start..end)
    }

    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of bytes stored across all values.
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> ContiguousVarlenIter<'_> {
        ContiguousVarlenIter {
            storage: self,
            idx: 0,
        }
    }
}

#[derive(Debug)]
pub struct ContiguousVarlenIter<'a> {
    storage: &'a ContiguousVarlenStorage,
    idx: usize,
}

impl<'a> Iterator for ContiguousVarlenIter<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let v = self.storage.get(self.idx)?;
        self.idx += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.storage.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ContiguousVarlenIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get() {
        let mut storage = ContiguousVarlenStorage::default();
        storage.push(b"hello");
        storage.push(b"");
        storage.push(b"world");

        assert_eq!(3, storage.len());
        assert_eq!(10, storage.data_len());
        assert_eq!(Some(b"hello".as_slice()), storage.get(0));
        assert_eq!(Some(b"".as_slice()), storage.get(1));
        assert_eq!(Some(b"world".as_slice()), storage.get(2));
        assert_eq!(None, storage.get(3));

        let all: Vec<_> = storage.iter().collect();
        assert_eq!(vec![b"hello".as_slice(), b"".as_slice(), b"world".as_slice()], all);
    }

    #[test]
    fn large_values() {
        let big = vec![b'x'; 1 << 20];

        let mut storage = ContiguousVarlenStorage::default();
        for _ in 0..4 {
            storage.push(&big);
        }
        storage.push(b"end");

        assert_eq!((4 << 20) + 3, storage.data_len());
        assert_eq!(Some(big.as_slice()), storage.get(3));
        assert_eq!(Some(b"end".as_slice()), storage.get(4));
    }
}
