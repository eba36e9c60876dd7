use crate::storage::ContiguousVarlenStorage;

/// Average string length to use when preallocating the data buffer.
const ASSUMED_STRING_LEN: usize = 16;

/// Array for storing utf8 strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Utf8Array {
    storage: ContiguousVarlenStorage,
}

impl Utf8Array {
    pub fn with_capacity(cap: usize) -> Self {
        Utf8Array {
            storage: ContiguousVarlenStorage::with_offsets_and_data_capacity(
                cap,
                cap * ASSUMED_STRING_LEN,
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn push(&mut self, value: &str) {
        self.storage.push(value.as_bytes())
    }

    pub fn value(&self, idx: usize) -> Option<&str> {
        let bs = self.storage.get(idx)?;
        // SAFETY: Only `&str` values are ever pushed.
        Some(unsafe { std::str::from_utf8_unchecked(bs) })
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        // SAFETY: Only `&str` values are ever pushed.
        self.storage
            .iter()
            .map(|bs| unsafe { std::str::from_utf8_unchecked(bs) })
    }
}

impl<'a> FromIterator<&'a str> for Utf8Array {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut arr = Utf8Array::default();
        for s in iter {
            arr.push(s);
        }
        arr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_iter() {
        let mut arr = Utf8Array::with_capacity(2);
        arr.push("a");
        arr.push("");
        arr.push("héllo");

        assert_eq!(3, arr.len());
        assert_eq!(Some("héllo"), arr.value(2));
        assert_eq!(None, arr.value(3));
        assert_eq!(vec!["a", "", "héllo"], arr.iter().collect::<Vec<_>>());
    }
}
