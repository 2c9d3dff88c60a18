use std::slice;

/// One dimension of a rate limit descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorEntry {
    pub key: String,
    pub value: String,
}

impl DescriptorEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Ordered list of descriptor entries.
///
/// Order is significant: it is preserved verbatim in the generated cache key and
/// never normalized, so `[a, b]` and `[b, a]` address different counters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Descriptor {
    pub entries: Vec<DescriptorEntry>,
}

impl Descriptor {
    pub fn new(entries: Vec<DescriptorEntry>) -> Self {
        Self { entries }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self { entries: pairs.into_iter().map(|(k, v)| DescriptorEntry::new(k, v)).collect() }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(DescriptorEntry::new(key, value));
    }

    pub fn iter(&self) -> slice::Iter<'_, DescriptorEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Descriptor {
    type Item = &'a DescriptorEntry;
    type IntoIter = slice::Iter<'a, DescriptorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<DescriptorEntry> for Descriptor {
    fn from_iter<T: IntoIterator<Item = DescriptorEntry>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
