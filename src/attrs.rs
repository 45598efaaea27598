//! Information-element attributes: the key/value tail of a capture line.

/// Ordered key/value table. Keys are not unique; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Build the table from the tail fields of a record, two at a time.
    /// A trailing key without a value maps to `""`.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut pairs = Vec::new();
        let mut it = fields.into_iter();
        while let Some(key) = it.next() {
            let value = it.next().unwrap_or("");
            pairs.push((key.to_string(), value.to_string()));
        }
        Attributes { pairs }
    }

    /// Value of the first pair whose key is `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Pairs in the order they appeared on the line, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
