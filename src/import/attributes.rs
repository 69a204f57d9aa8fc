//! Element attributes.

use heapless::{FnvIndexMap, String};

/// Maximum number of attributes kept per element.
pub const MAX_ATTRIBUTES: usize = 8;

/// Attributes of one element.
///
/// Keys longer than 32 bytes and values longer than 64 bytes are dropped, as are
/// attributes beyond [`MAX_ATTRIBUTES`]. A dropped `configid` therefore reads as
/// missing, which the importer treats as invalid.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: FnvIndexMap<String<32>, String<64>, MAX_ATTRIBUTES>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an attribute. Returns `false` if it was dropped.
    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        let (Ok(key), Ok(value)) = (String::try_from(key), String::try_from(value)) else {
            return false;
        };
        self.entries.insert(key, value).is_ok()
    }

    /// Builder-style [`Attributes::insert`].
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    /// Value of an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        let attrs = Attributes::new().with("configid", "cfg-A");
        assert_eq!(attrs.get("configid"), Some("cfg-A"));
        assert_eq!(attrs.get("other"), None);
    }

    #[test]
    fn test_overlong_value_is_dropped() {
        let long = [b'x'; 65];
        let mut attrs = Attributes::new();
        assert!(!attrs.insert("configid", core::str::from_utf8(&long).unwrap()));
        assert_eq!(attrs.get("configid"), None);
    }

    #[test]
    fn test_from_pairs() {
        let attrs: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("b"), Some("2"));
    }
}
