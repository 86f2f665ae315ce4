//! Query component as an ordered key/value table.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::percent_encode::PercentEncoded;

/// A query entry: a key and its optional value.
type Entry = (String, Option<String>);

/// [Query] component of a URI, stored as ordered `key[=value]` entries.
///
/// Keys keep their first insertion position. A key without a value renders
/// as the bare key, and a key with an empty value renders as `key=`.
///
/// Duplicate keys can only come from parsing. Lookup, update and removal
/// target the first entry with a matching key.
///
/// [Query]: https://www.rfc-editor.org/rfc/rfc3986.html#section-3.4
///
/// # Examples
///
/// ```
/// use uri_value::QueryTable;
///
/// let mut query = QueryTable::parse("query");
/// query.set("key", Some("value"));
/// assert_eq!(query.to_string(), "query&key=value");
///
/// query.set("key", None);
/// assert_eq!(query.to_string(), "query&key");
///
/// assert!(query.remove("key"));
/// assert_eq!(query.to_string(), "query");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct QueryTable {
    /// Entries in serialization order.
    entries: Vec<Entry>,
}

impl QueryTable {
    /// Creates an empty table.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the raw query text (without the leading `?`).
    ///
    /// Entries are separated by `&`, and each entry is split at its first
    /// `=`. Empty entries are skipped. Percent-encoded triplets are kept as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::QueryTable;
    ///
    /// let query = QueryTable::parse("a=1&flag&&b=x=y&c=");
    /// assert_eq!(query.get("a"), Some(Some("1")));
    /// assert_eq!(query.get("flag"), Some(None));
    /// assert_eq!(query.get("b"), Some(Some("x=y")));
    /// assert_eq!(query.get("c"), Some(Some("")));
    /// assert_eq!(query.get("missing"), None);
    /// assert_eq!(query.len(), 4);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let entries = s
            .split('&')
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => (key.into(), Some(value.into())),
                None => (entry.into(), None),
            })
            .collect();
        Self { entries }
    }

    /// Creates a table holding the whole string as a single key without a value.
    ///
    /// This is how the component-wise constructor stores a pre-built query.
    /// An empty string gives an empty table, as parsing `?` does.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::QueryTable;
    ///
    /// let query = QueryTable::from_opaque("a=1&b");
    /// assert_eq!(query.len(), 1);
    /// assert_eq!(query.get("a=1&b"), Some(None));
    ///
    /// assert!(QueryTable::from_opaque("").is_empty());
    /// ```
    #[must_use]
    pub fn from_opaque(s: &str) -> Self {
        if s.is_empty() {
            return Self::new();
        }
        Self {
            entries: alloc::vec![(s.into(), None)],
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the position of the first entry with the key.
    #[inline]
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns the value of the first entry with the key.
    ///
    /// The outer `Option` tells whether the key is present, and the inner
    /// one whether it has a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.position(key)
            .map(|pos| self.entries[pos].1.as_deref())
    }

    /// Returns `true` if the key is present.
    #[inline]
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Sets the value of the key.
    ///
    /// An existing key is updated in place, keeping its position. A new key
    /// is appended.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        let value = value.map(String::from);
        match self.position(key) {
            Some(pos) => self.entries[pos].1 = value,
            None => self.entries.push((key.into(), value)),
        }
    }

    /// Removes the first entry with the key, and returns whether it existed.
    ///
    /// Other entries with the same key are left in place.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns the distinct keys in first-seen order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::with_capacity(self.entries.len());
        for (key, _) in &self.entries {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        keys
    }

    /// Returns an iterator over the entries in order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Applies functions to every key and value in place, and returns `true` if anything changed.
    pub(crate) fn map_entries<K, V>(&mut self, mut map_key: K, mut map_value: V) -> bool
    where
        K: FnMut(&str) -> String,
        V: FnMut(&str) -> String,
    {
        let mut changed = false;
        for (key, value) in &mut self.entries {
            let new_key = map_key(key);
            if new_key != *key {
                *key = new_key;
                changed = true;
            }
            if let Some(value) = value {
                let new_value = map_value(value);
                if new_value != *value {
                    *value = new_value;
                    changed = true;
                }
            }
        }
        changed
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for QueryTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            let key = key.into();
            let value = value.map(Into::into);
            match table.position(&key) {
                Some(pos) => table.entries[pos].1 = value,
                None => table.entries.push((key, value)),
            }
        }
        table
    }
}

impl fmt::Display for QueryTable {
    /// Writes the entries joined with `&`, percent-encoding delimiters inside keys and values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i != 0 {
                f.write_str("&")?;
            }
            PercentEncoded::from_query_key(key).fmt(f)?;
            if let Some(value) = value {
                f.write_str("=")?;
                PercentEncoded::from_query_value(value).fmt(f)?;
            }
        }
        Ok(())
    }
}
