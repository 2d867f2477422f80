//! # Request-result cache
//!
//! Results of read requests are remembered under a [`QueryKey`], an ordered list of
//! segments such as `["cheese", "list"]` or `["users", "12"]`. Mutations drop every
//! entry under a key prefix.
//!
//! A cached entry is only a placeholder: every read still goes back to the server
//! and replaces it. Delete-impact counts are never shown from the cache, since a
//! delete is confirmed against them.
//!
//! Values are stored as JSON so one cache can hold results of any type.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

const USERS: &str = "users";
const DELETE_IMPACT: &str = "delete-impact";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Prefix covering everything cached for one item type.
    pub fn item_type(item_type: &str) -> Self {
        Self::new([item_type])
    }

    pub fn item_list(item_type: &str) -> Self {
        Self::new([item_type, "list"])
    }

    pub fn item(item_type: &str, id: u64) -> Self {
        Self::new([item_type.to_string(), id.to_string()])
    }

    pub fn item_delete_impact(item_type: &str, id: u64) -> Self {
        Self::new([item_type.to_string(), id.to_string(), DELETE_IMPACT.into()])
    }

    /// Prefix covering everything cached about users.
    pub fn users() -> Self {
        Self::new([USERS])
    }

    pub fn user_list() -> Self {
        Self::new([USERS, "list"])
    }

    pub fn user(id: u64) -> Self {
        Self::new([USERS.to_string(), id.to_string()])
    }

    pub fn user_delete_impact(id: u64) -> Self {
        Self::new([USERS.to_string(), id.to_string(), DELETE_IMPACT.into()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Results under this key must come straight from the server.
    pub fn always_fresh(&self) -> bool {
        self.0.last().is_some_and(|segment| segment == DELETE_IMPACT)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`. An entry that no longer decodes as `T` is a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Store a result. Values that fail to serialize are not cached.
    pub fn insert<T: Serialize>(&mut self, key: QueryKey, value: &T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.entries.insert(key, value);
        }
    }

    /// What to show while `key` is being refetched.
    pub fn placeholder<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        if key.always_fresh() {
            return None;
        }
        self.get(key)
    }

    /// Drop every entry whose key starts with `prefix`. Returns how many were removed.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use serde_json::json;

    fn cheese(id: u64, name: &str) -> Item {
        serde_json::from_value(json!({"id": id, "name": name})).unwrap()
    }

    #[test]
    fn test_get_and_insert() {
        let mut cache = QueryCache::new();
        assert!(cache.get::<Vec<Item>>(&QueryKey::item_list("cheese")).is_none());

        let items = vec![cheese(1, "Oka"), cheese(2, "Brie")];
        cache.insert(QueryKey::item_list("cheese"), &items);

        let hit: Vec<Item> = cache.get(&QueryKey::item_list("cheese")).unwrap();
        assert_eq!(hit, items);
        assert!(cache.get::<Vec<Item>>(&QueryKey::item_list("gin")).is_none());
        // Wrong type is a miss, not a panic
        assert!(cache.get::<u64>(&QueryKey::item_list("cheese")).is_none());
    }

    #[test]
    fn test_item_invalidation_is_scoped_to_its_type() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::item_list("cheese"), &vec![cheese(1, "Oka")]);
        cache.insert(QueryKey::item("cheese", 1), &cheese(1, "Oka"));
        cache.insert(QueryKey::item_delete_impact("cheese", 1), &json!({}));
        cache.insert(QueryKey::item_list("gin"), &Vec::<Item>::new());
        cache.insert(QueryKey::user_list(), &Vec::<u64>::new());

        assert_eq!(cache.invalidate(&QueryKey::item_type("cheese")), 3);
        assert_eq!(cache.len(), 2);
        assert!(cache.get::<Vec<Item>>(&QueryKey::item_list("gin")).is_some());
        assert!(cache.get::<Vec<u64>>(&QueryKey::user_list()).is_some());
    }

    #[test]
    fn test_user_invalidation() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::user_list(), &Vec::<u64>::new());
        cache.insert(QueryKey::user(4), &json!({"id": 4}));
        cache.insert(QueryKey::user_delete_impact(4), &json!({}));
        cache.insert(QueryKey::item_list("wine"), &Vec::<Item>::new());

        assert_eq!(cache.invalidate(&QueryKey::users()), 3);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.invalidate(&QueryKey::users()), 0);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_placeholder_skips_delete_impact() {
        let mut cache = QueryCache::new();
        let users = vec![4u64, 7];
        cache.insert(QueryKey::user_list(), &users);
        cache.insert(QueryKey::user_delete_impact(7), &json!({"user_ratings": 3}));
        cache.insert(QueryKey::item_delete_impact("gin", 2), &json!({"ratings": 1}));

        assert_eq!(cache.placeholder::<Vec<u64>>(&QueryKey::user_list()), Some(users));
        assert!(cache
            .placeholder::<Value>(&QueryKey::user_delete_impact(7))
            .is_none());
        assert!(cache
            .placeholder::<Value>(&QueryKey::item_delete_impact("gin", 2))
            .is_none());
        // Still stored, so a later fresh result simply replaces it
        assert!(cache.get::<Value>(&QueryKey::user_delete_impact(7)).is_some());

        assert!(QueryKey::item_delete_impact("cheese", 1).always_fresh());
        assert!(!QueryKey::item("cheese", 1).always_fresh());
        assert!(!QueryKey::new(["delete-impact", "list"]).always_fresh());
    }

    #[test]
    fn test_prefix_matches_whole_segments() {
        let key = QueryKey::item("cheese", 12);
        assert!(key.starts_with(&QueryKey::item_type("cheese")));
        assert!(!key.starts_with(&QueryKey::item("cheese", 1)));
        assert!(!QueryKey::item_list("chee").starts_with(&QueryKey::item_type("cheese")));
        assert_eq!(key.to_string(), "cheese/12");
    }
}
