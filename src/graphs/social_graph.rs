use ahash::{HashMap, HashMapExt};

use crate::error::{Error, Result};

/// Undirected friendship graph keyed by user name.
///
/// Neighbor lists keep insertion order and may contain duplicates when the
/// same connection is added twice.
#[derive(Clone, Debug, Default)]
pub struct SocialGraph {
    connections: HashMap<String, Vec<String>>,
}

impl SocialGraph {
    pub fn new() -> SocialGraph {
        SocialGraph {
            connections: HashMap::new(),
        }
    }

    /// Adds `user` without connections. Does nothing if the user exists.
    pub fn add_user(&mut self, user: &str) {
        if !self.connections.contains_key(user) {
            self.connections.insert(user.to_string(), Vec::new());
        }
    }

    /// Connects `a` and `b`, adding either user if unknown.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.connections
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.connections
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());
    }

    pub fn connected(&self, user: &str) -> Result<&[String]> {
        self.connections
            .get(user)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownUser(user.to_string()))
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.connections.contains_key(user)
    }

    pub fn number_of_users(&self) -> usize {
        self.connections.len()
    }

    /// Whether `a` lists `b` as a connection.
    pub fn is_connected(&self, a: &str, b: &str) -> bool {
        self.connections
            .get(a)
            .is_some_and(|neighbors| neighbors.iter().any(|neighbor| neighbor == b))
    }
}
