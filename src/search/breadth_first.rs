use std::collections::VecDeque;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use tracing::debug;

use crate::{
    error::{Error, Result},
    graphs::social_graph::SocialGraph,
};

/// Fewest-hop route from `sender` to `receiver`, both included.
///
/// Returns an empty route if `receiver` cannot be reached, including when it
/// is not part of the graph at all. Fails only for an unknown `sender`.
pub fn shortest_path(graph: &SocialGraph, sender: &str, receiver: &str) -> Result<Vec<String>> {
    if !graph.contains_user(sender) {
        return Err(Error::UnknownUser(sender.to_string()));
    }

    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(sender);
    queue.push_back(sender);

    while let Some(current) = queue.pop_front() {
        if current == receiver {
            let mut path = vec![current.to_string()];
            let mut user = current;
            while let Some(&parent) = parents.get(user) {
                path.push(parent.to_string());
                user = parent;
            }
            path.reverse();

            debug!(sender, receiver, hops = path.len() - 1, "route found");
            return Ok(path);
        }

        for neighbor in graph.connected(current)? {
            if visited.insert(neighbor.as_str()) {
                parents.insert(neighbor.as_str(), current);
                queue.push_back(neighbor.as_str());
            }
        }
    }

    debug!(sender, receiver, visited = visited.len(), "no route");
    Ok(Vec::new())
}
