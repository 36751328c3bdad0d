//! Ordering helpers for checkpoint listings
//!
//! Providers return listings in their own order. Presentation layers use
//! these helpers to show them newest first or grouped per agent.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::types::CheckpointListItem;

/// Sort newest first; ties keep their relative order
pub fn sort_newest_first(items: &mut [CheckpointListItem]) {
    items.sort_by_key(|item| Reverse(item.created_at));
}

/// Group items by owning agent, each group newest first
pub fn group_by_agent(
    items: impl IntoIterator<Item = CheckpointListItem>,
) -> BTreeMap<String, Vec<CheckpointListItem>> {
    let mut groups: BTreeMap<String, Vec<CheckpointListItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.agent_id.clone()).or_default().push(item);
    }
    for group in groups.values_mut() {
        sort_newest_first(group);
    }
    groups
}

/// The most recently created item; the later one in input order wins ties
pub fn newest(items: Vec<CheckpointListItem>) -> Option<CheckpointListItem> {
    items.into_iter().max_by_key(|item| item.created_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoints::types::CheckpointId;

    fn item(id: &str, agent: &str, created_at: i64) -> CheckpointListItem {
        CheckpointListItem {
            id: CheckpointId::from(id),
            name: format!("checkpoint {}", id),
            agent_id: agent.to_string(),
            created_at,
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut items = vec![item("a", "x", 10), item("b", "x", 30), item("c", "x", 20)];
        sort_newest_first(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut items = vec![item("a", "x", 10), item("b", "x", 10)];
        sort_newest_first(&mut items);
        assert_eq!(items[0].id.as_str(), "a");
    }

    #[test]
    fn test_group_by_agent() {
        let groups = group_by_agent(vec![
            item("a", "writer", 1),
            item("b", "coder", 5),
            item("c", "writer", 3),
        ]);

        assert_eq!(groups.len(), 2);
        let writer: Vec<_> = groups["writer"].iter().map(|i| i.id.as_str()).collect();
        assert_eq!(writer, vec!["c", "a"]);
        assert_eq!(groups["coder"].len(), 1);
    }

    #[test]
    fn test_newest() {
        assert!(newest(Vec::new()).is_none());
        let latest = newest(vec![item("a", "x", 1), item("b", "x", 9), item("c", "x", 4)]);
        assert_eq!(latest.unwrap().id.as_str(), "b");
    }

    #[test]
    fn test_newest_tie_prefers_later() {
        let latest = newest(vec![item("a", "x", 7), item("b", "x", 7)]);
        assert_eq!(latest.unwrap().id.as_str(), "b");
    }
}
