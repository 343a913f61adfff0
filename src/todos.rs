//! Todo List
//!
//! Ordered task list and its mutations. Misuse (blank text, unknown ids)
//! is a silent no-op, never an error.

use std::collections::HashSet;

use crate::models::{Filter, Todo};

/// Wall clock in milliseconds, used for new ids
#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Ordered list of todos, index 0 is the top row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    /// Build from persisted entries: text is trimmed, blank entries and
    /// repeated ids are dropped (first occurrence wins).
    pub fn from_persisted(todos: Vec<Todo>) -> Self {
        let mut seen = HashSet::new();
        let todos = todos
            .into_iter()
            .filter_map(|mut todo| {
                let trimmed = todo.text.trim();
                if trimmed.is_empty() {
                    log::warn!("dropping stored todo {} with empty text", todo.id);
                    return None;
                }
                if !seen.insert(todo.id) {
                    log::warn!("dropping stored todo with duplicate id {}", todo.id);
                    return None;
                }
                if trimmed.len() != todo.text.len() {
                    todo.text = trimmed.to_string();
                }
                Some(todo)
            })
            .collect();
        Self { todos }
    }

    /// Insert an active todo at the head. Returns the new id, `None` for blank text.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        self.insert_front(text, false)
    }

    /// Insert an already completed todo at the head (input-row checkbox).
    pub fn add_completed(&mut self, text: &str) -> Option<u64> {
        self.insert_front(text, true)
    }

    fn insert_front(&mut self, text: &str, completed: bool) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id(now_ms());
        self.todos.insert(0, Todo { id, text: text.to_string(), completed });
        log::debug!("added todo {} (completed={})", id, completed);
        Some(id)
    }

    /// Timestamp id, bumped past the current maximum if the clock collides.
    /// A restored id of `u64::MAX` leaves no room above, so the lowest free id is used.
    fn next_id(&self, now: u64) -> u64 {
        match self.todos.iter().map(|t| t.id).max() {
            Some(max) if now <= max => max.checked_add(1).unwrap_or_else(|| self.lowest_free_id()),
            _ => now,
        }
    }

    fn lowest_free_id(&self) -> u64 {
        let used: HashSet<u64> = self.todos.iter().map(|t| t.id).collect();
        // The list is far shorter than the id space, so a gap always exists
        (0..=u64::MAX).find(|id| !used.contains(id)).unwrap_or_default()
    }

    pub fn toggle(&mut self, id: u64) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.completed = !todo.completed;
        }
    }

    pub fn delete(&mut self, id: u64) {
        self.todos.retain(|t| t.id != id);
    }

    pub fn clear_completed(&mut self) {
        self.todos.retain(|t| !t.completed);
    }

    /// Move `dragged` to the index `target` occupied before the move.
    pub fn reorder(&mut self, dragged: u64, target: u64) {
        if dragged == target {
            return;
        }
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return;
        };
        let todo = self.todos.remove(from);
        self.todos.insert(to, todo);
        log::debug!("moved todo {} from {} to {}", dragged, from, to);
    }

    /// Items matching `filter`, in list order
    pub fn filtered(&self, filter: Filter) -> Vec<Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Number of items `filter` would show
    pub fn count(&self, filter: Filter) -> usize {
        self.todos.iter().filter(|t| filter.matches(t)).count()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn todo(id: u64, text: &str, completed: bool) -> Todo {
        Todo { id, text: text.to_string(), completed }
    }

    fn ids(list: &TodoList) -> Vec<u64> {
        list.as_slice().iter().map(|t| t.id).collect()
    }

    fn find(list: &TodoList, id: u64) -> &Todo {
        list.as_slice().iter().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn test_add_to_empty_list() {
        let mut list = TodoList::default();
        let id = list.add("buy milk").unwrap();
        assert_eq!(list.as_slice().len(), 1);
        let first = find(&list, id);
        assert_eq!(first.text, "buy milk");
        assert!(!first.completed);
        assert_eq!(list.remaining_count(), 1);
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut list = TodoList::default();
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add(""), None);
        assert_eq!(list.add_completed("\t\n"), None);
        assert!(list.as_slice().is_empty());

        let id = list.add("  padded  ").unwrap();
        assert_eq!(find(&list, id).text, "padded");
    }

    #[test]
    fn test_newest_first_and_active_filter() {
        let mut list = TodoList::default();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        assert_eq!(ids(&list), vec![b, a]);
        assert_ne!(a, b);

        list.toggle(b);
        let active: Vec<u64> = list.filtered(Filter::Active).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![a]);
    }

    #[test]
    fn test_add_completed_inserts_at_head() {
        let mut list = TodoList::default();
        list.add("first");
        let id = list.add_completed("done already").unwrap();
        assert_eq!(list.as_slice()[0].id, id);
        assert!(list.as_slice()[0].completed);
        assert_eq!(list.remaining_count(), 1);
        assert_eq!(list.count(Filter::Completed), 1);
        assert_eq!(list.count(Filter::All), 2);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut list = TodoList::from_persisted(vec![todo(u64::MAX / 2, "future", false)]);
        let id = list.add("now").unwrap();
        assert_eq!(id, u64::MAX / 2 + 1);
        assert_eq!(list.next_id(5), u64::MAX / 2 + 2);
    }

    #[test]
    fn test_add_after_max_id_reuses_lowest_free_id() {
        let mut list = TodoList::from_persisted(vec![todo(u64::MAX, "edge", false), todo(0, "zero", false)]);
        let id = list.add("new").unwrap();
        assert_eq!(id, 1);
        let next = list.add("newer").unwrap();
        assert_eq!(next, 2);
        let mut all = ids(&list);
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_toggle_and_delete_unknown_id_are_noops() {
        let mut list = TodoList::from_persisted(vec![todo(1, "a", false)]);
        let before = list.clone();
        list.toggle(99);
        list.delete(99);
        assert_eq!(list, before);

        list.delete(1);
        assert!(list.as_slice().is_empty());
    }

    #[test]
    fn test_clear_completed() {
        let mut list = TodoList::from_persisted(vec![
            todo(1, "a", true),
            todo(2, "b", false),
            todo(3, "c", true),
        ]);
        list.clear_completed();
        assert_eq!(ids(&list), vec![2]);
        assert!(list.filtered(Filter::Completed).is_empty());
    }

    #[test]
    fn test_reorder_moves_before_target() {
        let mut list = TodoList::from_persisted(vec![
            todo(1, "A", false),
            todo(2, "B", false),
            todo(3, "C", false),
        ]);
        list.reorder(3, 1);
        assert_eq!(ids(&list), vec![3, 1, 2]);
    }

    #[test]
    fn test_reorder_downwards_takes_target_index() {
        let mut list = TodoList::from_persisted(vec![
            todo(1, "A", false),
            todo(2, "B", false),
            todo(3, "C", false),
        ]);
        list.reorder(1, 3);
        assert_eq!(ids(&list), vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_noops() {
        let mut list = TodoList::from_persisted(vec![todo(1, "A", false), todo(2, "B", false)]);
        list.reorder(1, 1);
        list.reorder(1, 42);
        list.reorder(42, 1);
        assert_eq!(ids(&list), vec![1, 2]);
    }

    #[test]
    fn test_from_persisted_sanitizes() {
        let list = TodoList::from_persisted(vec![
            todo(1, " keep ", false),
            todo(2, "   ", false),
            todo(1, "duplicate", true),
            todo(3, "other", true),
        ]);
        assert_eq!(ids(&list), vec![1, 3]);
        assert_eq!(find(&list, 1).text, "keep");
    }

    fn arb_list() -> impl Strategy<Value = TodoList> {
        prop::collection::vec(("[a-z ]{0,8}", any::<bool>()), 0..12).prop_map(|entries| {
            let todos = entries
                .into_iter()
                .enumerate()
                .map(|(i, (text, completed))| Todo { id: i as u64 + 1, text: format!("t{}{}", i, text), completed })
                .collect();
            TodoList::from_persisted(todos)
        })
    }

    proptest! {
        #[test]
        fn prop_add_changes_list_iff_text_not_blank(list in arb_list(), text in "[ \ta-z]{0,6}") {
            let mut after = list.clone();
            after.add(&text);
            prop_assert_eq!(after == list, text.trim().is_empty());
        }

        #[test]
        fn prop_toggle_twice_is_identity(list in arb_list(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!list.as_slice().is_empty());
            let id = pick.get(list.as_slice()).id;
            let mut after = list.clone();
            after.toggle(id);
            prop_assert_ne!(&after, &list);
            after.toggle(id);
            prop_assert_eq!(after, list);
        }

        #[test]
        fn prop_reorder_is_permutation(list in arb_list(), a in 0u64..14, b in 0u64..14) {
            let mut after = list.clone();
            after.reorder(a, b);
            let mut before_ids = ids(&list);
            let mut after_ids = ids(&after);
            before_ids.sort_unstable();
            after_ids.sort_unstable();
            prop_assert_eq!(before_ids, after_ids);
        }

        #[test]
        fn prop_active_and_completed_partition_all(list in arb_list()) {
            let active: HashSet<u64> = list.filtered(Filter::Active).iter().map(|t| t.id).collect();
            let completed: HashSet<u64> = list.filtered(Filter::Completed).iter().map(|t| t.id).collect();
            let all: HashSet<u64> = list.filtered(Filter::All).iter().map(|t| t.id).collect();
            prop_assert!(active.is_disjoint(&completed));
            prop_assert_eq!(active.union(&completed).copied().collect::<HashSet<_>>(), all);
            prop_assert_eq!(list.filtered(Filter::All), list.as_slice().to_vec());
        }

        #[test]
        fn prop_clear_completed_leaves_no_completed(list in arb_list()) {
            let mut after = list.clone();
            after.clear_completed();
            prop_assert!(after.filtered(Filter::Completed).is_empty());
            prop_assert_eq!(after.as_slice().len(), list.remaining_count());
        }
    }
}
