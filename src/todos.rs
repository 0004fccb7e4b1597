//! Todo List Operations
//!
//! Pure list updates shared by the local and server-backed todo views.

use crate::models::TodoItem;

/// Pick an id for a new local item: the timestamp, or one past the largest id if taken
pub fn next_id(todos: &[TodoItem], now_ms: u64) -> u64 {
    if todos.iter().any(|t| t.id == now_ms) {
        todos.iter().map(|t| t.id).max().unwrap_or(now_ms) + 1
    } else {
        now_ms
    }
}

/// Append a new incomplete item. Blank text is ignored.
pub fn add(todos: &mut Vec<TodoItem>, text: &str, now_ms: u64) -> Option<u64> {
    if text.trim().is_empty() {
        return None;
    }
    let id = next_id(todos, now_ms);
    todos.push(TodoItem {
        id,
        text: text.to_string(),
        completed: false,
    });
    Some(id)
}

/// Flip `completed`; returns the new value
pub fn toggle(todos: &mut [TodoItem], id: u64) -> Option<bool> {
    todos.iter_mut().find(|t| t.id == id).map(|t| {
        t.completed = !t.completed;
        t.completed
    })
}

/// Remove by id; returns whether anything was removed
pub fn remove(todos: &mut Vec<TodoItem>, id: u64) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}

/// Replace the item with the same id, or append it
pub fn upsert(todos: &mut Vec<TodoItem>, item: TodoItem) {
    match todos.iter_mut().find(|t| t.id == item.id) {
        Some(existing) => *existing = item,
        None => todos.push(item),
    }
}

/// Current time in milliseconds, the browser's `Date.now()`
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64, completed: bool) -> TodoItem {
        TodoItem {
            id,
            text: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut todos = Vec::new();

        let id = add(&mut todos, "Buy milk", 1_000).expect("added");
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Buy milk");
        assert!(!todos[0].completed);

        assert_eq!(toggle(&mut todos, id), Some(true));
        assert!(todos[0].completed);

        assert!(remove(&mut todos, id));
        assert!(todos.is_empty());
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let mut todos = Vec::new();
        assert_eq!(add(&mut todos, "", 1), None);
        assert_eq!(add(&mut todos, "   \t", 2), None);
        assert!(todos.is_empty());
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut todos = vec![make_item(1, false), make_item(2, true)];
        toggle(&mut todos, 2);
        toggle(&mut todos, 2);
        assert_eq!(todos, vec![make_item(1, false), make_item(2, true)]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut todos = vec![make_item(1, false)];
        assert_eq!(toggle(&mut todos, 9), None);
        assert!(!remove(&mut todos, 9));
        assert_eq!(todos, vec![make_item(1, false)]);
    }

    #[test]
    fn test_same_millisecond_gets_fresh_id() {
        let mut todos = Vec::new();
        let a = add(&mut todos, "a", 500).unwrap();
        let b = add(&mut todos, "b", 500).unwrap();
        let c = add(&mut todos, "c", 500).unwrap();
        assert_eq!((a, b, c), (500, 501, 502));
    }

    #[test]
    fn test_sequence_matches_net_effect() {
        let mut todos = Vec::new();
        let a = add(&mut todos, "a", 10).unwrap();
        let b = add(&mut todos, "b", 20).unwrap();
        let c = add(&mut todos, "c", 30).unwrap();
        toggle(&mut todos, a);
        toggle(&mut todos, c);
        remove(&mut todos, b);
        toggle(&mut todos, c);
        let d = add(&mut todos, "d", 40).unwrap();

        let summary: Vec<(u64, &str, bool)> = todos.iter().map(|t| (t.id, t.text.as_str(), t.completed)).collect();
        assert_eq!(summary, vec![(a, "a", true), (c, "c", false), (d, "d", false)]);
    }

    #[test]
    fn test_upsert() {
        let mut todos = vec![make_item(1, false)];
        upsert(&mut todos, make_item(1, true));
        upsert(&mut todos, make_item(2, false));
        assert_eq!(todos, vec![make_item(1, true), make_item(2, false)]);
    }
}
