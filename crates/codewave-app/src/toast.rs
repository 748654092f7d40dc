//! Toast notifications

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    /// Add a toast, evicting the oldest beyond capacity. Returns its id.
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            title: title.into(),
            description: description.into(),
        });
        if self.items.len() > self.capacity {
            let overflow = self.items.len() - self.capacity;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }

    /// Highest id handed out so far, 0 before the first push. Never goes
    /// down, even when toasts are dismissed or evicted.
    pub fn last_issued(&self) -> u64 {
        self.next_id - 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(ToastKind::Info, "a", "");
        let b = queue.push(ToastKind::Info, "b", "");
        assert!(b > a);
        assert_eq!(queue.latest().map(|t| t.title.as_str()), Some("b"));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut queue = ToastQueue::new(2);
        let first = queue.push(ToastKind::Info, "1", "");
        queue.push(ToastKind::Info, "2", "");
        queue.push(ToastKind::Error, "3", "");
        assert_eq!(queue.items().len(), 2);
        assert!(!queue.dismiss(first));
        assert_eq!(queue.items()[0].title, "2");
    }

    #[test]
    fn test_last_issued_survives_dismiss() {
        let mut queue = ToastQueue::default();
        assert_eq!(queue.last_issued(), 0);
        queue.push(ToastKind::Info, "1", "");
        let second = queue.push(ToastKind::Info, "2", "");
        assert!(queue.dismiss(second));
        assert_eq!(queue.last_issued(), second);
        assert_eq!(queue.latest().map(|t| t.id), Some(1));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Success, "done", "");
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
    }
}
