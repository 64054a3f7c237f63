//! Theme-change listener registry.

use crate::theme::Theme;

/// Handle identifying a registered listener.
///
/// Returned by [`ThemeController::subscribe`](super::ThemeController::subscribe)
/// and accepted by [`ThemeController::unsubscribe`](super::ThemeController::unsubscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(Theme)>;

/// Listeners in registration order. Ids are never reused.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, theme: Theme) {
        for (_, listener) in &mut self.entries {
            listener(theme);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        let first = Rc::clone(&seen);
        listeners.add(Box::new(move |t| first.borrow_mut().push(("first", t))));
        let second = Rc::clone(&seen);
        listeners.add(Box::new(move |t| second.borrow_mut().push(("second", t))));

        listeners.notify(Theme::Dark);
        assert_eq!(
            *seen.borrow(),
            vec![("first", Theme::Dark), ("second", Theme::Dark)]
        );
    }

    #[test]
    fn test_remove_and_ids_not_reused() {
        let mut listeners = Listeners::default();
        let a = listeners.add(Box::new(|_| {}));
        assert!(listeners.remove(a));
        assert!(!listeners.remove(a));

        let b = listeners.add(Box::new(|_| {}));
        assert_ne!(a, b);
        assert_eq!(listeners.len(), 1);
    }
}
