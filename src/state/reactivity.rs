// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para eventos
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<E> = Rc<dyn Fn(&E)>;

/// Identificador para cancelar una suscripción
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Canal de eventos con subscribers (un solo hilo).
///
/// Los clones comparten la misma lista de subscribers.
pub struct EventHub<E> {
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Callback<E>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<E> EventHub<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Suscribirse a eventos
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    /// Notificar a todos los subscribers.
    ///
    /// Se copia la lista antes de llamar para que un callback pueda
    /// suscribirse o desuscribirse sin pánico por doble borrow.
    pub fn emit(&self, event: &E) {
        let callbacks: Vec<Callback<E>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<E> Clone for EventHub<E> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<E> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_reaches_all_subscribers_until_unsubscribed() {
        let hub: EventHub<u32> = EventHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let seen = seen.clone();
            hub.subscribe(move |n| seen.borrow_mut().push(("a", *n)))
        };
        {
            let seen = seen.clone();
            hub.subscribe(move |n| seen.borrow_mut().push(("b", *n)));
        }

        hub.emit(&1);
        assert!(hub.unsubscribe(a));
        assert!(!hub.unsubscribe(a));
        hub.clone().emit(&2);

        assert_eq!(*seen.borrow(), vec![("a", 1), ("b", 1), ("b", 2)]);
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let hub: EventHub<()> = EventHub::new();
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let id = {
            let hub = hub.clone();
            let slot = slot.clone();
            hub.clone().subscribe(move |_| {
                if let Some(id) = slot.get() {
                    hub.unsubscribe(id);
                }
            })
        };
        slot.set(Some(id));
        hub.emit(&());
        assert_eq!(hub.subscriber_count(), 0);
    }
}
