use std::sync::RwLock;

use dashmap::DashMap;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use uuid::Uuid;

pub type SubscriberId = Uuid;

/// Explicitly-owned observable state container.
/// Every committed mutation pushes a full snapshot to each live
/// subscriber; views re-derive their display from the snapshot, never
/// from deltas. Subscribers that went away are pruned on the next notify.
pub struct Store<T: Clone> {
    value: RwLock<T>,
    subscribers: DashMap<SubscriberId, UnboundedSender<T>>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            subscribers: DashMap::new(),
        }
    }

    pub fn get(&self) -> T {
        self.value.read().expect("store lock poisoned").clone()
    }

    pub fn set(&self, value: T) {
        {
            let mut current = self.value.write().expect("store lock poisoned");
            *current = value.clone();
        }
        self.notify(value);
    }

    pub fn update<F>(&self, mutate: F) -> T
    where
        F: FnOnce(&mut T),
    {
        let snapshot = {
            let mut current = self.value.write().expect("store lock poisoned");
            mutate(&mut current);
            current.clone()
        };
        self.notify(snapshot.clone());
        snapshot
    }

    pub fn subscribe(&self) -> (SubscriberId, UnboundedReceiver<T>) {
        let (tx, rx) = unbounded_channel();
        let id = Uuid::new_v4();
        self.subscribers.insert(id, tx);
        (id, rx)
    }

    pub fn unsubscribe(&self, id: &SubscriberId) {
        self.subscribers.remove(id);
    }

    fn notify(&self, snapshot: T) {
        self.subscribers
            .retain(|_, tx| tx.send(snapshot.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_latest_snapshot() {
        let store = Store::new(1u32);
        assert_eq!(store.get(), 1);
        store.set(5);
        assert_eq!(store.get(), 5);
        store.update(|v| *v += 1);
        assert_eq!(store.get(), 6);
    }

    #[test]
    fn test_subscribers_receive_full_snapshots() {
        let store = Store::new(vec![1u32]);
        let (_id, mut rx) = store.subscribe();

        store.update(|v| v.push(2));
        store.set(vec![7]);

        assert_eq!(rx.try_recv().unwrap(), vec![1, 2]);
        assert_eq!(rx.try_recv().unwrap(), vec![7]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Store::new(0u32);
        let (id, mut rx) = store.subscribe();
        store.set(1);
        store.unsubscribe(&id);
        store.set(2);
        assert_eq!(rx.try_recv().unwrap(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let store = Store::new(0u32);
        let (_id, rx) = store.subscribe();
        drop(rx);
        store.set(1);
        assert!(store.subscribers.is_empty());
    }
}
