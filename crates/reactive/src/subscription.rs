//! Subscription management for reactive notifications.
//!
//! This module provides subscription IDs and a generic manager for tracking
//! active subscriptions to an observable value. The manager is generic over
//! the notification payload: the dataset store notifies with row snapshots,
//! the filtered view with filtered snapshots.

use alloc::boxed::Box;
use alloc::vec::Vec;
use hashbrown::HashMap;

/// Unique identifier for a subscription.
pub type SubscriptionId = u64;

/// A subscription to notifications carrying a `T` payload.
pub struct Subscription<T: ?Sized> {
    /// Unique identifier
    id: SubscriptionId,
    /// Callback to invoke on notification
    callback: Box<dyn Fn(&T)>,
    /// Whether this subscription is active
    active: bool,
}

impl<T: ?Sized> Subscription<T> {
    /// Creates a new subscription.
    pub fn new<F>(id: SubscriptionId, callback: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self {
            id,
            callback: Box::new(callback),
            active: true,
        }
    }

    /// Returns the subscription ID.
    #[inline]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns whether this subscription is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivates this subscription.
    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Notifies this subscription.
    pub fn notify(&self, payload: &T) {
        if self.active {
            (self.callback)(payload);
        }
    }
}

/// Manages subscriptions for one observable value.
pub struct SubscriptionManager<T: ?Sized> {
    /// Active subscriptions
    subscriptions: HashMap<SubscriptionId, Subscription<T>>,
    /// Next subscription ID to assign
    next_id: SubscriptionId,
}

impl<T: ?Sized> Default for SubscriptionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> SubscriptionManager<T> {
    /// Creates a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: HashMap::new(),
            next_id: 1,
        }
    }

    /// Subscribes with the given callback.
    ///
    /// Returns the subscription ID that can be used to unsubscribe.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        let subscription = Subscription::new(id, callback);
        self.subscriptions.insert(id, subscription);

        id
    }

    /// Unsubscribes by ID.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    /// Notifies all active subscriptions.
    pub fn notify_all(&self, payload: &T) {
        for sub in self.subscriptions.values() {
            sub.notify(payload);
        }
    }

    /// Returns the number of active subscriptions.
    #[inline]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns true if there are no subscriptions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Returns all subscription IDs.
    pub fn subscription_ids(&self) -> Vec<SubscriptionId> {
        self.subscriptions.keys().copied().collect()
    }

    /// Clears all subscriptions.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use core::cell::RefCell;

    #[test]
    fn test_subscription_new() {
        let sub: Subscription<u32> = Subscription::new(1, |_| {});
        assert_eq!(sub.id(), 1);
        assert!(sub.is_active());
    }

    #[test]
    fn test_subscription_deactivate() {
        let mut sub: Subscription<u32> = Subscription::new(1, |_| {});
        sub.deactivate();
        assert!(!sub.is_active());

        let called = Rc::new(RefCell::new(false));
        let called_clone = called.clone();
        let mut sub: Subscription<u32> = Subscription::new(2, move |_| {
            *called_clone.borrow_mut() = true;
        });
        sub.deactivate();
        sub.notify(&42);
        assert!(!*called.borrow());
    }

    #[test]
    fn test_manager_subscribe_ids() {
        let mut manager: SubscriptionManager<String> = SubscriptionManager::new();

        let id1 = manager.subscribe(|_| {});
        let id2 = manager.subscribe(|_| {});

        assert_eq!(id1, 1);
        assert_eq!(id2, 2);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_manager_unsubscribe() {
        let mut manager: SubscriptionManager<String> = SubscriptionManager::new();

        let id = manager.subscribe(|_| {});
        assert!(manager.unsubscribe(id));
        assert!(manager.is_empty());
        assert!(!manager.unsubscribe(id)); // Already removed
    }

    #[test]
    fn test_manager_notify_all() {
        let mut manager: SubscriptionManager<i64> = SubscriptionManager::new();

        let sum = Rc::new(RefCell::new(0));
        let s1 = sum.clone();
        let s2 = sum.clone();

        manager.subscribe(move |v| *s1.borrow_mut() += *v);
        manager.subscribe(move |v| *s2.borrow_mut() += *v * 10);

        manager.notify_all(&3);
        assert_eq!(*sum.borrow(), 33);
    }

    #[test]
    fn test_manager_unsubscribed_not_notified() {
        let mut manager: SubscriptionManager<i64> = SubscriptionManager::new();

        let count = Rc::new(RefCell::new(0));
        let c1 = count.clone();
        let c2 = count.clone();

        let _id1 = manager.subscribe(move |_| *c1.borrow_mut() += 1);
        let id2 = manager.subscribe(move |_| *c2.borrow_mut() += 1);

        manager.unsubscribe(id2);
        manager.notify_all(&0);

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_manager_clear() {
        let mut manager: SubscriptionManager<i64> = SubscriptionManager::new();

        manager.subscribe(|_| {});
        manager.subscribe(|_| {});
        assert_eq!(manager.len(), 2);

        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_notify_unsized_payload() {
        // 切片负载
        let mut manager: SubscriptionManager<[u8]> = SubscriptionManager::new();

        let seen = Rc::new(RefCell::new(0usize));
        let seen_clone = seen.clone();
        manager.subscribe(move |slice: &[u8]| {
            *seen_clone.borrow_mut() = slice.len();
        });

        manager.notify_all(&[1, 2, 3][..]);
        assert_eq!(*seen.borrow(), 3);
    }
}
