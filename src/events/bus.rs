//! Event bus.
//!
//! Observers subscribe to the event kinds they care about. The bus keeps an
//! index from kind to subscriptions so publishing only visits interested
//! observers, in subscription order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{EventKind, TrackerEvent};

/// Receives tracker events.
///
/// Implemented for any `FnMut(&TrackerEvent)` closure.
pub trait TrackerObserver {
    /// Handle one event.
    fn on_event(&mut self, event: &TrackerEvent);
}

impl<F> TrackerObserver for F
where
    F: FnMut(&TrackerEvent),
{
    fn on_event(&mut self, event: &TrackerEvent) {
        self(event)
    }
}

/// Handle returned by `EventBus::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Create a new subscription ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

struct Subscription {
    kinds: Vec<EventKind>,
    observer: Box<dyn TrackerObserver>,
}

/// Synchronous publish/subscribe hub for tracker events.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use tile_tracker::events::{EventBus, EventKind, TrackerEvent};
///
/// let seen = Rc::new(RefCell::new(0));
/// let counter = Rc::clone(&seen);
///
/// let mut bus = EventBus::new();
/// bus.subscribe(&[EventKind::Reset], move |_: &TrackerEvent| *counter.borrow_mut() += 1);
///
/// bus.publish(&TrackerEvent::Reset);
/// assert_eq!(*seen.borrow(), 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    subscriptions: FxHashMap<SubscriptionId, Subscription>,

    /// Index by event kind for fast lookup.
    by_kind: FxHashMap<EventKind, Vec<SubscriptionId>>,

    next_id: u32,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an observer to the given kinds. Duplicate kinds are ignored.
    pub fn subscribe(
        &mut self,
        kinds: &[EventKind],
        observer: impl TrackerObserver + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;

        let mut unique = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
                self.by_kind.entry(kind).or_default().push(id);
            }
        }

        self.subscriptions.insert(
            id,
            Subscription {
                kinds: unique,
                observer: Box::new(observer),
            },
        );
        id
    }

    /// Subscribe an observer to every event kind.
    pub fn subscribe_all(&mut self, observer: impl TrackerObserver + 'static) -> SubscriptionId {
        self.subscribe(&EventKind::ALL, observer)
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(subscription) = self.subscriptions.remove(&id) else {
            return false;
        };

        for kind in &subscription.kinds {
            if let Some(list) = self.by_kind.get_mut(kind) {
                list.retain(|&sid| sid != id);
                if list.is_empty() {
                    self.by_kind.remove(kind);
                }
            }
        }
        true
    }

    /// Deliver an event to every observer subscribed to its kind.
    pub fn publish(&mut self, event: &TrackerEvent) {
        let Some(ids) = self.by_kind.get(&event.kind()) else {
            return;
        };

        for id in ids {
            if let Some(subscription) = self.subscriptions.get_mut(id) {
                subscription.observer.on_event(event);
            }
        }
    }

    /// Deliver a batch of events in order.
    pub fn publish_all<'a>(&mut self, events: impl IntoIterator<Item = &'a TrackerEvent>) {
        for event in events {
            self.publish(event);
        }
    }

    /// Get the number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Check if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
