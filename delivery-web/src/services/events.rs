//! # Token Event Bus
//!
//! Process-wide broadcast of token lifecycle events. The app runs on the
//! browser's single thread, so the global bus is thread-local and listeners
//! are plain `Rc` closures.

use std::cell::RefCell;
use std::rc::Rc;

use crate::session::{TokenEvent, TokenEventKind, TokenEvents};

pub type SubscriptionId = u64;

type Listener = Rc<dyn Fn(&TokenEvent)>;

#[derive(Default)]
struct Registry {
    next_id: SubscriptionId,
    listeners: Vec<(SubscriptionId, TokenEventKind, Listener)>,
}

#[derive(Clone, Default)]
pub struct TokenEventBus {
    registry: Rc<RefCell<Registry>>,
}

thread_local! {
    static GLOBAL_BUS: TokenEventBus = TokenEventBus::default();
}

impl TokenEventBus {
    /// The bus shared by the whole app.
    pub fn global() -> Self {
        GLOBAL_BUS.with(Clone::clone)
    }

    pub fn subscribe(
        &self,
        kind: TokenEventKind,
        listener: impl Fn(&TokenEvent) + 'static,
    ) -> SubscriptionId {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.listeners.push((id, kind, Rc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(listener_id, _, _)| *listener_id != id);
        registry.listeners.len() != before
    }
}

impl TokenEvents for TokenEventBus {
    fn dispatch(&self, kind: TokenEventKind, reason: &str) {
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, listener_kind, _)| *listener_kind == kind)
            .map(|(_, _, listener)| listener.clone())
            .collect();

        log::info!("Token event '{}' ({}) to {} listener(s)", kind, reason, listeners.len());

        let event = TokenEvent {
            kind,
            reason: reason.to_string(),
        };
        for listener in listeners {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(bus: &TokenEventBus) -> (SubscriptionId, Rc<RefCell<Vec<TokenEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = bus.subscribe(TokenEventKind::Expired, move |event| {
            sink.borrow_mut().push(event.clone())
        });
        (id, seen)
    }

    #[test]
    fn test_dispatch_reaches_every_subscriber() {
        let bus = TokenEventBus::default();
        let (_, first) = recorder(&bus);
        let (_, second) = recorder(&bus);

        bus.dispatch(TokenEventKind::Expired, "User logged out");

        let expected = vec![TokenEvent {
            kind: TokenEventKind::Expired,
            reason: "User logged out".to_string(),
        }];
        assert_eq!(*first.borrow(), expected);
        assert_eq!(*second.borrow(), expected);
    }

    #[test]
    fn test_unsubscribed_listener_not_called() {
        let bus = TokenEventBus::default();
        let (id, seen) = recorder(&bus);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.dispatch(TokenEventKind::Expired, "User logged out");

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listener_may_unsubscribe_itself() {
        let bus = TokenEventBus::default();
        let calls = Rc::new(RefCell::new(0));
        let own_id = Rc::new(RefCell::new(None));

        let handle = bus.clone();
        let counter = calls.clone();
        let slot = own_id.clone();
        let id = bus.subscribe(TokenEventKind::Expired, move |_| {
            *counter.borrow_mut() += 1;
            if let Some(id) = *slot.borrow() {
                handle.unsubscribe(id);
            }
        });
        *own_id.borrow_mut() = Some(id);

        bus.dispatch(TokenEventKind::Expired, "first");
        bus.dispatch(TokenEventKind::Expired, "second");

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_global_bus_is_shared() {
        let a = TokenEventBus::global();
        let b = TokenEventBus::global();
        let (id, seen) = recorder(&a);

        b.dispatch(TokenEventKind::Expired, "expired elsewhere");

        assert_eq!(seen.borrow().len(), 1);
        assert!(a.unsubscribe(id));
    }

    #[test]
    fn test_event_kind_name() {
        assert_eq!(TokenEventKind::Expired.as_str(), "expired");
        assert_eq!(TokenEventKind::Expired.to_string(), "expired");
    }
}
