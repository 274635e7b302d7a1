//! Subscriber records - a selector plus its cached last-seen value.

use crate::state::AppState;

/// Opaque handle returned by [`AppStore::subscribe`](super::AppStore::subscribe),
/// used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// One registered subscriber. The boxed closure owns the selector, the
/// cached last-seen value, and the callback; it recomputes and compares on
/// every notification pass, invoking the callback only on change.
pub(crate) struct Subscriber {
    pub(crate) id: u64,
    pub(crate) notify: Box<dyn FnMut(&AppState) + Send>,
}

impl Subscriber {
    pub(crate) fn new<T, S, F>(id: u64, initial: &AppState, selector: S, mut callback: F) -> Self
    where
        T: PartialEq + Send + 'static,
        S: Fn(&AppState) -> T + Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        let mut last = selector(initial);
        Subscriber {
            id,
            notify: Box::new(move |state| {
                let fresh = selector(state);
                if fresh != last {
                    last = fresh;
                    callback(&last);
                }
            }),
        }
    }
}
