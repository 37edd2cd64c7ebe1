use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

use crate::error::{self, SiteError, SiteResult};

#[derive(Default)]
struct Subscribers {
    offset: f64,
    next_id: usize,
    entries: Vec<(usize, Callback<f64>)>,
}

/// The page's single scroll offset, shared by everything that reacts to it.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    inner: Rc<RefCell<Subscribers>>,
}

impl PartialEq for ScrollSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> f64 {
        self.inner.borrow().offset
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Records a new offset and notifies every subscriber synchronously.
    pub fn publish(&self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        // Snapshot first: a subscriber may unsubscribe while being notified.
        let callbacks: Vec<Callback<f64>> = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            inner.entries.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for cb in callbacks {
            cb.emit(offset);
        }
    }

    pub fn subscribe(&self, callback: Callback<f64>) -> ScrollSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, callback));
        ScrollSubscription {
            id,
            signal: Rc::downgrade(&self.inner),
        }
    }

    /// Like [`subscribe`](Self::subscribe), but only calls back when
    /// `derive` maps the new offset to a different value than before.
    pub fn subscribe_changes<T>(&self, derive: fn(f64) -> T, callback: Callback<T>) -> ScrollSubscription
    where
        T: PartialEq + Clone + 'static,
    {
        let last = RefCell::new(derive(self.get()));
        self.subscribe(Callback::from(move |offset: f64| {
            let next = derive(offset);
            if *last.borrow() == next {
                return;
            }
            *last.borrow_mut() = next.clone();
            callback.emit(next);
        }))
    }
}

/// Dropping the subscription unsubscribes.
pub struct ScrollSubscription {
    id: usize,
    signal: Weak<RefCell<Subscribers>>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Window listeners feeding a [`ScrollSignal`]; removed again on drop.
pub struct ScrollListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(signal: ScrollSignal) -> SiteResult<Self> {
        let window = error::window()?;
        let window_clone = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Ok(offset) = window_clone.scroll_y() {
                signal.publish(offset);
            }
        }) as Box<dyn FnMut()>);

        for event in EVENTS {
            window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .map_err(|e| SiteError::js("addEventListener", e))?;
        }
        debug!("scroll listener attached");

        let listener = Self { window, callback };
        // Initial check, the page may load already scrolled
        listener.sync();
        Ok(listener)
    }

    fn sync(&self) {
        let _ = self
            .callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&wasm_bindgen::JsValue::NULL);
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
        debug!("scroll listener removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<Cell<f64>>, Callback<f64>) {
        let seen = Rc::new(Cell::new(-1.0));
        let sink = seen.clone();
        (seen, Callback::from(move |y| sink.set(y)))
    }

    #[test]
    fn subscribers_see_every_publish() {
        let signal = ScrollSignal::new();
        let (seen, cb) = recorder();
        let _sub = signal.subscribe(cb);

        signal.publish(10.0);
        assert_eq!(seen.get(), 10.0);
        signal.publish(1000.0);
        assert_eq!(seen.get(), 1000.0);
        assert_eq!(signal.get(), 1000.0);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let signal = ScrollSignal::new();
        let (seen, cb) = recorder();
        let sub = signal.subscribe(cb);
        assert_eq!(signal.subscriber_count(), 1);

        drop(sub);
        assert_eq!(signal.subscriber_count(), 0);
        signal.publish(42.0);
        assert_eq!(seen.get(), -1.0);
    }

    #[test]
    fn only_the_dropped_subscriber_goes_away() {
        let signal = ScrollSignal::new();
        let (first, cb1) = recorder();
        let (second, cb2) = recorder();
        let sub1 = signal.subscribe(cb1);
        let _sub2 = signal.subscribe(cb2);

        drop(sub1);
        signal.publish(7.0);
        assert_eq!(first.get(), -1.0);
        assert_eq!(second.get(), 7.0);
    }

    #[test]
    fn derived_subscribers_only_hear_changes() {
        let signal = ScrollSignal::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let _sub = signal.subscribe_changes(
            |y| y > 50.0,
            Callback::from(move |scrolled: bool| sink.borrow_mut().push(scrolled)),
        );

        for y in [10.0, 20.0, 50.0, 51.0, 300.0, 800.0, 40.0, 0.0] {
            signal.publish(y);
        }
        assert_eq!(*calls.borrow(), vec![true, false]);
    }

    #[test]
    fn derived_value_starts_from_current_offset() {
        let signal = ScrollSignal::new();
        signal.publish(200.0);
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();
        let _sub = signal.subscribe_changes(
            |y| y > 50.0,
            Callback::from(move |_: bool| sink.set(sink.get() + 1)),
        );

        signal.publish(260.0);
        assert_eq!(calls.get(), 0);
        signal.publish(30.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let signal = ScrollSignal::new();
        signal.publish(120.0);
        signal.publish(f64::NAN);
        signal.publish(f64::INFINITY);
        assert_eq!(signal.get(), 120.0);
    }

    #[test]
    fn subscription_outliving_signal_is_harmless() {
        let signal = ScrollSignal::new();
        let (_, cb) = recorder();
        let sub = signal.subscribe(cb);
        drop(signal);
        drop(sub);
    }

    #[test]
    fn clones_share_one_offset() {
        let signal = ScrollSignal::new();
        let other = signal.clone();
        other.publish(33.0);
        assert_eq!(signal.get(), 33.0);
        assert!(signal == other);
        assert!(signal != ScrollSignal::new());
    }
}
