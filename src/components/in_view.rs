use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::{SiteError, SiteResult};
use crate::motion::latch::{LatchAction, ViewportLatch};

/// `rootMargin` that shrinks the viewport by `px` on every side.
pub fn root_margin(px: u32) -> String {
    if px == 0 {
        "0px".to_string()
    } else {
        format!("-{}px", px)
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live observer on one element. Disconnects on drop.
struct Observation {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Observation {
    fn start(
        node: &NodeRef,
        margin_px: u32,
        latch: UseReducerDispatcher<ViewportLatch>,
    ) -> SiteResult<Self> {
        let element = node
            .cast::<Element>()
            .ok_or_else(|| SiteError::detached("reveal section"))?;

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered {
                latch.dispatch(LatchAction::Observed(true));
                // once semantics: nothing left to watch for
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&root_margin(margin_px));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| SiteError::js("IntersectionObserver::new", e))?;
        observer.observe(&element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True from the first time `node` overlaps the shrunken viewport, forever.
///
/// When the platform cannot observe intersections the content is shown
/// straight away rather than staying hidden.
#[hook]
pub fn use_in_view(node: NodeRef, margin_px: u32) -> bool {
    let latch = use_reducer_eq(ViewportLatch::default);

    {
        let dispatcher = latch.dispatcher();
        use_effect_with_deps(
            move |(node, margin_px)| {
                let observation = match Observation::start(node, *margin_px, dispatcher.clone()) {
                    Ok(observation) => Some(observation),
                    Err(err) => {
                        warn!("reveal trigger unavailable, showing content: {}", err);
                        dispatcher.dispatch(LatchAction::ForceOpen);
                        None
                    }
                };
                move || drop(observation)
            },
            (node, margin_px),
        );
    }

    latch.has_entered()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_shrinks_the_viewport() {
        assert_eq!(root_margin(100), "-100px");
    }

    #[test]
    fn zero_margin_is_unsigned() {
        assert_eq!(root_margin(0), "0px");
    }
}
