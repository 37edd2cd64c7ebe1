use log::warn;
use yew::prelude::*;

use crate::motion::scroll::{ScrollListener, ScrollSignal};

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub children: Children,
}

/// Owns the page's one scroll listener and shares the offset below it.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let signal = use_state(ScrollSignal::new);

    use_effect_with_deps(
        move |signal: &ScrollSignal| {
            let listener = match ScrollListener::attach(signal.clone()) {
                Ok(listener) => Some(listener),
                Err(err) => {
                    // The page still works, it just stays at its top-of-page look.
                    warn!("scroll tracking disabled: {}", err);
                    None
                }
            };
            move || drop(listener)
        },
        (*signal).clone(),
    );

    html! {
        <ContextProvider<ScrollSignal> context={(*signal).clone()}>
            { for props.children.iter() }
        </ContextProvider<ScrollSignal>>
    }
}

/// A value derived from the scroll offset. The caller re-renders only when
/// `derive` produces something different.
#[hook]
pub fn use_scroll_derived<T>(derive: fn(f64) -> T) -> T
where
    T: PartialEq + Clone + 'static,
{
    let signal = use_context::<ScrollSignal>();
    let value = use_state_eq(|| derive(signal.as_ref().map(ScrollSignal::get).unwrap_or(0.0)));

    {
        let value = value.clone();
        use_effect_with_deps(
            move |signal: &Option<ScrollSignal>| {
                let subscription = signal.as_ref().map(|signal| {
                    value.set(derive(signal.get()));
                    let value = value.clone();
                    signal.subscribe_changes(derive, Callback::from(move |v: T| value.set(v)))
                });
                move || drop(subscription)
            },
            signal,
        );
    }

    (*value).clone()
}

/// Current scroll offset; re-renders the caller on every scroll event.
#[hook]
pub fn use_scroll_offset() -> f64 {
    use_scroll_derived(|offset: f64| offset)
}
