use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::{AnimationVariant, RevealLatch, REVEALED_CLASS};
use crate::config;

// Long enough for the browser to paint the hidden state first, otherwise
// the transition is skipped.
const MOUNT_REVEAL_DELAY_MS: u32 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    #[default]
    OnVisible,
    OnMount,
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub variant: AnimationVariant,
    #[prop_or_default]
    pub trigger: RevealTrigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Default)]
struct ArmedReveal {
    _watch: Option<VisibilityWatch>,
    _timer: Option<Timeout>,
}

fn watch_visibility(
    element: &Element,
    latch: Rc<RefCell<RevealLatch>>,
    on_reveal: Callback<()>,
) -> Result<VisibilityWatch, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if latch.borrow_mut().observe(entry.is_intersecting()) {
                on_reveal.emit(());
                // Revealed is terminal, nothing left to watch for.
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(VisibilityWatch {
        observer,
        _callback: callback,
    })
}

fn reveal_now(latch: &RefCell<RevealLatch>, on_reveal: &Callback<()>) {
    if latch.borrow_mut().observe(true) {
        on_reveal.emit(());
    }
}

fn arm(
    trigger: RevealTrigger,
    element: Option<Element>,
    latch: Rc<RefCell<RevealLatch>>,
    on_reveal: Callback<()>,
) -> ArmedReveal {
    match (trigger, element) {
        (RevealTrigger::OnMount, _) => ArmedReveal {
            _timer: Some(Timeout::new(MOUNT_REVEAL_DELAY_MS, move || {
                reveal_now(&latch, &on_reveal)
            })),
            ..ArmedReveal::default()
        },
        (RevealTrigger::OnVisible, Some(element)) => {
            match watch_visibility(&element, latch.clone(), on_reveal.clone()) {
                Ok(watch) => ArmedReveal {
                    _watch: Some(watch),
                    ..ArmedReveal::default()
                },
                Err(err) => {
                    warn!("intersection observer unavailable, showing content: {:?}", err);
                    reveal_now(&latch, &on_reveal);
                    ArmedReveal::default()
                }
            }
        }
        (RevealTrigger::OnVisible, None) => {
            warn!("reveal target was never mounted, showing content");
            reveal_now(&latch, &on_reveal);
            ArmedReveal::default()
        }
    }
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let latch = use_mut_ref(RevealLatch::new);
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let latch = latch.clone();
        let revealed = revealed.clone();
        let trigger = props.trigger;
        let variant = props.variant;
        use_effect_with_deps(
            move |_| {
                let on_reveal = Callback::from(move |_: ()| {
                    debug!("revealing {}", variant.class_name());
                    revealed.set(true);
                });

                let armed = arm(trigger, node.cast::<Element>(), latch, on_reveal);

                move || drop(armed)
            },
            (),
        );
    }

    let class = classes!(
        "motion",
        props.variant.class_name(),
        (*revealed).then_some(REVEALED_CLASS),
        props.class.clone()
    );

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={class}
            style={props.variant.container_style()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_callback() -> (Callback<()>, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        (Callback::from(move |_: ()| seen.set(seen.get() + 1)), count)
    }

    #[test]
    fn missing_target_reveals_immediately() {
        let latch = Rc::new(RefCell::new(RevealLatch::new()));
        let (on_reveal, count) = counting_callback();

        let _armed = arm(RevealTrigger::OnVisible, None, latch.clone(), on_reveal);

        assert_eq!(count.get(), 1);
        assert!(latch.borrow().is_revealed());
    }

    #[test]
    fn fallback_reveal_fires_once() {
        let latch = Rc::new(RefCell::new(RevealLatch::new()));
        let (on_reveal, count) = counting_callback();

        let _first = arm(RevealTrigger::OnVisible, None, latch.clone(), on_reveal.clone());
        let _second = arm(RevealTrigger::OnVisible, None, latch.clone(), on_reveal.clone());
        reveal_now(&latch, &on_reveal);

        assert_eq!(count.get(), 1);
    }
}
