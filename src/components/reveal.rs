use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// One-shot hidden -> visible latch. Once set it ignores further events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` only for the event that flips the latch. The observer
    /// already applies the visibility threshold, so any intersecting entry
    /// counts.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    /// Used when the browser cannot observe the element at all.
    pub fn force(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let latch = use_mut_ref(RevealLatch::default);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, latch.clone(), visible.clone()));

                if observer.is_none() && latch.borrow_mut().force() {
                    warn!("IntersectionObserver unavailable, revealing immediately");
                    visible.set(true);
                }

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), (*visible).then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    latch: Rc<RefCell<RevealLatch>>,
    visible: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if latch.borrow_mut().observe(entry.is_intersecting()) {
                debug!("Section revealed at ratio {:.2}", entry.intersection_ratio());
                visible.set(true);
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}
