//! Entrance animations driven by [`RevealPolicy`].

use folio_core::reveal::{RevealPolicy, RevealTrigger};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Wraps children in a block that starts in the policy's hidden pose and
/// transitions in when the trigger fires. Reveals happen once.
#[component]
pub fn Reveal(
    /// When and how to reveal.
    #[prop(default = RevealPolicy::fade_up())]
    policy: RevealPolicy,
    /// Extra classes for the wrapper.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let shown = RwSignal::new(false);

    match policy.trigger {
        // Wait a frame so the hidden pose is painted before transitioning.
        RevealTrigger::OnMount => request_animation_frame(move || {
            shown.try_set(true);
        }),
        RevealTrigger::OnEnterViewport { .. } => {
            let margin = policy.trigger.root_margin();
            let observation = StoredValue::new_local(None::<Observation>);
            Effect::new(move |_| {
                let Some(element) = node.get() else {
                    return;
                };
                let reveal = move || {
                    shown.try_set(true);
                };
                match observe_once(&element, &margin, reveal) {
                    Ok(watching) => observation.set_value(Some(watching)),
                    Err(err) => {
                        log::warn!("IntersectionObserver unavailable, showing immediately: {err:?}");
                        shown.try_set(true);
                    }
                }
            });
            // Unmounted before scrolling into view: stop observing.
            on_cleanup(move || {
                observation.try_update_value(Option::take);
            });
        }
    }

    let class = format!("folio-reveal {class}");
    let style = move || {
        if shown.get() {
            policy.shown_style()
        } else {
            policy.hidden_style()
        }
    };

    view! {
      <div node_ref=node class=class style=style>
        {children()}
      </div>
    }
}

/// A live observer and the callback it calls. Dropping it disconnects the
/// observer and frees the callback.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_enter` the first time `target` intersects the root, then stop
/// observing.
fn observe_once(
    target: &Element,
    root_margin: &str,
    on_enter: impl Fn() + 'static,
) -> Result<Observation, JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .any(|entry| entry.is_intersecting());
            if entered {
                observer.disconnect();
                on_enter();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(0.0));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);

    Ok(Observation {
        observer,
        _callback: callback,
    })
}
