use std::collections::HashMap;

use js_sys::{Array, Object, Reflect};
use leptos::{ev, html, prelude::*};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::magnetic::{Bounds, PointerFollow};
use crate::reveal::{
    RevealOutcome, RevealTracker, VisibilityObserver, VisibilitySample, REVEAL_THRESHOLD,
};
use crate::theme::Theme;

const REVEAL_KEY_ATTR: &str = "data-reveal-key";
const HOVERABLE: &str = "button, a, [role=\"button\"]";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// `IntersectionObserver` keyed by reveal key.
pub struct DomObserver {
    observer: IntersectionObserver,
    targets: HashMap<usize, Element>,
    _callback: ObserverCallback,
}

impl DomObserver {
    /// `None` when the browser has no `IntersectionObserver`.
    fn new(mut on_samples: impl FnMut(Vec<(usize, VisibilitySample)>) + 'static) -> Option<Self> {
        let global: Object = window().into();
        if !Reflect::has(&global, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
            return None;
        }

        let callback = ObserverCallback::new(move |entries: Array, _: IntersectionObserver| {
            let samples = entries
                .iter()
                .filter_map(|entry| {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let key = entry.target().get_attribute(REVEAL_KEY_ATTR)?.parse().ok()?;
                    Some((
                        key,
                        VisibilitySample {
                            intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        },
                    ))
                })
                .collect();
            on_samples(samples);
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;
        Some(Self {
            observer,
            targets: HashMap::new(),
            _callback: callback,
        })
    }
}

impl VisibilityObserver<usize> for DomObserver {
    type Target = Element;

    fn observe(&mut self, key: &usize, target: Element) {
        self.observer.observe(&target);
        self.targets.insert(*key, target);
    }

    fn unobserve(&mut self, key: &usize) {
        if let Some(target) = self.targets.remove(key) {
            self.observer.unobserve(&target);
        }
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
        self.targets.clear();
    }
}

type SharedTracker = StoredValue<Option<RevealTracker<usize, DomObserver>>, LocalStorage>;

/// Reveal tracking for one screen. Every screen provides its own, so coming
/// back to a screen plays its reveal animations again.
#[derive(Clone)]
pub struct RevealScope {
    tracker: SharedTracker,
    next_key: StoredValue<usize>,
    changed: ArcTrigger,
}

impl RevealScope {
    pub fn provide() -> Self {
        let scope = Self {
            tracker: StoredValue::new_local(None),
            next_key: StoredValue::new(0),
            changed: ArcTrigger::new(),
        };
        provide_context(scope.clone());

        let tracker = scope.tracker;
        on_cleanup(move || {
            tracker.try_update_value(|slot| {
                if let Some(t) = slot.as_mut() {
                    t.disconnect();
                }
            });
        });
        scope
    }

    fn next_key(&self) -> usize {
        self.next_key
            .try_update_value(|k| {
                *k += 1;
                *k
            })
            .unwrap_or_default()
    }

    /// Registers a mounted element. The observer is created lazily so that it
    /// only ever exists in the browser.
    fn track(&self, key: usize, element: Element) {
        let tracker = self.tracker;
        let changed = self.changed.clone();
        let outcome = tracker.try_update_value(|slot| {
            slot.get_or_insert_with(|| {
                let changed = changed.clone();
                RevealTracker::new(DomObserver::new(move |samples| {
                    let revealed = tracker
                        .try_update_value(|slot| {
                            let Some(t) = slot.as_mut() else {
                                return false;
                            };
                            let mut any = false;
                            for (key, sample) in samples {
                                any |= t.record(&key, sample) == RevealOutcome::Revealed;
                            }
                            any
                        })
                        .unwrap_or(false);
                    if revealed {
                        changed.notify();
                    }
                }))
            })
            .register(key, element)
        });
        if outcome == Some(RevealOutcome::Revealed) {
            changed.notify();
        }
    }

    fn is_revealed(&self, key: usize) -> bool {
        self.changed.track();
        self.tracker
            .try_with_value(|slot| slot.as_ref().is_some_and(|t| t.is_revealed(&key)))
            .unwrap_or(false)
    }
}

/// Wraps its children in a block that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let scope = expect_context::<RevealScope>();
    let key = scope.next_key();
    let node_ref = NodeRef::<html::Div>::new();

    Effect::new({
        let scope = scope.clone();
        move |_| {
            if let Some(el) = node_ref.get() {
                scope.track(key, el.into());
            }
        }
    });

    view! {
        <div
            node_ref=node_ref
            data-reveal-key=key.to_string()
            class=move || {
                if scope.is_revealed(key) {
                    format!("reveal active {class}")
                } else {
                    format!("reveal {class}")
                }
            }
        >
            {children()}
        </div>
    }
}

/// A button that leans toward the pointer while it hovers over it.
#[component]
pub fn MagneticButton(
    #[prop(into)] class: String,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Button>::new();
    let follow = RwSignal::new(PointerFollow::default());
    on_cleanup(move || {
        follow.try_update_untracked(PointerFollow::detach);
    });

    let on_move = move |ev: ev::MouseEvent| {
        let Some(el) = node_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds::new(rect.x(), rect.y(), rect.width(), rect.height());
        let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        follow.update(|f| {
            f.pointer_moved(bounds, pointer);
        });
    };
    let kind = if submit { "submit" } else { "button" };

    view! {
        <button
            node_ref=node_ref
            type=kind
            class=class
            style=move || format!("transform: {}", follow.with(PointerFollow::css_transform))
            on:mousemove=on_move
            on:mouseleave=move |_| {
                follow
                    .update(|f| {
                        f.pointer_left();
                    })
            }
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let (position, set_position) = signal((0, 0));
    let (hovering, set_hovering) = signal(false);

    let handle = window_event_listener(ev::mousemove, move |ev| {
        set_position.set((ev.client_x(), ev.client_y()));
        let over_control = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(HOVERABLE).ok().flatten())
            .is_some();
        set_hovering.set(over_control);
    });
    on_cleanup(move || handle.remove());

    view! {
        <div
            class=move || {
                if hovering.get() {
                    "custom-cursor cursor-hover hidden md:block"
                } else {
                    "custom-cursor hidden md:block"
                }
            }
            style=move || {
                let (x, y) = position.get();
                format!("left: {x}px; top: {y}px")
            }
        ></div>
    }
}

/// Sets the `dark` class on the document root.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().document_element() {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}
