//! `IntersectionObserver` wiring.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::animation::Sighting;
use crate::SiteError;

/// Observe `targets` and hand every batch of entries to `on_batch`.
///
/// The observer lives for the rest of the page; `on_batch` may unobserve
/// targets through the observer it is given.
pub(super) fn observe(
    targets: &[Element],
    thresholds: &[f64],
    root_margin: &str,
    mut on_batch: impl FnMut(&[IntersectionObserverEntry], &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, SiteError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|e| e.dyn_into().ok())
                .collect();
            on_batch(&entries, &observer);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    let thresholds: Array = thresholds.iter().copied().map(JsValue::from_f64).collect();
    init.set_threshold(&thresholds);

    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

/// Index of `entry`'s target within `elements`.
pub(super) fn index_of(elements: &[Element], entry: &IntersectionObserverEntry) -> Option<usize> {
    let target = entry.target();
    elements.iter().position(|el| *el == target)
}

/// Translate a batch into sightings over `elements`, dropping entries for
/// unknown targets.
pub(super) fn sightings(
    elements: &[Element],
    entries: &[IntersectionObserverEntry],
) -> Vec<Sighting> {
    entries
        .iter()
        .filter_map(|entry| {
            Some(Sighting {
                element: index_of(elements, entry)?,
                intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
        })
        .collect()
}
