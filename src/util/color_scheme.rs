//! OS color-scheme preference.
//!
//! Queries `prefers-color-scheme: dark` synchronously and subscribes to its
//! `change` event. Off-browser builds report light and never notify.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

#[cfg(feature = "csr")]
use crate::config::PREFERS_DARK_QUERY;

/// Whether the OS currently prefers a dark color scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        media_query().map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Call `on_change` with the new answer whenever the OS preference flips.
///
/// The listener stays registered for the lifetime of the page. Returns
/// `false` if the environment offers no media query to subscribe to.
pub fn watch(on_change: impl Fn(bool) + 'static) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = media_query() else {
            return false;
        };
        let cb = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if mq
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not subscribe to color-scheme changes");
            return false;
        }
        cb.forget();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
        false
    }
}

#[cfg(feature = "csr")]
fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(PREFERS_DARK_QUERY).ok().flatten()
}
