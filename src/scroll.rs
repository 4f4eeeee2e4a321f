use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;
const FALLBACK_VIEWPORT_PX: f64 = 800.0;

/// Page vertical scroll offset, the one source every scroll-driven visual reads from.
#[derive(Clone, Copy)]
pub struct ScrollOffset(Signal<f64>);

impl ScrollOffset {
    pub fn get(&self) -> f64 {
        (self.0)()
    }
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

/// Registers the window scroll listener once and provides the offset to descendants.
pub fn use_scroll_offset_provider() -> ScrollOffset {
    let offset = use_signal(|| 0.0f64);
    #[cfg(target_arch = "wasm32")]
    let mut listener = use_signal(|| None::<ScrollListener>);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut on_scroll_offset = offset;
        let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            on_scroll_offset.set(y);
        }) as Box<dyn FnMut(_)>));
        let _ = window.add_event_listener_with_callback(
            "scroll",
            closure.as_ref().as_ref().unchecked_ref(),
        );
        listener.set(Some(ScrollListener { closure }));
    });

    #[cfg(target_arch = "wasm32")]
    use_drop(move || {
        let binding = listener.peek();
        let Some(listener) = binding.as_ref() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                listener.closure.as_ref().as_ref().unchecked_ref(),
            );
        }
    });

    use_context_provider(|| ScrollOffset(offset))
}

pub fn use_scroll_offset() -> ScrollOffset {
    use_context::<ScrollOffset>()
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub shift_percent: f64,
    pub opacity: f64,
}

impl HeroParallax {
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}%); opacity: {:.3};",
            self.shift_percent, self.opacity
        )
    }
}

/// Hero drifts down to 50% and fades out by half a viewport of scroll.
pub fn hero_parallax(offset: f64, viewport_height: f64) -> HeroParallax {
    let height = if viewport_height > 0.0 {
        viewport_height
    } else {
        FALLBACK_VIEWPORT_PX
    };
    let progress = (offset / height).clamp(0.0, 1.0);
    HeroParallax {
        shift_percent: progress * 50.0,
        opacity: (1.0 - progress * 2.0).clamp(0.0, 1.0),
    }
}

pub fn viewport_height() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(height) = web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|value| value.as_f64())
        {
            return height;
        }
    }
    FALLBACK_VIEWPORT_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn parallax_at_top_is_identity() {
        assert_eq!(
            hero_parallax(0.0, 900.0),
            HeroParallax {
                shift_percent: 0.0,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn parallax_fades_out_by_half_viewport() {
        let half = hero_parallax(400.0, 800.0);
        assert_eq!(half.shift_percent, 25.0);
        assert_eq!(half.opacity, 0.0);
        let past = hero_parallax(5000.0, 800.0);
        assert_eq!(past.shift_percent, 50.0);
    }

    #[test]
    fn zero_viewport_uses_fallback() {
        assert_eq!(hero_parallax(200.0, 0.0), hero_parallax(200.0, FALLBACK_VIEWPORT_PX));
    }

    #[test]
    fn style_formats_transform() {
        let style = hero_parallax(200.0, 800.0).style();
        assert_eq!(style, "transform: translateY(12.50%); opacity: 0.500;");
    }
}
