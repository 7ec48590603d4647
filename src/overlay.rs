use web_sys as web;

use crate::dom;

/// Apply the choreography's blur overlay opacity; hidden entirely at zero.
#[inline]
pub fn apply(overlay: &web::HtmlElement, opacity: f32) {
    if opacity <= 0.0 {
        dom::set_visible(overlay, false);
        return;
    }
    dom::set_visible(overlay, true);
    dom::set_style(overlay, "opacity", &format!("{:.3}", opacity.min(1.0)));
}
