use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has unexpected type: {:?}", e))
}

#[inline]
pub fn optional_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        Self::with_passive(target, event, true, handler)
    }

    /// Non-passive listeners may call `prevent_default` (wheel, touch).
    pub fn with_passive(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[dom] cannot listen for {}: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Listener guards owned by one mounted viewer.
#[derive(Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn push(&mut self, listener: Option<Listener>) {
        if let Some(l) = listener {
            self.0.push(l);
        }
    }

    pub fn on_click(
        &mut self,
        document: &web::Document,
        element_id: &str,
        mut handler: impl FnMut() + 'static,
    ) {
        if let Some(el) = document.get_element_by_id(element_id) {
            self.push(Listener::new(&el, "click", move |_| handler()));
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    set_style(el, "display", if visible { "" } else { "none" });
}

#[inline]
pub fn set_text(el: &web::HtmlElement, text: &str) {
    if el.text_content().as_deref() != Some(text) {
        el.set_text_content(Some(text));
    }
}

/// Mark the child carrying `attr == value` as active and clear the others.
pub fn mark_active_child(container: &web::Element, attr: &str, value: &str) {
    let Ok(children) = container.query_selector_all(&format!("[{attr}]")) else {
        return;
    };
    for i in 0..children.length() {
        if let Some(el) = children.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            let active = el.get_attribute(attr).as_deref() == Some(value);
            _ = el.set_attribute(crate::constants::DATA_ACTIVE, if active { "1" } else { "0" });
        }
    }
}
