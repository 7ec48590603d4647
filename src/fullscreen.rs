use web_sys as web;

/// Fullscreen state as last requested by this viewer; the platform is not polled.
#[derive(Default)]
pub struct FullscreenToggle {
    active: bool,
}

impl FullscreenToggle {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self, container: &web::Element) {
        let Some(document) = crate::dom::window_document() else {
            return;
        };
        if document.fullscreen_element().is_none() {
            match container.request_fullscreen() {
                Ok(()) => self.active = true,
                Err(e) => log::debug!("[fullscreen] request denied: {:?}", e),
            }
        } else {
            document.exit_fullscreen();
            self.active = false;
        }
    }
}
