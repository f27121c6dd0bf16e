//! Thin, `Option`-returning wrappers over the browser APIs the page reads.
//! A missing window, document or element means "skip this cycle".

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::scroll::SectionRect;
use crate::section::Section;

pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

pub fn section_element(section: Section) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(section.id())
}

pub fn section_rect(section: Section) -> Option<SectionRect> {
    let rect = section_element(section)?.get_bounding_client_rect();
    Some(SectionRect {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

pub fn section_offset_top(section: Section) -> Option<f64> {
    let element = section_element(section)?.dyn_into::<HtmlElement>().ok()?;
    Some(element.offset_top() as f64)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Whether `query` currently matches. `None` when the browser can't answer.
pub fn media_matches(query: &str) -> Option<bool> {
    let list = web_sys::window()?.match_media(query).ok()??;
    Some(list.matches())
}

/// Adds or removes `class` on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if result.is_err() {
        log::warn!("could not update root class {}", class);
    }
}
