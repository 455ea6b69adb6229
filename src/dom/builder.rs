// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use web_sys::Element;
use crate::dom::create_element;
use crate::error::StoreResult;

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> StoreResult<Self> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.element.set_id(id);
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    /// HTML ya escapado por las vistas
    pub fn html(self, html: &str) -> Self {
        self.element.set_inner_html(html);
        self
    }

    /// Construye y cuelga el elemento de `parent`
    pub fn append_to(self, parent: &Element) -> StoreResult<Element> {
        parent.append_child(&self.element)?;
        Ok(self.element)
    }
}
