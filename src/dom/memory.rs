//! In-memory document for running pages without a browser

use indexmap::IndexMap;

use super::{Document, Route, Window};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    pub html: String,
    pub value: String,
    pub visible: bool,
    pub checked: Option<bool>,
    pub attributes: IndexMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

impl Element {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            html: String::new(),
            value: String::new(),
            visible: true,
            checked: None,
            attributes: IndexMap::new(),
        }
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new()
        }
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::new()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Document and window state kept in memory.
///
/// Alerts, navigation and focus are recorded so callers can inspect what a
/// page did.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: IndexMap<String, Element>,
    lang: String,
    alerts: Vec<String>,
    location: Option<Route>,
    focused: Option<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, element: Element) -> Self {
        self.insert(id, element);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.html.as_str())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).map(|e| e.visible).unwrap_or(false)
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(e) = self.elements.get_mut(id) {
            e.checked = Some(checked);
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn location(&self) -> Option<Route> {
        self.location
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(id) {
            e.value = value.to_string();
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(e) = self.elements.get_mut(id) {
            e.text = text.to_string();
        }
    }

    fn set_html(&mut self, id: &str, html: &str) {
        if let Some(e) = self.elements.get_mut(id) {
            e.html = html.to_string();
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(e) = self.elements.get_mut(id) {
            e.visible = visible;
        }
    }

    fn is_checked(&self, id: &str) -> Option<bool> {
        self.elements.get(id).and_then(|e| e.checked)
    }

    fn focus(&mut self, id: &str) {
        if self.elements.contains_key(id) {
            self.focused = Some(id.to_string());
        }
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements
            .get(id)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(id) {
            e.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn ids_with_attribute(&self, name: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(_, e)| e.attributes.contains_key(name))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn set_language(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }
}

impl Window for MemoryDocument {
    fn alert(&mut self, message: &str) {
        tracing::debug!("alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, route: Route) {
        tracing::debug!("navigate: {}", route);
        self.location = Some(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_elements_are_ignored() {
        let mut doc = MemoryDocument::new();
        doc.set_text("nowhere", "x");
        doc.set_value("nowhere", "x");
        doc.focus("nowhere");
        assert!(!doc.contains("nowhere"));
        assert_eq!(doc.value("nowhere"), None);
        assert_eq!(doc.focused(), None);
        assert_eq!(doc.is_checked("nowhere"), None);
    }

    #[test]
    fn test_find_by_attribute() {
        let doc = MemoryDocument::new()
            .with("e1", Element::new().with_attribute("data-error-for", "a"))
            .with("e2", Element::new().with_attribute("data-error-for", "b"));

        assert_eq!(doc.find_by_attribute("data-error-for", "b").as_deref(), Some("e2"));
        assert_eq!(doc.find_by_attribute("data-error-for", "c"), None);
        assert_eq!(doc.ids_with_attribute("data-error-for"), vec!["e1", "e2"]);
    }

    #[test]
    fn test_window_records() {
        let mut doc = MemoryDocument::new();
        doc.alert("hello");
        doc.navigate(Route::Payment);
        assert_eq!(doc.alerts(), ["hello".to_string()]);
        assert_eq!(doc.location(), Some(Route::Payment));
        assert_eq!(Route::Payment.path(), "payment.html");
    }
}
