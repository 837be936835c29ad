//! DOM contract used by the page bindings
//!
//! Elements are addressed by stable identifiers or by attribute. A missing
//! element is never an error: reads return `None` and writes are ignored.

pub mod memory;

pub use memory::{Element, MemoryDocument};

/// Attribute carrying a dotted translation key
pub const TRANSLATION_ATTRIBUTE: &str = "data-i18n";
/// Attribute marking a language button, holding its language code
pub const LANG_ATTRIBUTE: &str = "data-lang";
/// Attribute tying an inline error marker to a field identifier
pub const ERROR_FOR_ATTRIBUTE: &str = "data-error-for";

/// Pages of the booking funnel that can be navigated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Booking,
    Payment,
    ThankYou,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Booking => "book-tour.html",
            Route::Payment => "payment.html",
            Route::ThankYou => "thank-you.html",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

pub trait Document {
    fn contains(&self, id: &str) -> bool;

    /// Current value of a form control
    fn value(&self, id: &str) -> Option<String>;

    fn set_value(&mut self, id: &str, value: &str);

    fn set_text(&mut self, id: &str, text: &str);

    /// Inject markup verbatim
    fn set_html(&mut self, id: &str, html: &str);

    fn set_visible(&mut self, id: &str, visible: bool);

    /// Checked state of a checkbox, `None` if there is no such checkbox
    fn is_checked(&self, id: &str) -> Option<bool>;

    fn focus(&mut self, id: &str);

    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str);

    /// Identifiers of all elements carrying `name`, in document order
    fn ids_with_attribute(&self, name: &str) -> Vec<String>;

    /// Declared language of the whole document
    fn set_language(&mut self, lang: &str);

    fn find_by_attribute(&self, name: &str, value: &str) -> Option<String> {
        self.ids_with_attribute(name)
            .into_iter()
            .find(|id| self.attribute(id, name).as_deref() == Some(value))
    }
}

/// Blocking interruptions and navigation
pub trait Window {
    fn alert(&mut self, message: &str);

    fn navigate(&mut self, route: Route);
}

/// A loaded page: its document plus the window it lives in
pub trait Browser: Document + Window {}

impl<T: Document + Window> Browser for T {}
