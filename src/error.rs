use std::any::Any;

use wasm_bindgen::JsValue;

pub type SiteResult<T> = Result<T, SiteError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("element is not mounted: {0}")]
    Detached(String),

    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },

    #[error("stylesheet rejected: {0}")]
    Style(String),
}

impl SiteError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js { context, message }
    }

    pub fn detached(what: impl Into<String>) -> Self {
        Self::Detached(what.into())
    }

    pub fn style(msg: impl ToString) -> Self {
        Self::Style(msg.to_string())
    }
}

pub fn window() -> SiteResult<web_sys::Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> SiteResult<web_sys::Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Readable message out of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            SiteError::NoWindow.to_string(),
            "browser window is not available"
        );
        assert!(SiteError::detached("#menu")
            .to_string()
            .contains("#menu"));
        assert!(SiteError::style("unexpected token")
            .to_string()
            .starts_with("stylesheet rejected:"));
    }

    #[test]
    fn js_variant_names_the_failing_call() {
        let err = SiteError::Js {
            context: "IntersectionObserver::new",
            message: "not supported".into(),
        };
        assert_eq!(
            err.to_string(),
            "IntersectionObserver::new failed: not supported"
        );
    }

    #[test]
    fn panic_payloads_become_messages() {
        let literal: Box<dyn Any + Send> = Box::new("section failed");
        assert_eq!(panic_message(literal.as_ref()), "section failed");

        let formatted: Box<dyn Any + Send> = Box::new(format!("index {} out of range", 3));
        assert_eq!(panic_message(formatted.as_ref()), "index 3 out of range");

        let opaque: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(opaque.as_ref()), "unknown panic payload");
    }
}
