//! Contact form handoff to the visitor's mail client.
//!
//! The site has no backend, so submission is intercepted and turned into a
//! `mailto:` navigation. Nothing is sent or stored by the page itself.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{ContactError, ContactField};

pub const FORM_SELECTOR: &str = "form.contact-form";
pub const INCOMPLETE_ALERT: &str = "Please complete all fields before sending.";

/// Characters `encodeURIComponent` leaves as-is.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// A validated message with every field trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trim and validate raw field values.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingField`] for the first blank field.
    pub fn from_fields(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let required = |value: &str, field| {
            let value = value.trim();
            if value.is_empty() { Err(ContactError::MissingField(field)) } else { Ok(value.to_owned()) }
        };
        Ok(Self {
            name: required(name, ContactField::Name)?,
            email: required(email, ContactField::Email)?,
            message: required(message, ContactField::Message)?,
        })
    }

    #[must_use]
    pub fn subject(&self) -> String {
        format!("Portfolio message from {}", self.name)
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!("Name: {}\nEmail: {}\n\n{}", self.name, self.email, self.message)
    }

    /// `mailto:` URI with percent-encoded subject and body.
    #[must_use]
    pub fn mailto_href(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(&self.subject()),
            encode_component(&self.body())
        )
    }
}

#[cfg(feature = "csr")]
fn field_value(form: &web_sys::Element, field: ContactField) -> String {
    use wasm_bindgen::JsCast;

    let Ok(Some(el)) = form.query_selector(&format!("[name=\"{}\"]", field.as_str())) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Intercept submissions of the contact form, if the page has one.
pub fn init(config: &crate::config::SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use gloo_events::{EventListener, EventListenerOptions};

        let Some(window) = crate::util::dom::window() else {
            return;
        };
        let Some(form) = window.document().and_then(|d| d.query_selector(FORM_SELECTOR).ok().flatten()) else {
            return;
        };
        let recipient = config.contact_recipient.clone();
        let form_el = form.clone();
        EventListener::new_with_options(&form, "submit", EventListenerOptions::enable_prevent_default(), move |event| {
            event.prevent_default();
            let result = ContactMessage::from_fields(
                &field_value(&form_el, ContactField::Name),
                &field_value(&form_el, ContactField::Email),
                &field_value(&form_el, ContactField::Message),
            );
            match result {
                Ok(message) => {
                    let _ = window.location().set_href(&message.mailto_href(&recipient));
                }
                Err(e) => {
                    log::debug!("{e}");
                    let _ = window.alert_with_message(INCOMPLETE_ALERT);
                }
            }
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
