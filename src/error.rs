//! Error types for fetch and form handling.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here reaches the visitor. Each routine catches its own error,
//! logs it with `log::warn!`, and leaves its region of the page as it was.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure fetching or decoding a same-site resource.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    /// The server answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The body could not be read or parsed.
    #[error("could not decode {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}

/// Contact form field that must not be blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Form control `name` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("contact field `{}` is empty", .0.as_str())]
    MissingField(ContactField),
}
