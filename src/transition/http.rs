//! An HTTP flavoured transition.

use serde::{Deserialize, Serialize};

use super::{InputProperties, InputProperty, Transition, TransitionBuilder};

/// A transition as used by HTTP based hypermedia formats.
///
/// On top of the core [`Transition`] contract this records the request
/// method and the content types the server suggests for the interaction.
/// Equality and hashing cover all five fields.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct HttpTransition {
    uri: String,
    attributes: InputProperties,
    parameters: InputProperties,
    method: String,
    suggested_content_types: Vec<String>,
}

impl HttpTransition {
    /// The HTTP request method used to follow this transition.
    ///
    /// Defaults to `POST`, the method hypermedia forms conventionally
    /// submit with.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Content types the server suggests for the interaction, in order of
    /// preference.
    #[must_use]
    pub fn suggested_content_types(&self) -> &[String] {
        &self.suggested_content_types
    }
}

impl Transition for HttpTransition {
    type Builder = HttpTransitionBuilder;

    fn new(
        uri: impl Into<String>,
        attributes: InputProperties,
        parameters: InputProperties,
    ) -> Self {
        Self {
            uri: uri.into(),
            attributes,
            parameters,
            method: default_method(),
            suggested_content_types: Vec::new(),
        }
    }

    fn build(uri: impl Into<String>, configure: impl FnOnce(&mut Self::Builder)) -> Self {
        let mut builder = HttpTransitionBuilder::new(uri);
        configure(&mut builder);
        Self {
            uri: builder.uri,
            attributes: builder.attributes,
            parameters: builder.parameters,
            method: builder.method,
            suggested_content_types: builder.suggested_content_types,
        }
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    fn attributes(&self) -> &InputProperties {
        &self.attributes
    }

    fn parameters(&self) -> &InputProperties {
        &self.parameters
    }
}

/// Builder for [`HttpTransition`].
#[derive(Debug)]
pub struct HttpTransitionBuilder {
    uri: String,
    attributes: InputProperties,
    parameters: InputProperties,
    method: String,
    suggested_content_types: Vec<String>,
}

impl HttpTransitionBuilder {
    /// Overrides the HTTP request method.
    pub fn set_method(&mut self, method: impl Into<String>) {
        self.method = method.into();
    }

    /// Appends a suggested content type.
    pub fn add_suggested_content_type(&mut self, content_type: impl Into<String>) {
        self.suggested_content_types.push(content_type.into());
    }
}

impl TransitionBuilder for HttpTransitionBuilder {
    fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            attributes: InputProperties::new(),
            parameters: InputProperties::new(),
            method: default_method(),
            suggested_content_types: Vec::new(),
        }
    }

    fn add_attribute(&mut self, name: impl Into<String>, property: InputProperty) {
        self.attributes.insert(name.into(), property);
    }

    fn add_parameter(&mut self, name: impl Into<String>, property: InputProperty) {
        self.parameters.insert(name.into(), property);
    }
}

fn default_method() -> String {
    "POST".to_string()
}
