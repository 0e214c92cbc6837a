//! Transitions describe the interactions available on a resource.
//!
//! A transition is a link or form: a URI template to follow, the attributes
//! a consumer must supply to complete the interaction, and the parameters
//! used to expand the template. The crate is generic over the concrete
//! transition representation through the [`Transition`] trait, so format
//! codecs can attach their own per-format details.

use std::{collections::BTreeMap, fmt, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::value::Value;

pub mod http;
pub use http::{HttpTransition, HttpTransitionBuilder};

/// An input to a transition, such as a form field or a template variable.
///
/// Both fields are optional: `value` is absent until a consumer binds one,
/// and `default_value` is absent when the document declares no fallback.
/// Construction cannot fail; validation of the payload is left to whichever
/// collaborator eventually submits the transition.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct InputProperty<T = Value> {
    /// The bound value, if the consumer has supplied one.
    pub value: Option<T>,
    /// The fallback used when no value is supplied.
    pub default_value: Option<T>,
}

impl<T> InputProperty<T> {
    /// Creates an input property from an optional value and default.
    #[must_use]
    pub const fn new(value: Option<T>, default_value: Option<T>) -> Self {
        Self {
            value,
            default_value,
        }
    }

    /// Creates an input property with a bound value and no default.
    #[must_use]
    pub const fn with_value(value: T) -> Self {
        Self::new(Some(value), None)
    }

    /// Creates an input property with a default and no bound value.
    #[must_use]
    pub const fn with_default(default_value: T) -> Self {
        Self::new(None, Some(default_value))
    }
}

impl<T> Default for InputProperty<T> {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Named input properties, keyed by property name.
///
/// Keys are unique; the key order carries no meaning.
pub type InputProperties = BTreeMap<String, InputProperty>;

/// The capability contract for concrete transition representations.
///
/// Implementations are immutable values exposing a URI template, the
/// attributes required to complete the interaction, and the parameters used
/// to expand the template. Equality and hashing are structural, so two
/// transitions are interchangeable exactly when all their parts match.
pub trait Transition: Clone + fmt::Debug + PartialEq + Hash + Sized {
    /// The builder used by [`Transition::build`].
    type Builder: TransitionBuilder;

    /// Creates a transition directly from its parts.
    ///
    /// The parts are stored verbatim. No validation is performed: a
    /// parameter that never appears in the URI template is kept as given,
    /// and a missing attribute is the consumer's concern.
    fn new(
        uri: impl Into<String>,
        attributes: InputProperties,
        parameters: InputProperties,
    ) -> Self;

    /// Creates a transition by running `configure` once against a fresh
    /// builder seeded with `uri`, then freezing the builder's state.
    fn build(uri: impl Into<String>, configure: impl FnOnce(&mut Self::Builder)) -> Self;

    /// The URI template this transition targets.
    fn uri(&self) -> &str;

    /// Properties that must be supplied to complete the interaction, such
    /// as request body fields.
    fn attributes(&self) -> &InputProperties;

    /// Properties used to expand the URI template.
    fn parameters(&self) -> &InputProperties;
}

/// Accumulates the state of a transition under construction.
///
/// Builders are single-use: they are created seeded with a URI, mutated by
/// a configuration closure, and frozen into an immutable transition.
/// Registering a property under a name that is already taken replaces the
/// earlier entry.
pub trait TransitionBuilder: Sized {
    /// Creates a builder seeded with `uri` and no properties.
    fn new(uri: impl Into<String>) -> Self;

    /// Registers an attribute property under `name`, replacing any earlier
    /// entry with the same name.
    fn add_attribute(&mut self, name: impl Into<String>, property: InputProperty);

    /// Registers a parameter property under `name`, replacing any earlier
    /// entry with the same name.
    fn add_parameter(&mut self, name: impl Into<String>, property: InputProperty);
}
