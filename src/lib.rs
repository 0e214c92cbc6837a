//! In-memory hypermedia resource representations.
//!
//! A [`Representor`] is an immutable value describing a single hypermedia
//! resource: the state transitions it offers, the sub-resources it embeds,
//! its link relations, metadata, and attributes. It is the structure a
//! hypermedia client or server reasons about, independent of any particular
//! wire format such as HAL or Siren.
//!
//! Format codecs and HTTP transports are collaborators, not part of this
//! crate: a decoder maps a document onto these constructors, and a client
//! resolves a [`Transition`]'s URI template and filled-in properties into an
//! actual request.

pub mod representor;
pub use representor::{Representor, RepresentorBuilder};

pub mod transition;
pub use transition::{
    HttpTransition, InputProperties, InputProperty, Transition, TransitionBuilder,
};

mod value;
pub use value::Value;
