//! The representor aggregate and its builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    transition::Transition,
    value::Value,
};

/// An immutable description of a hypermedia resource.
///
/// A representor aggregates everything a client can learn about a resource
/// from a single document: the transitions it may follow, the sub-resources
/// embedded under each relation, plain link relations, descriptive
/// metadata, and the resource's own attributes.
///
/// All five maps have unique keys and no meaningful key order. Within an
/// embedded relation the sequence order *is* meaningful and preserved; it
/// reflects the document order of the embedded resources. Embedded
/// representors are owned by their parent, so the nesting always forms a
/// tree.
///
/// Equality is structural across all five maps, including deep,
/// order-sensitive comparison of embedded sequences. Hashing is likewise
/// structural, so equal representors hash equally.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Representor<T> {
    /// The transitions available on the resource, keyed by relation name.
    transitions: BTreeMap<String, T>,

    /// Embedded sub-resources, keyed by relation name. A relation may embed
    /// zero, one, or many resources, hence the sequence.
    representors: BTreeMap<String, Vec<Representor<T>>>,

    /// Lightweight link relations, mapping relation name to URI.
    links: BTreeMap<String, String>,

    /// Free-form descriptive metadata, such as content type hints.
    metadata: BTreeMap<String, String>,

    /// The resource's data payload.
    attributes: BTreeMap<String, Value>,
}

impl<T> Default for Representor<T> {
    fn default() -> Self {
        Self {
            transitions: BTreeMap::new(),
            representors: BTreeMap::new(),
            links: BTreeMap::new(),
            metadata: BTreeMap::new(),
            attributes: BTreeMap::new(),
        }
    }
}

impl<T: Transition> Representor<T> {
    /// Creates a representor directly from its five maps.
    ///
    /// The maps are stored verbatim; no validation is performed.
    #[must_use]
    pub const fn new(
        transitions: BTreeMap<String, T>,
        representors: BTreeMap<String, Vec<Self>>,
        attributes: BTreeMap<String, Value>,
        links: BTreeMap<String, String>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            transitions,
            representors,
            links,
            metadata,
            attributes,
        }
    }

    /// Creates a representor by running `configure` once against a fresh
    /// [`RepresentorBuilder`], then freezing the builder's state.
    #[must_use]
    pub fn build(configure: impl FnOnce(&mut RepresentorBuilder<T>)) -> Self {
        let mut builder = RepresentorBuilder::new();
        configure(&mut builder);
        builder.build()
    }

    /// The transitions available on the resource, keyed by relation name.
    #[must_use]
    pub const fn transitions(&self) -> &BTreeMap<String, T> {
        &self.transitions
    }

    /// Embedded sub-resources, keyed by relation name.
    #[must_use]
    pub const fn representors(&self) -> &BTreeMap<String, Vec<Self>> {
        &self.representors
    }

    /// Link relations, mapping relation name to URI.
    #[must_use]
    pub const fn links(&self) -> &BTreeMap<String, String> {
        &self.links
    }

    /// Free-form descriptive metadata.
    #[must_use]
    pub const fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// The resource's attributes.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Looks up the transition registered under `relation`, if any. An
    /// absent relation means the interaction is not available.
    #[must_use]
    pub fn transition(&self, relation: &str) -> Option<&T> {
        self.transitions.get(relation)
    }

    /// Looks up the link registered under `relation`, if any.
    #[must_use]
    pub fn link(&self, relation: &str) -> Option<&str> {
        self.links.get(relation).map(String::as_str)
    }

    /// Looks up the attribute stored under `key`, if any.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The sub-resources embedded under `relation`, in document order.
    /// Empty when the relation embeds nothing.
    #[must_use]
    pub fn embedded(&self, relation: &str) -> &[Self] {
        self.representors.get(relation).map_or(&[], Vec::as_slice)
    }
}

/// Accumulates the state of a representor under construction.
///
/// A builder is scoped to a single construction call: it starts with five
/// empty maps, is mutated by registration calls, and is consumed by
/// [`RepresentorBuilder::build`]. Registrations use last-write-wins
/// semantics, except for embedded representors, which append to the
/// relation's sequence.
#[derive(Debug)]
pub struct RepresentorBuilder<T> {
    transitions: BTreeMap<String, T>,
    representors: BTreeMap<String, Vec<Representor<T>>>,
    links: BTreeMap<String, String>,
    metadata: BTreeMap<String, String>,
    attributes: BTreeMap<String, Value>,
}

impl<T> Default for RepresentorBuilder<T> {
    fn default() -> Self {
        Self {
            transitions: BTreeMap::new(),
            representors: BTreeMap::new(),
            links: BTreeMap::new(),
            metadata: BTreeMap::new(),
            attributes: BTreeMap::new(),
        }
    }
}

impl<T: Transition> RepresentorBuilder<T> {
    /// Creates a builder with five empty maps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a transition under `relation`, returning any transition it
    /// replaced.
    pub fn add_transition(&mut self, relation: impl Into<String>, transition: T) -> Option<T> {
        self.transitions.insert(relation.into(), transition)
    }

    /// Registers a transition under `relation` by constructing it through
    /// its own builder, returning any transition it replaced.
    pub fn add_transition_with(
        &mut self,
        relation: impl Into<String>,
        uri: impl Into<String>,
        configure: impl FnOnce(&mut T::Builder),
    ) -> Option<T> {
        self.add_transition(relation, T::build(uri, configure))
    }

    /// Appends a fully built sub-resource to the sequence embedded under
    /// `relation`.
    pub fn add_representor(&mut self, relation: impl Into<String>, representor: Representor<T>) {
        self.representors
            .entry(relation.into())
            .or_default()
            .push(representor);
    }

    /// Builds a sub-resource through its own builder and appends it to the
    /// sequence embedded under `relation`.
    pub fn add_representor_with(
        &mut self,
        relation: impl Into<String>,
        configure: impl FnOnce(&mut Self),
    ) {
        self.add_representor(relation, Representor::build(configure));
    }

    /// Registers a link under `relation`, returning any URI it replaced.
    pub fn add_link(
        &mut self,
        relation: impl Into<String>,
        uri: impl Into<String>,
    ) -> Option<String> {
        self.links.insert(relation.into(), uri.into())
    }

    /// Registers a metadata entry under `key`, returning any value it
    /// replaced.
    pub fn add_metadata(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.metadata.insert(key.into(), value.into())
    }

    /// Registers an attribute under `key`, returning any value it replaced.
    pub fn add_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Freezes the accumulated state into an immutable [`Representor`].
    #[must_use]
    pub fn build(self) -> Representor<T> {
        trace!(
            transitions = self.transitions.len(),
            representors = self.representors.values().map(Vec::len).sum::<usize>(),
            links = self.links.len(),
            metadata = self.metadata.len(),
            attributes = self.attributes.len(),
            "froze representor"
        );

        Representor {
            transitions: self.transitions,
            representors: self.representors,
            links: self.links,
            metadata: self.metadata,
            attributes: self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::BTreeMap,
        hash::{DefaultHasher, Hash, Hasher},
    };

    use super::{Representor, RepresentorBuilder};
    use crate::{
        transition::{HttpTransition, InputProperty, Transition, TransitionBuilder},
        value::Value,
    };

    fn poll_transition() -> HttpTransition {
        HttpTransition::build("/polls/{id}/vote", |builder| {
            builder.add_parameter("id", InputProperty::with_default(Value::from("1")));
        })
    }

    fn choice(name: &str, votes: i64) -> Representor<HttpTransition> {
        Representor::build(|builder| {
            builder.add_attribute("name", name);
            builder.add_attribute("votes", votes);
        })
    }

    fn hash_of(representor: &Representor<HttpTransition>) -> u64 {
        let mut hasher = DefaultHasher::new();
        representor.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn builder_matches_direct_construction() {
        let built = Representor::build(|builder| {
            builder.add_transition("vote", poll_transition());
            builder.add_representor("choices", choice("yes", 3));
            builder.add_link("self", "/polls/1");
            builder.add_metadata("content-type", "application/hal+json");
            builder.add_attribute("question", "Why?");
        });

        let transitions = BTreeMap::from([("vote".to_string(), poll_transition())]);
        let representors = BTreeMap::from([("choices".to_string(), vec![choice("yes", 3)])]);
        let attributes = BTreeMap::from([("question".to_string(), Value::from("Why?"))]);
        let links = BTreeMap::from([("self".to_string(), "/polls/1".to_string())]);
        let metadata = BTreeMap::from([(
            "content-type".to_string(),
            "application/hal+json".to_string(),
        )]);
        let direct = Representor::new(transitions, representors, attributes, links, metadata);

        assert_eq!(built, direct);
        assert_eq!(hash_of(&built), hash_of(&direct));
    }

    #[test]
    fn empty_builder_matches_empty_construction() {
        let built: Representor<HttpTransition> = Representor::build(|_| {});

        assert!(built.transitions().is_empty());
        assert!(built.representors().is_empty());
        assert!(built.links().is_empty());
        assert!(built.metadata().is_empty());
        assert!(built.attributes().is_empty());

        let direct = Representor::new(
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
        );
        assert_eq!(built, direct);
        assert_eq!(built, Representor::default());
    }

    #[test]
    fn later_transition_replaces_earlier() {
        let replacement = HttpTransition::build("/polls/2/vote", |_| {});

        let mut builder = RepresentorBuilder::new();
        let replaced = builder.add_transition("vote", poll_transition());
        assert!(replaced.is_none());
        let replaced = builder.add_transition("vote", replacement.clone());
        assert_eq!(replaced, Some(poll_transition()));

        let representor = builder.build();
        assert_eq!(representor.transitions().len(), 1);
        assert_eq!(representor.transition("vote"), Some(&replacement));
    }

    #[test]
    fn representors_append_in_registration_order() {
        let representor = Representor::build(|builder| {
            builder.add_representor("choices", choice("yes", 3));
            builder.add_representor("choices", choice("no", 1));
        });

        let embedded = representor.embedded("choices");
        assert_eq!(embedded, [choice("yes", 3), choice("no", 1)]);
        assert!(representor.embedded("comments").is_empty());
    }

    #[test]
    fn transition_with_builds_through_the_transition_builder() {
        let representor = Representor::build(|builder: &mut RepresentorBuilder<HttpTransition>| {
            builder.add_transition_with("vote", "/polls/{id}/vote", |transition| {
                transition.add_parameter("id", InputProperty::with_default(Value::from("1")));
            });
        });

        assert_eq!(representor.transition("vote"), Some(&poll_transition()));
    }

    #[test]
    fn nested_blocks_build_embedded_representors() {
        let nested = Representor::build(|builder| {
            builder.add_representor_with("choices", |child| {
                child.add_attribute("name", "yes");
                child.add_attribute("votes", 3_i64);
            });
        });

        let direct = Representor::build(|builder| {
            builder.add_representor("choices", choice("yes", 3));
        });

        assert_eq!(nested, direct);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = Representor::build(|builder| {
            builder.add_link("self", "/polls/1");
            builder.add_representor("choices", choice("yes", 3));
        });
        let b = Representor::build(|builder| {
            builder.add_link("self", "/polls/1");
            builder.add_representor("choices", choice("yes", 3));
        });
        let c = Representor::build(|builder| {
            builder.add_link("self", "/polls/2");
        });

        assert_eq!(a, a);
        assert_eq!(a == b, b == a);
        assert_eq!(a == c, c == a);
        assert_ne!(a, c);
    }

    #[test]
    fn deeply_nested_structures_compare_structurally() {
        let make = || {
            Representor::build(|builder| {
                builder.add_representor_with("polls", |poll| {
                    poll.add_attribute("question", "Why?");
                    poll.add_representor("choices", choice("yes", 3));
                    poll.add_representor("choices", choice("no", 1));
                });
            })
        };

        assert_eq!(make(), make());
        assert_eq!(hash_of(&make()), hash_of(&make()));
    }

    #[test]
    fn reordering_an_embedded_sequence_breaks_equality() {
        let forward = Representor::build(|builder| {
            builder.add_representor("choices", choice("yes", 3));
            builder.add_representor("choices", choice("no", 1));
        });
        let reversed = Representor::build(|builder| {
            builder.add_representor("choices", choice("no", 1));
            builder.add_representor("choices", choice("yes", 3));
        });

        assert_ne!(forward, reversed);
    }

    #[test]
    fn duplicate_links_and_metadata_keep_the_last_entry() {
        let representor: Representor<HttpTransition> = Representor::build(|builder| {
            builder.add_link("self", "/polls/1");
            builder.add_link("self", "/polls/2");
            builder.add_metadata("content-type", "application/json");
            builder.add_metadata("content-type", "application/hal+json");
            builder.add_attribute("question", "old");
            builder.add_attribute("question", "new");
        });

        assert_eq!(representor.link("self"), Some("/polls/2"));
        assert_eq!(
            representor.metadata().get("content-type"),
            Some(&"application/hal+json".to_string())
        );
        assert_eq!(representor.attribute("question"), Some(&Value::from("new")));
    }

    #[test]
    fn attribute_values_compare_by_variant_and_payload() {
        let int = Representor::<HttpTransition>::build(|builder| {
            builder.add_attribute("votes", 1_i64);
        });
        let string = Representor::<HttpTransition>::build(|builder| {
            builder.add_attribute("votes", "1");
        });

        assert_ne!(int, string);
    }

    #[test]
    fn serde_round_trip_preserves_equality() {
        let representor = Representor::build(|builder| {
            builder.add_transition("vote", poll_transition());
            builder.add_representor("choices", choice("yes", 3));
            builder.add_link("self", "/polls/1");
            builder.add_attribute("question", "Why?");
        });

        let encoded = serde_json::to_string(&representor).unwrap();
        let decoded: Representor<HttpTransition> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, representor);
    }
}
