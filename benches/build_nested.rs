//! This bench test simulates building and comparing a large representor,
//! such as a decoded collection document with many embedded resources.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use representor::{HttpTransition, InputProperty, Representor, TransitionBuilder};

/// Builds a poll collection with `count` embedded polls, each carrying its
/// own choices and vote transition.
fn build_collection(count: i64) -> Representor<HttpTransition> {
    Representor::build(|builder| {
        builder.add_link("self", "/polls");
        builder.add_metadata("content-type", "application/hal+json");
        for id in 0..count {
            builder.add_representor_with("polls", |poll| {
                poll.add_link("self", format!("/polls/{id}"));
                poll.add_attribute("question", format!("Question {id}"));
                poll.add_transition_with("vote", "/polls/{id}/vote", |transition| {
                    transition
                        .add_parameter("id", InputProperty::with_default(id.to_string().into()));
                });
                for (name, votes) in [("yes", 3_i64), ("no", 1)] {
                    poll.add_representor_with("choices", |choice| {
                        choice.add_attribute("name", name);
                        choice.add_attribute("votes", votes);
                    });
                }
            });
        }
    })
}

fn build_nested(c: &mut Criterion) {
    c.bench_function("build nested representor", |b| {
        b.iter(|| build_collection(100));
    });

    c.bench_function("compare nested representors", |b| {
        b.iter_batched(
            || (build_collection(100), build_collection(100)),
            |(left, right)| left == right,
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, build_nested);
criterion_main!(benches);
