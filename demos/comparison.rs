//! Side-by-side comparison of each operation with its standard iterator
//! equivalent.
//!
//! Run with `cargo run --example comparison`. Set `RUST_LOG=enumerable=trace`
//! to see how `inject` classifies its arguments.

use std::collections::BTreeMap;

use enumerable::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let array = vec![1, 2, 3];
    let hash: BTreeMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    let array_of_words = vec!["cat", "sheep", "bear"];

    println!("== each");
    array.iter().for_each(|n| println!("{n}"));
    array.view().each(|n| println!("{n}"));
    hash.iter()
        .for_each(|(key, value)| println!("Key: {key}, Value: {value}"));
    hash.view()
        .each(|(key, value)| println!("Key: {key}, Value: {value}"));
    println!("{:?}", array.view().to_enum());

    println!("== each_with_index");
    for (index, element) in array.iter().enumerate() {
        println!("Index: {index}, Element: {element}");
    }
    array
        .view()
        .each_with_index(|element, index| println!("Index: {index}, Element: {element}"));
    hash.view().each_with_index(|(key, value), index| {
        println!("Index: {index}, Element: [{key}, {value}]");
    });

    println!("== select");
    println!(
        "{:?}",
        array.iter().filter(|n| *n % 2 == 1).collect::<Vec<_>>()
    );
    println!("{:?}", array.view().select(|n| n % 2 == 1));
    println!("{:?}", hash.view().select(|(_, value)| *value == 2));

    println!("== all / any / none");
    println!("{}", array.iter().all(|n| *n < 4));
    println!("{}", array.view().all(|n| *n < 4));
    println!("{}", hash.view().all(|(_, value)| *value < 4));
    println!("{}", array.iter().any(|n| *n == 4));
    println!("{}", array.view().any(|n| *n == 4));
    println!("{}", hash.view().any(|(key, _)| *key == "z"));
    println!("{}", !array.iter().any(|n| *n == 5));
    println!("{}", array.view().none(|n| *n == 5));
    println!("{}", hash.view().none(|(key, _)| *key == "c"));
    for quantifier in [Quantifier::All, Quantifier::Any, Quantifier::None] {
        println!(
            "{quantifier:?} without predicate: {}",
            array.view().quantify_without_predicate(quantifier)
        );
    }

    println!("== count");
    println!("{}", array.len());
    println!("{}", array.view().count());
    println!("{}", array.iter().filter(|n| **n == 1).count());
    println!("{}", array.view().count_value(&1));
    println!("{}", array.iter().filter(|n| **n > 1).count());
    println!("{}", array.view().count_by(|n| *n > 1));
    println!("{}", hash.view().count_by(|(_, value)| value % 2 != 0));

    println!("== map");
    println!("{:?}", array.iter().map(|n| n * 10).collect::<Vec<_>>());
    println!("{:?}", array.view().map(|n| n * 10));
    println!("{:?}", hash.view().map(|(key, value)| (*key, *value)));

    println!("== inject");
    println!("{:?}", array.iter().copied().reduce(|memo, n| memo - n));
    println!("{:?}", array.view().inject_operator(Operator::Subtract));
    println!("{:?}", array.view().inject_with(|memo, n| memo - n));
    println!("{:?}", array.iter().fold(3, |memo, n| memo - n));
    println!(
        "{:?}",
        array.view().inject(
            Some(InjectArg::Value(3)),
            Some(InjectArg::token(":-")),
            None::<fn(i32, i32) -> i32>,
        )
    );
    println!("{:?}", array.iter().fold(2, |memo, n| memo * n));
    println!("{:?}", array.view().inject_seeded(2, |memo, n| memo * n));

    let longest = |memo: &'static str, word: &'static str| {
        if memo.len() > word.len() { memo } else { word }
    };
    println!("{:?}", array_of_words.iter().copied().reduce(longest));
    println!("{:?}", array_of_words.view().inject_with(longest));

    let empty: Vec<i32> = Vec::new();
    match empty.view().inject_operator(Operator::Add) {
        Ok(value) => println!("{value}"),
        Err(error) => println!("error: {error}"),
    }
}
