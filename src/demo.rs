//! Demonstration harness: runs every helper over the configured datasets and
//! renders one line per result.

use std::collections::HashMap;
use std::fmt::Display;

use itertools::Itertools;

use crate::combinators::{filter, map_slice, reduce};
use crate::config::DemoConfig;
use crate::mapping::keys;
use crate::membership::contains;
use crate::ordering::{max, min, sort_slice};

/// Renders a sequence as `[a b c]`.
pub fn render<T: Display>(items: &[T]) -> String {
    format!("[{}]", items.iter().join(" "))
}

fn sorted<T: crate::Ordered>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    sort_slice(&mut copy);
    copy
}

pub fn run(config: &DemoConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(min(&config.min_input).to_string());
    lines.push(max(&config.max_input).to_string());

    let vegetable_set: HashMap<&str, bool> = config
        .vegetables
        .iter()
        .map(|v| (v.as_str(), true))
        .collect();
    let fruit_rank: HashMap<i64, &str> = config
        .fruit_rank
        .iter()
        .map(|f| (f.rank, f.name.as_str()))
        .collect();

    let mut vegetable_keys = keys(&vegetable_set);
    sort_slice(&mut vegetable_keys);
    lines.push(format!("vegetableSet keys: {}", render(&vegetable_keys)));

    let mut fruit_keys = keys(&fruit_rank);
    sort_slice(&mut fruit_keys);
    lines.push(format!("fruitRank keys: {}", render(&fruit_keys)));

    lines.push(render(&sorted(&config.float_sort)));
    lines.push(render(&sorted(&config.string_sort)));
    lines.push(render(&sorted(&config.int_sort)));

    let prefix = config.https_prefix.as_str();
    let https_websites = filter(&config.websites, |v| v.starts_with(prefix));
    lines.push(render(&https_websites));

    let divisible_by_two = filter(&config.numbers_to_filter, |v| v % 2 == 0);
    lines.push(render(&divisible_by_two));

    lines.push(render(&map_slice(&config.numbers_to_map, |n| n.sqrt())));
    lines.push(render(&map_slice(&config.words, |s| format!("\"{}\"", s))));
    // shortest decimal form, so 16.0 prints as 16
    lines.push(render(&map_slice(&config.numbers_to_map, |n| {
        n.powi(2).to_string()
    })));

    lines.push(reduce(&config.numbers_to_filter, |acc, &v| acc + v, 0i64).to_string());
    lines.push(reduce(
        &config.words,
        |mut acc: String, w| {
            acc.push_str(w);
            acc
        },
        String::new(),
    ));

    lines.push(contains(&config.contains_strings, &config.contains_needle).to_string());
    for needle in &config.contains_int_needles {
        lines.push(contains(&config.contains_ints, needle).to_string());
    }

    lines
}
