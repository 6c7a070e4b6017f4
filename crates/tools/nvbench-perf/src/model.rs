//! Typed model of an nvbench JSON result document.
//!
//! `devices` and `axes` stay opaque [`Value`]s: they are only ever compared
//! for equality, never interpreted. States and summaries are kept in
//! document order so the report can follow the input.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A complete result file.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultDocument {
    /// Device descriptors the run was recorded on.
    pub devices: Value,
    /// Benchmarks in document order.
    pub benchmarks: Vec<Benchmark>,
}

/// One benchmark case.
#[derive(Debug, Clone, Deserialize)]
pub struct Benchmark {
    /// Benchmark name.
    pub name: String,
    /// Axis bindings. Compared structurally, including number representation.
    pub axes: Value,
    /// States keyed by their description, in document order.
    #[serde(default)]
    pub states: OrderedMap<State>,
}

impl Benchmark {
    /// Returns `true` if `other` describes the same benchmark case.
    pub fn same_case(&self, other: &Benchmark) -> bool {
        self.name == other.name && self.axes == other.axes
    }
}

/// A single measured configuration of a benchmark.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct State {
    /// Summaries keyed by name. `None` when absent or `null`.
    #[serde(default)]
    pub summaries: Option<OrderedMap<Summary>>,
}

impl State {
    /// Summaries of this state, or `None` if it has none at all.
    pub fn summaries(&self) -> Option<&OrderedMap<Summary>> {
        self.summaries.as_ref().filter(|s| !s.is_empty())
    }
}

/// A named summary statistic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Summary {
    /// Outer `value` object; holds the measurement under its own `value`.
    #[serde(default)]
    pub value: Option<SummaryValue>,
}

/// The `value` object of a summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryValue {
    /// The measurement itself.
    #[serde(default)]
    pub value: Value,
}

impl Summary {
    /// The numeric measurement at `value.value`, if there is one.
    pub fn number(&self) -> Option<f64> {
        self.value.as_ref()?.value.as_f64()
    }
}

/// A string-keyed map that keeps insertion order.
///
/// A repeated key replaces the earlier value in place, so lookups see the
/// last value while iteration keeps the position of the first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    /// Position of each key in `entries`.
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts `value` under `key`, replacing any existing value in place.
    pub fn insert(&mut self, key: String, value: V) {
        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn states_keep_document_order() {
        let bench: Benchmark = serde_json::from_str(
            r#"{
                "name": "bench",
                "axes": null,
                "states": { "zeta": {}, "alpha": {}, "mid": {} }
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = bench.states.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn duplicate_key_replaces_in_place() {
        let map: OrderedMap<u32> =
            serde_json::from_str(r#"{ "a": 1, "b": 2, "a": 3 }"#).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&3));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), None);
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn summary_number_reads_nested_value() {
        let summary: Summary =
            serde_json::from_value(json!({ "value": { "value": 1.5 }, "hint": "duration" }))
                .unwrap();
        assert_eq!(summary.number(), Some(1.5));

        let empty: Summary = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.number(), None);

        let text: Summary =
            serde_json::from_value(json!({ "value": { "value": "fast" } })).unwrap();
        assert_eq!(text.number(), None);
    }

    #[test]
    fn state_without_summaries() {
        let missing: State = serde_json::from_value(json!({})).unwrap();
        let null: State = serde_json::from_value(json!({ "summaries": null })).unwrap();
        let empty: State = serde_json::from_value(json!({ "summaries": {} })).unwrap();

        assert!(missing.summaries().is_none());
        assert!(null.summaries().is_none());
        assert!(empty.summaries().is_none());
    }

    #[test]
    fn same_case_compares_axes_exactly() {
        let parse = |axes: Value| -> Benchmark {
            serde_json::from_value(json!({ "name": "sort", "axes": axes })).unwrap()
        };

        assert!(parse(json!({ "N": 1000 })).same_case(&parse(json!({ "N": 1000 }))));
        assert!(!parse(json!({ "N": 1000 })).same_case(&parse(json!({ "N": 1000.0 }))));
        assert!(!parse(json!([1, 2])).same_case(&parse(json!([2, 1]))));
    }
}
