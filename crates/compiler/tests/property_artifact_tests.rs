//! Property-based tests for variable-set semantics and artifact rendering.
//!
//! These tests verify the two load-bearing guarantees of the compiled
//! artifact with randomly generated inputs: rendering is deterministic and
//! order-preserving, and every rendered value survives a consumer's TOML
//! parse exactly.
//!
//! Test coverage:
//! - VariableSet: last-writer-wins against a reference model
//! - Rendering: byte-identical across repeated runs
//! - Rendering: assignment order follows insertion order
//! - Rendering: parse-back equality for arbitrary values

use proptest::prelude::*;
use std::collections::BTreeMap;

use envdump_compiler::VariableSet;
use envdump_compiler::artifact::render;
use envdump_compiler::constants::ENV_KEY;

/// Strategy for variable names: bare TOML-friendly names plus dotted names
/// that force the quoted-key form.
fn var_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][A-Z0-9_]{0,14}".prop_map(String::from),
        "[a-z]{1,8}\\.[a-z]{1,8}".prop_map(String::from),
    ]
    .prop_filter("the reserved key is seeded separately", |name| {
        name != ENV_KEY
    })
}

/// Strategy for variable values: printable ASCII with quoting hazards, plus
/// arbitrary unicode.
fn var_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,40}".prop_map(String::from),
        any::<String>(),
    ]
}

/// Strategy for a full variable mapping (reserved key excluded).
fn var_map_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(var_name_strategy(), var_value_strategy(), 0..12)
}

/// Names drawn from a small pool so insert sequences collide often.
fn colliding_inserts_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    let name = prop_oneof![
        Just("ALPHA".to_string()),
        Just("BETA".to_string()),
        Just("GAMMA".to_string()),
        Just("DELTA".to_string()),
    ];
    prop::collection::vec((name, "[a-z0-9]{0,8}".prop_map(String::from)), 0..24)
}

fn seeded_set(env: &str, entries: &BTreeMap<String, String>) -> VariableSet {
    let mut vars = VariableSet::seeded(ENV_KEY, env);
    for (name, value) in entries {
        vars.insert(name.clone(), value.clone());
    }
    vars
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A set built from any insert sequence agrees with a first-insertion
    /// ordered, last-writer-wins reference model.
    #[test]
    fn test_variable_set_matches_reference_model(inserts in colliding_inserts_strategy()) {
        let mut vars = VariableSet::new();
        let mut model: Vec<(String, String)> = Vec::new();

        for (name, value) in &inserts {
            vars.insert(name.clone(), value.clone());
            match model.iter_mut().find(|(n, _)| n == name) {
                Some((_, v)) => *v = value.clone(),
                None => model.push((name.clone(), value.clone())),
            }
        }

        let actual: Vec<(String, String)> = vars
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        prop_assert_eq!(actual, model);
    }

    /// Rendering the same set twice yields byte-identical output.
    #[test]
    fn test_render_is_deterministic(entries in var_map_strategy()) {
        let vars = seeded_set("prod", &entries);
        prop_assert_eq!(render(&vars, "prod"), render(&vars, "prod"));
    }

    /// Assignments appear in insertion order, reserved key first.
    #[test]
    fn test_render_follows_insertion_order(entries in var_map_strategy()) {
        let vars = seeded_set("prod", &entries);
        let rendered = render(&vars, "prod");

        let mut last_position = 0;
        for (name, _) in vars.iter() {
            let needle = if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
                format!("\n{name} = ")
            } else {
                format!("\n\"{name}\" = ")
            };
            let position = rendered.find(&needle);
            prop_assert!(position.is_some(), "missing assignment for {}", name);
            let position = position.unwrap();
            prop_assert!(position >= last_position);
            last_position = position;
        }
    }

    /// Every value survives a consumer's TOML parse exactly.
    #[test]
    fn test_rendered_artifact_parses_back(entries in var_map_strategy()) {
        let vars = seeded_set("dev", &entries);
        let rendered = render(&vars, "dev");

        let table: toml::Table = rendered.parse().unwrap();
        prop_assert_eq!(table.len(), vars.len());
        for (name, value) in vars.iter() {
            prop_assert_eq!(table[name].as_str(), Some(value));
        }
    }
}
