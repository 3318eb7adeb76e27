// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the source module.

use std::collections::{BTreeMap, HashMap};

use super::{EnvSource, SystemEnv, current_env};
use crate::source::container::Env;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("NOTEXIST"), None);
}

#[test]
#[cfg(windows)]
fn test_env_case_insensitive_on_windows() {
    let env: Env = [("Path", "C:\\bin")].into_iter().collect();
    assert_eq!(env.get("PATH"), Some("C:\\bin"));
}

#[test]
#[cfg(not(windows))]
fn test_env_case_sensitive_elsewhere() {
    let env: Env = [("Path", "/bin")].into_iter().collect();
    assert_eq!(env.get("PATH"), None);
    assert_eq!(env.get("Path"), Some("/bin"));
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    // Clone shares data initially
    let mut env2 = env1.clone();

    // Modifying env2 triggers copy-on-write, doesn't affect env1
    env2.set("KEY2", "value2");
    env2.remove("KEY1");

    insta::assert_yaml_snapshot!(
        serde_json::json!({
            "env1_KEY1": env1.get("KEY1"),
            "env1_KEY2": env1.get("KEY2"),
            "env2_KEY1": env2.get("KEY1"),
            "env2_KEY2": env2.get("KEY2"),
        }),
        @r#"
    env1_KEY1: value1
    env1_KEY2: ~
    env2_KEY1: ~
    env2_KEY2: value2
    "#
    );
}

#[test]
fn test_env_from_map_and_back() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let env = Env::from_map(map.clone());

    assert_eq!(env.len(), 2);
    assert!(!env.is_empty());
    assert_eq!(env.to_map(), map);
}

#[test]
fn test_env_source_reports_absence_as_none() {
    let env: Env = [("PRESENT", "")].into_iter().collect();

    assert_eq!(env.raw("PRESENT").unwrap(), Some(String::new()));
    assert_eq!(env.raw("ABSENT").unwrap(), None);
}

#[test]
fn test_map_sources() {
    let btree = BTreeMap::from([("A".to_string(), "1".to_string())]);
    let hash = HashMap::from([("A".to_string(), "1".to_string())]);

    assert_eq!(btree.raw("A").unwrap().as_deref(), Some("1"));
    assert_eq!(hash.raw("A").unwrap().as_deref(), Some("1"));
    assert_eq!((&hash).raw("B").unwrap(), None);
}

#[test]
fn test_system_env_delegation() {
    let std_result = std::env::var("PATH").ok();
    let provider_result = SystemEnv.raw("PATH").unwrap();
    assert_eq!(std_result, provider_result);
}

#[test]
fn test_system_env_missing_variable() {
    assert_eq!(SystemEnv.raw("ENVSURE_NONEXISTENT_VAR_12345").unwrap(), None);
}

#[test]
fn test_current_env() {
    // Behavioral test - PATH should exist
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}
