// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for schemas and the boolean transform.

use regex::Regex;

use super::{
    BooleanTransform, Issue, Issues, Schema, boolean, map, matches, number,
    number_allowing_non_finite, one_of, optional, parsed, refine, standard_truthiness, string,
    try_map, with_default,
};

// --- Boolean transform ---

#[test]
fn test_standard_truthiness_rule() {
    let falsy = ["0", "no", "", " ", "\t\n"];
    let truthy = ["1", "yes", "false", "NO", "No", " 0", "0 ", "off", "true"];

    for raw in falsy {
        assert_eq!(standard_truthiness(Some(raw)), Some(false), "{raw:?}");
        assert_eq!(BooleanTransform::standard().apply(Some(raw)), Some(false), "{raw:?}");
    }
    for raw in truthy {
        assert_eq!(standard_truthiness(Some(raw)), Some(true), "{raw:?}");
        assert_eq!(BooleanTransform::standard().apply(Some(raw)), Some(true), "{raw:?}");
    }
    assert_eq!(standard_truthiness(None), None);
    assert_eq!(BooleanTransform::default().apply(None), None);
}

#[test]
fn test_with_falsy_words() {
    let transform = BooleanTransform::with_falsy(["0", "no", "false"]);

    assert_eq!(transform.apply(Some("false")), Some(false));
    assert_eq!(transform.apply(Some("")), Some(false));
    assert_eq!(transform.apply(Some("FALSE")), Some(true));
}

#[test]
fn test_custom_transform() {
    let strict = BooleanTransform::new(|raw| match raw? {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    });
    let schema = boolean(strict);

    assert_eq!(schema.validate(Some("false")), Ok(false));
    assert_eq!(
        schema.validate(Some("maybe")),
        Err(Issue::invalid_type("boolean", "maybe").into())
    );
    assert_eq!(schema.validate(None), Err(Issue::Required.into()));
}

#[test]
fn test_boolean_transform_debug() {
    insta::assert_snapshot!(
        format!("{:?}", BooleanTransform::standard()),
        @r#"BooleanTransform("falsy=[\"0\", \"no\"]")"#
    );
}

// --- Primitives ---

#[test]
fn test_string_schema() {
    assert_eq!(string().validate(Some("hello")), Ok("hello".to_string()));
    assert_eq!(string().validate(Some("")), Ok(String::new()));
    assert_eq!(string().validate(None), Err(Issue::Required.into()));
}

#[test]
fn test_number_schema() {
    assert_eq!(number().validate(Some("8080")), Ok(8080.0));
    assert_eq!(number().validate(Some(" 42.5 ")), Ok(42.5));
    assert_eq!(number().validate(Some("-1e3")), Ok(-1000.0));
    assert_eq!(
        number().validate(Some("abc")),
        Err(Issue::invalid_type("number", "abc").into())
    );
    assert_eq!(
        number().validate(Some("")),
        Err(Issue::invalid_type("number", "").into())
    );
}

#[test]
fn test_number_rejects_non_finite_by_default() {
    let issues = number().validate(Some("NaN")).unwrap_err();
    insta::assert_snapshot!(issues.messages().join("\n"), @"Expected finite number, received NaN");

    assert!(number().validate(Some("inf")).is_err());
    assert!(number().validate(Some("-infinity")).is_err());
}

#[test]
fn test_number_allowing_non_finite() {
    let schema = number_allowing_non_finite();

    assert!(schema.validate(Some("NaN")).unwrap().is_nan());
    assert_eq!(schema.validate(Some("inf")), Ok(f64::INFINITY));
}

#[test]
fn test_parsed_schema() {
    let port = parsed::<u16>("port");

    assert_eq!(port.validate(Some("5432")), Ok(5432));
    insta::assert_snapshot!(
        port.validate(Some("70000")).unwrap_err().messages().join("\n"),
        @r#"Expected port, received "70000""#
    );
}

// --- Combinators ---

#[test]
fn test_optional_schema() {
    let schema = optional(number());

    assert_eq!(schema.validate(None), Ok(None));
    assert_eq!(schema.validate(Some("3")), Ok(Some(3.0)));
    assert!(schema.validate(Some("three")).is_err());
    assert!(schema.validate(Some("NaN")).is_err(), "checks still apply");
}

#[test]
fn test_with_default_schema() {
    let schema = with_default(number(), 8080.0);

    assert_eq!(schema.validate(None), Ok(8080.0));
    assert_eq!(schema.validate(Some("9090")), Ok(9090.0));
}

#[test]
fn test_default_is_checked() {
    let positive = refine(number(), |n: &f64| *n > 0.0, "Must be positive");

    let issues = with_default(&positive, -1.0).validate(None).unwrap_err();
    assert_eq!(issues, Issues::from(Issue::constraint("Must be positive")));

    assert!(with_default(number(), f64::NAN).validate(None).is_err());
}

#[test]
fn test_refinements_accumulate() {
    let schema = refine(
        refine(string(), |s: &String| s.len() >= 8, "Must be at least 8 characters"),
        |s: &String| s.chars().any(|c| c.is_ascii_digit()),
        "Must contain a digit",
    );

    let issues = schema.validate(Some("short")).unwrap_err();
    insta::assert_snapshot!(issues.messages().join("\n"), @r"
    Must be at least 8 characters
    Must contain a digit
    ");

    assert_eq!(schema.validate(Some("longer-1")), Ok("longer-1".to_string()));
}

#[test]
fn test_refine_skipped_when_parse_fails() {
    let schema = refine(number(), |n: &f64| *n > 0.0, "Must be positive");

    assert_eq!(
        schema.validate(Some("x")),
        Err(Issue::invalid_type("number", "x").into())
    );
}

#[test]
fn test_matches_schema() {
    let schema = matches(string(), Regex::new(r"^[a-z]+://").unwrap());

    assert!(schema.validate(Some("postgres://localhost")).is_ok());
    insta::assert_snapshot!(
        schema.validate(Some("localhost")).unwrap_err().messages().join("\n"),
        @r#"Invalid format: "localhost" does not match /^[a-z]+:///"#
    );
}

#[test]
fn test_one_of_schema() {
    let schema = one_of(string(), vec!["debug".to_string(), "info".to_string()]);

    assert_eq!(schema.validate(Some("info")), Ok("info".to_string()));
    insta::assert_snapshot!(
        schema.validate(Some("loud")).unwrap_err().messages().join("\n"),
        @r#"Expected one of ["debug", "info"], received "loud""#
    );
}

#[test]
fn test_map_schema() {
    let schema = map(string(), |s| s.split(',').map(str::to_owned).collect::<Vec<_>>());

    assert_eq!(
        schema.validate(Some("a,b")),
        Ok(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(schema.validate(None), Err(Issue::Required.into()));
}

#[test]
fn test_map_runs_inner_checks_first() {
    let schema = map(
        refine(number(), |n: &f64| n.fract() == 0.0, "Must be an integer"),
        |n| n as i64,
    );

    assert_eq!(schema.validate(Some("4")), Ok(4));
    assert_eq!(
        schema.validate(Some("4.5")),
        Err(Issue::constraint("Must be an integer").into())
    );
}

#[test]
fn test_try_map_schema() {
    let schema = try_map(string(), |s| {
        s.strip_prefix("v")
            .map(str::to_owned)
            .ok_or_else(|| format!("Version {s:?} must start with 'v'"))
    });

    assert_eq!(schema.validate(Some("v1.2")), Ok("1.2".to_string()));
    insta::assert_snapshot!(
        schema.validate(Some("1.2")).unwrap_err().messages().join("\n"),
        @r#"Version "1.2" must start with 'v'"#
    );
}

#[test]
fn test_issue_display() {
    insta::assert_snapshot!(
        [
            Issue::Required,
            Issue::invalid_type("number", "abc"),
            Issue::constraint("Too long"),
        ]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"),
        @r#"
    Required
    Expected number, received "abc"
    Too long
    "#
    );
}
