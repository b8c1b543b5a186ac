//! Integration tests for Validated.
//!
//! Covers error accumulation through zip, sequence and traverse, and the
//! conversions to and from `Result`.

use rstest::rstest;
use zipwise::control::{NonEmpty, Validated, ValidatedKind};
use zipwise::nonempty;
use zipwise::typeclass::{Sequence, Zip};

type Validation = ValidatedKind<String>;

#[derive(Debug, PartialEq)]
struct Registration {
    name: String,
    age: u8,
    email: String,
}

fn validate_name(name: &str) -> Validated<String, String> {
    if name.trim().is_empty() {
        Validated::invalid("name must not be blank".to_string())
    } else {
        Validated::valid(name.to_string())
    }
}

fn validate_age(age: i32) -> Validated<u8, String> {
    u8::try_from(age)
        .ok()
        .filter(|age| *age >= 18)
        .map_or_else(
            || Validated::invalid(format!("age {age} is not an adult age")),
            Validated::valid,
        )
}

fn validate_email(email: &str) -> Validated<String, String> {
    let mut errors = Vec::new();
    if !email.contains('@') {
        errors.push("email must contain '@'".to_string());
    }
    if email.ends_with('.') {
        errors.push("email must not end with '.'".to_string());
    }
    NonEmpty::from_vec(errors).map_or_else(|| Validated::valid(email.to_string()), Validated::invalid_all)
}

fn register(name: &str, age: i32, email: &str) -> Validated<Registration, String> {
    Validation::zip3_with(
        validate_name(name),
        validate_age(age),
        validate_email(email),
        |name, age, email| Registration { name, age, email },
    )
}

// =============================================================================
// Zip Tests
// =============================================================================

#[rstest]
fn zip2_both_invalid_keeps_left_errors_first() {
    let left: Validated<i32, &str> = Validated::invalid("A");
    let right: Validated<i32, &str> = Validated::invalid("B");
    assert_eq!(
        ValidatedKind::zip2(left, right),
        Validated::invalid_all(nonempty!["A", "B"])
    );
}

#[rstest]
fn zip3_with_builds_value_when_all_valid() {
    assert_eq!(
        register("Ada", 36, "ada@example.com"),
        Validated::valid(Registration {
            name: "Ada".to_string(),
            age: 36,
            email: "ada@example.com".to_string(),
        })
    );
}

#[rstest]
fn zip3_with_reports_every_error_in_field_order() {
    let result = register(" ", 12, "nobody.");
    let errors = result.into_result().map_err(NonEmpty::into_vec);
    assert_eq!(
        errors,
        Err(vec![
            "name must not be blank".to_string(),
            "age 12 is not an adult age".to_string(),
            "email must contain '@'".to_string(),
            "email must not end with '.'".to_string(),
        ])
    );
}

#[rstest]
fn zip4_accumulates_across_four_inputs() {
    let zipped = ValidatedKind::zip4(
        Validated::<i32, &str>::invalid("first"),
        Validated::valid(2),
        Validated::<i32, &str>::invalid("third"),
        Validated::<i32, &str>::invalid("fourth"),
    );
    assert_eq!(
        zipped,
        Validated::invalid_all(nonempty!["first", "third", "fourth"])
    );
}

// =============================================================================
// Sequence and Traverse Tests
// =============================================================================

#[rstest]
fn traverse_collects_all_failures() {
    let ages = vec![20, -1, 40, 300];
    let validated = Validation::traverse(ages, validate_age);
    assert_eq!(
        validated.errors().map(|errors| errors.len()),
        Some(2)
    );
}

#[rstest]
fn traverse_all_valid_keeps_order() {
    let validated = Validation::traverse(vec![18, 19, 20], validate_age);
    assert_eq!(validated, Validated::valid(vec![18, 19, 20]));
}

#[rstest]
fn sequence_single_invalid_among_valid() {
    let values: Vec<Validated<i32, &str>> =
        vec![Validated::valid(1), Validated::invalid("bad"), Validated::valid(3)];
    assert_eq!(ValidatedKind::sequence(values), Validated::invalid("bad"));
}

// =============================================================================
// Conversion Tests
// =============================================================================

#[rstest]
#[case(Ok(1), Validated::valid(1))]
#[case(Err("boom"), Validated::invalid("boom"))]
fn from_result(#[case] input: Result<i32, &'static str>, #[case] expected: Validated<i32, &'static str>) {
    assert_eq!(Validated::from(input), expected);
}

#[rstest]
fn fmap_and_map_errors_touch_one_side_only() {
    let valid: Validated<i32, &str> = Validated::valid(2);
    let invalid: Validated<i32, &str> = Validated::invalid("bad");

    assert_eq!(valid.clone().fmap(|x| x * 10), Validated::valid(20));
    assert_eq!(valid.map_errors(str::to_uppercase), Validated::valid(2));
    assert_eq!(invalid.clone().fmap(|x| x * 10), Validated::invalid("bad"));
    assert_eq!(
        invalid.map_errors(str::to_uppercase),
        Validated::invalid("BAD".to_string())
    );
}
