use super::common::*;
use crate::workflows::registration::domain::{fields, FieldValue};
use crate::workflows::registration::wizard::account_rules;
use crate::workflows::registration::{validate, FieldRules};

#[test]
fn required_rule_rejects_missing_blank_and_unchecked_values() {
    let rules = vec![
        FieldRules::new("name").required(),
        FieldRules::new("accept").required(),
    ];

    let record = record_with(&[
        ("name", FieldValue::text("   ")),
        ("accept", FieldValue::Flag(false)),
    ]);
    let report = validate(&record, &rules);

    assert_eq!(report.len(), 2);
    assert_eq!(report.message("name"), Some("This field is required"));
    assert_eq!(report.message("accept"), Some("This field is required"));

    let empty = record_with(&[]);
    let report = validate(&empty, &rules);
    assert_eq!(report.len(), 2, "missing fields are also required failures");
}

#[test]
fn rules_short_circuit_to_one_message_per_field() {
    // Blank email fails both Required and Pattern; only the first rule in
    // declaration order reports.
    let record = record_with(&[(fields::EMAIL, FieldValue::text(""))]);
    let report = validate(&record, &account_rules());

    assert_eq!(report.message(fields::EMAIL), Some("This field is required"));
}

#[test]
fn email_pattern_accepts_plausible_addresses_only() {
    let rules = account_rules();

    let bad = record_with(&[(fields::EMAIL, FieldValue::text("not-an-email"))]);
    assert_eq!(
        validate(&bad, &rules).message(fields::EMAIL),
        Some("Enter a valid email address")
    );

    let good = record_with(&[(fields::EMAIL, FieldValue::text("dev@careerlab.io"))]);
    assert_eq!(validate(&good, &rules).message(fields::EMAIL), None);
}

#[test]
fn password_complexity_reports_the_first_failing_check() {
    let rules = vec![FieldRules::new(fields::PASSWORD).password()];

    // Seven characters: length fails before anything else is considered.
    let record = record_with(&[(fields::PASSWORD, FieldValue::text("abcdef1"))]);
    assert_eq!(
        validate(&record, &rules).message(fields::PASSWORD),
        Some("Password must be at least 8 characters")
    );

    // Long enough, has lowercase and digit, but no uppercase.
    let record = record_with(&[(fields::PASSWORD, FieldValue::text("abcdefgh1"))]);
    assert_eq!(
        validate(&record, &rules).message(fields::PASSWORD),
        Some("Password needs an uppercase letter")
    );

    // Meets every check.
    let record = record_with(&[(fields::PASSWORD, FieldValue::text("Abcdefgh1"))]);
    assert_eq!(validate(&record, &rules).message(fields::PASSWORD), None);
}

#[test]
fn matches_rule_compares_against_the_other_field() {
    let record = record_with(&[
        (fields::PASSWORD, FieldValue::text("Abcdefgh1")),
        (fields::CONFIRM_PASSWORD, FieldValue::text("Abcdefgh2")),
    ]);
    let report = validate(&record, &account_rules());

    assert_eq!(
        report.message(fields::CONFIRM_PASSWORD),
        Some("Passwords do not match")
    );
}

#[test]
fn numbers_render_for_text_shaped_rules() {
    let rules = vec![FieldRules::new(fields::GRADUATION_YEAR)
        .required()
        .pattern(
            crate::workflows::registration::validation::year_pattern(),
            "Enter a four digit year",
        )];

    let record = record_with(&[(fields::GRADUATION_YEAR, FieldValue::Number(2027))]);
    assert!(validate(&record, &rules).is_empty());

    let record = record_with(&[(fields::GRADUATION_YEAR, FieldValue::Number(27))]);
    assert_eq!(
        validate(&record, &rules).message(fields::GRADUATION_YEAR),
        Some("Enter a four digit year")
    );
}

#[test]
fn validation_is_pure_over_the_record() {
    let record = valid_account_step();
    let before = record.clone();
    let first = validate(&record, &account_rules());
    let second = validate(&record, &account_rules());

    assert_eq!(record, before);
    assert_eq!(first, second);
    assert!(first.is_empty());
}
