use policy::{
    Calisto, CalistoDefect, Ganimedes, Policy, PolicyError, PolicyKind, Rule, Validator,
};

fn ganimedes() -> Validator<Ganimedes> {
    Validator::new(Ganimedes::new())
}

fn calisto() -> Validator<Calisto> {
    Validator::new(Calisto::new())
}

#[test]
fn ganimedes_accepts_complete_candidate() {
    assert_eq!(ganimedes().is_valid("Abcdefg1@"), Ok(()));
}

#[test]
fn ganimedes_rejects_missing_uppercase() {
    assert_eq!(
        ganimedes().is_valid("abcdefg1@"),
        Err(PolicyError::MissingUppercase)
    );
}

#[test]
fn ganimedes_length_equal_to_threshold_is_rejected() {
    assert_eq!(
        ganimedes().is_valid("Abc12345"),
        Err(PolicyError::InvalidLength {
            length: 8,
            threshold: 8
        })
    );
}

#[test]
fn ganimedes_reports_length_before_case() {
    assert!(matches!(
        ganimedes().is_valid("short"),
        Err(PolicyError::InvalidLength { length: 5, .. })
    ));
}

#[test]
fn short_candidates_always_fail_on_length() {
    let samples = [
        "", "a", "A1@", "Abcdef1@", "@@@@@@@@", "CAlisto", "1CAlist", "xCAli1",
    ];
    for candidate in samples {
        if candidate.chars().count() <= 8 {
            assert!(
                matches!(
                    ganimedes().is_valid(candidate),
                    Err(PolicyError::InvalidLength { .. })
                ),
                "ganimedes accepted short {candidate:?}"
            );
        }
        if candidate.chars().count() <= 6 {
            assert!(
                matches!(
                    calisto().is_valid(candidate),
                    Err(PolicyError::InvalidLength { .. })
                ),
                "calisto accepted short {candidate:?}"
            );
        }
    }
}

#[test]
fn non_ascii_decimal_digits_count() {
    assert_eq!(ganimedes().is_valid("Abcdefgh@\u{0663}"), Ok(()));
    assert_eq!(calisto().is_valid("xxCAliSto\u{0663}"), Ok(()));
}

#[test]
fn calisto_accepts_mixed_case_keyword() {
    assert_eq!(calisto().is_valid("xx1CAliSto"), Ok(()));
}

#[test]
fn calisto_rejects_all_uppercase_keyword() {
    assert_eq!(
        calisto().is_valid("xx1CALISTO"),
        Err(PolicyError::InvalidCalistoPattern(
            CalistoDefect::UppercaseCount(7)
        ))
    );
}

#[test]
fn calisto_rejects_lowercase_keyword() {
    assert_eq!(
        calisto().is_valid("nocalistoword1"),
        Err(PolicyError::InvalidCalistoPattern(
            CalistoDefect::UppercaseCount(0)
        ))
    );
}

#[test]
fn calisto_uppercase_boundaries() {
    let cases = [
        ("12Calisto", false),
        ("12CAlisto", true),
        ("12CALISTo", true),
        ("12CALISTO", false),
    ];
    for (candidate, valid) in cases {
        assert_eq!(calisto().accepts(candidate), valid, "{candidate}");
    }
}

#[test]
fn repeated_calls_agree() {
    let validator = Validator::new(Policy::from(PolicyKind::Calisto));
    for candidate in ["xx1CAliSto", "xx1CALISTO", "short", "nocalistoword1"] {
        assert_eq!(validator.is_valid(candidate), validator.is_valid(candidate));
    }
}

#[test]
fn error_kinds_can_be_caught_broadly() {
    let rejected: Vec<PolicyError> = ["abc", "Abcdefgh1", "abcdefgh1@"]
        .into_iter()
        .filter_map(|c| ganimedes().is_valid(c).err())
        .collect();
    assert_eq!(rejected.len(), 3);
}

#[test]
fn policy_check_sequences() {
    assert_eq!(Policy::from(PolicyKind::Ganimedes).checks().len(), 5);
    assert_eq!(Policy::from(PolicyKind::Calisto).checks().len(), 3);
}
