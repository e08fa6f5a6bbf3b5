//! Property tests for name validation
//!
//! The disallowed-character and reserved-name tables are data, so the
//! tests enumerate them directly in addition to the generated cases.

use proptest::prelude::*;
use termbridge_core::import::{
    DISALLOWED_CHARS, NameKind, NameValidator, NameViolation, RESERVED_NAMES,
};

// Strategy for names built only from safe characters
fn safe_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._ -]{1,24}"
}

proptest! {
    /// Property: safe names always pass, on any target
    #[test]
    fn safe_names_always_pass(name in safe_name_strategy(), windows in any::<bool>()) {
        // Reserved device names are themselves "safe" character-wise;
        // skip the rare generated collision
        let is_reserved = RESERVED_NAMES
            .iter()
            .any(|r| name.trim().eq_ignore_ascii_case(r));
        prop_assume!(!is_reserved);

        let validator = NameValidator::new(windows);
        prop_assert!(validator.validate(&name, NameKind::Session).is_ok());
        prop_assert!(validator.validate(&name, NameKind::Folder).is_ok());
    }

    /// Property: inserting any disallowed character anywhere fails with
    /// exactly that character
    #[test]
    fn disallowed_character_is_reported(
        prefix in safe_name_strategy(),
        suffix in safe_name_strategy(),
        index in 0usize..DISALLOWED_CHARS.len(),
    ) {
        let bad = DISALLOWED_CHARS[index];
        let name = format!("{prefix}{bad}{suffix}");
        let validator = NameValidator::new(false);
        match validator.validate(&name, NameKind::Session) {
            Err(NameViolation::DisallowedCharacter { character, .. }) => {
                prop_assert_eq!(character, bad);
            }
            other => prop_assert!(false, "expected DisallowedCharacter, got {:?}", other),
        }
    }

    /// Property: every reserved name is rejected as a session name on a
    /// Windows-like target, in any casing
    #[test]
    fn reserved_names_rejected_any_case(
        index in 0usize..RESERVED_NAMES.len(),
        uppercase in any::<bool>(),
    ) {
        let reserved = RESERVED_NAMES[index];
        let name = if uppercase {
            reserved.to_uppercase()
        } else {
            reserved.to_lowercase()
        };
        let validator = NameValidator::new(true);
        prop_assert!(validator.validate(&name, NameKind::Session).is_err());
        // And as a folder path segment
        let folder = format!("ops/{name}/lab");
        prop_assert!(validator.validate(&folder, NameKind::Folder).is_err());
    }

    /// Property: reserved names embedded in longer segments pass
    #[test]
    fn reserved_substring_is_not_a_match(
        index in 0usize..RESERVED_NAMES.len(),
        suffix in "[a-z]{1,8}",
    ) {
        let name = format!("{}{suffix}", RESERVED_NAMES[index]);
        let validator = NameValidator::new(true);
        prop_assert!(validator.validate(&name, NameKind::Session).is_ok());
    }
}

#[test]
fn reserved_table_has_expected_size() {
    // CON, PRN, AUX, NUL plus COM0-9 and LPT0-9
    assert_eq!(RESERVED_NAMES.len(), 24);
}

#[test]
fn disallowed_table_matches_host_application_rules() {
    assert_eq!(DISALLOWED_CHARS, &['|', ':', '*', '?', '"', '<', '>']);
}
