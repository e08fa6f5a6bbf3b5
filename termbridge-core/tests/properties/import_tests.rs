//! Property tests for header parsing and record normalization

use proptest::prelude::*;
use termbridge_core::config::{HostEnvironment, StaticDefaults};
use termbridge_core::import::{Delimiter, FieldSchema, RecordNormalizer, RejectReason};
use termbridge_core::models::Protocol;

const DEFAULTS: StaticDefaults = StaticDefaults::new(Protocol::Ssh2);

fn environment() -> HostEnvironment {
    HostEnvironment {
        major_version: 9,
        windows_like: false,
    }
}

fn hostname_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,20}\\.[a-z]{2,6}",
        "192\\.168\\.[0-9]{1,3}\\.[0-9]{1,3}",
    ]
}

proptest! {
    /// Property: normalization is a pure function of line and schema
    #[test]
    fn normalization_is_idempotent(
        host in hostname_strategy(),
        port in 1u16..65535,
        user in "[a-z]{1,12}",
    ) {
        let schema = FieldSchema::parse(
            "hostname,port,username,protocol=SSH2",
            Delimiter::Text(",".to_string()),
            &DEFAULTS,
        )
        .expect("header parses");
        let normalizer = RecordNormalizer::new(&schema, environment());
        let line = format!("{host},{port},{user},");
        let first = normalizer.normalize(&line).expect("normalizes");
        let second = normalizer.normalize(&line).expect("normalizes");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.session_name.as_str(), host.as_str());
        prop_assert_eq!(first.port, Some(port));
    }

    /// Property: every positive u16 port value round-trips
    #[test]
    fn valid_ports_accepted(host in hostname_strategy(), port in 1u16..=65535) {
        let schema = FieldSchema::parse(
            "hostname,port",
            Delimiter::Text(",".to_string()),
            &DEFAULTS,
        )
        .expect("header parses");
        let normalizer = RecordNormalizer::new(&schema, environment());
        let record = normalizer
            .normalize(&format!("{host},{port}"))
            .expect("normalizes");
        prop_assert_eq!(record.port, Some(port));
    }

    /// Property: port values with any non-digit are rejected
    #[test]
    fn non_numeric_ports_rejected(
        host in hostname_strategy(),
        port in "[0-9]{0,3}[a-zA-Z!.-][0-9a-zA-Z]{0,3}",
    ) {
        let schema = FieldSchema::parse(
            "hostname,port",
            Delimiter::Text(",".to_string()),
            &DEFAULTS,
        )
        .expect("header parses");
        let normalizer = RecordNormalizer::new(&schema, environment());
        let reasons = normalizer
            .normalize(&format!("{host},{port}"))
            .expect_err("port must be rejected");
        prop_assert!(matches!(reasons.as_slice(), [RejectReason::InvalidPort(_)]));
    }

    /// Property: any casing of a supported protocol token normalizes to
    /// the same canonical protocol
    #[test]
    fn protocol_tokens_case_insensitive(
        host in hostname_strategy(),
        mask in any::<u8>(),
    ) {
        let token: String = "ssh2"
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if mask & (1 << i) == 0 {
                    c
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect();
        let schema = FieldSchema::parse(
            "hostname,protocol",
            Delimiter::Text(",".to_string()),
            &DEFAULTS,
        )
        .expect("header parses");
        let normalizer = RecordNormalizer::new(&schema, environment());
        let record = normalizer
            .normalize(&format!("{host},{token}"))
            .expect("normalizes");
        prop_assert_eq!(record.protocol, Protocol::Ssh2);
    }

    /// Property: lines with the wrong field count are always rejected and
    /// never abort the run
    #[test]
    fn wrong_field_count_always_rejected(
        host in hostname_strategy(),
        extra in 1usize..4,
    ) {
        let schema = FieldSchema::parse(
            "hostname,username",
            Delimiter::Text(",".to_string()),
            &DEFAULTS,
        )
        .expect("header parses");
        let normalizer = RecordNormalizer::new(&schema, environment());
        let line = format!("{host},user{}", ",x".repeat(extra));
        let reasons = normalizer.normalize(&line).expect_err("must be rejected");
        prop_assert!(
            matches!(
                reasons.as_slice(),
                [RejectReason::FieldCountMismatch { .. }]
            ),
            "unexpected reasons: {:?}",
            reasons
        );
    }
}
