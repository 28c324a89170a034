#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use envelope_core::{constants::KEY_LEN, open_at, seal, SealError};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_round_trip_strings(
            key in any::<[u8; KEY_LEN]>(),
            value in ".{0,256}",
            expiry in proptest::option::of(0i64..4_000_000_000),
        ) {
            let token = seal(&key, expiry, &value).unwrap();
            let now = expiry.unwrap_or(i64::MAX);
            let opened: String = open_at(&key, &token, now).unwrap();
            prop_assert_eq!(opened, value);
        }

        #[test]
        fn prop_round_trip_bytes(key in any::<[u8; KEY_LEN]>(), value in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let token = seal(&key, None, &value).unwrap();
            let opened: Vec<u8> = open_at(&key, &token, 0).unwrap();
            prop_assert_eq!(opened, value);
        }

        #[test]
        fn prop_expired_after_deadline(expiry in 0i64..4_000_000_000, late in 1i64..1_000_000) {
            let key = [9u8; KEY_LEN];
            let token = seal(&key, Some(expiry), &expiry).unwrap();
            prop_assert_eq!(open_at::<i64>(&key, &token, expiry).unwrap(), expiry);
            prop_assert!(matches!(open_at::<i64>(&key, &token, expiry + late), Err(SealError::Expired)));
        }

        #[test]
        fn prop_other_key_never_opens(a in any::<[u8; KEY_LEN]>(), b in any::<[u8; KEY_LEN]>()) {
            prop_assume!(a != b);
            let token = seal(&a, None, "secret").unwrap();
            prop_assert!(matches!(open_at::<String>(&b, &token, 0), Err(SealError::Authentication)));
        }

        #[test]
        fn prop_arbitrary_text_never_panics(text in "[A-Za-z0-9_=@+/-]{0,200}") {
            let _ = open_at::<String>(&[1u8; KEY_LEN], &text, 0);
        }
    }
}
