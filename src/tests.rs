use crate::{DecodeError, Variant, convert_bits, decode, decode_generic, encode, encode_with_variant};

/// Inputs paired with whether they are valid Bech32.
const VECTORS: &[(&str, bool)] = &[
    ("A12UEL5L", true),
    ("a12uel5l", true),
    (
        "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
        true,
    ),
    ("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw", true),
    (
        "11qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8247j",
        true,
    ),
    ("split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w", true),
    // invalid checksum
    ("split1checkupstagehandshakeupstreamerranterredcaperred2y9e2w", false),
    // space in hrp
    ("s lit1checkupstagehandshakeupstreamerranterredcaperredp8hs2p", false),
    // 'o' in data part
    ("split1cheo2y9e2w", false),
    // data part too short
    ("split1a2y9w", false),
    // empty hrp
    ("1checkupstagehandshakeupstreamerranterredcaperred2y9e3w", false),
    // DEL in hrp
    ("spl\u{7f}t1checkupstagehandshakeupstreamerranterredcaperred2y9e3w", false),
    // too long
    (
        "11qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqsqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8247j",
        false,
    ),
    (
        "an84characterslonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1569pvx",
        false,
    ),
    ("pzry9x0s0muk", false),
    ("1pzry9x0s0muk", false),
    ("x1b4n0q5v", false),
    ("li1dgmt3", false),
    ("de1lg7wt\u{ff}", false),
    ("A1G7SGD8", false),
    ("10a06t8", false),
    ("1qzzfhee", false),
];

/// Flips the lowest bit of the first character after the last separator.
fn flip_first_data_char(s: &str) -> String {
    let pos = s.rfind('1').unwrap();
    let mut bytes = s.as_bytes().to_vec();
    bytes[pos + 1] ^= 1;
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_vector_table() {
    for &(s, valid) in VECTORS {
        let result = decode(s);
        if !valid {
            assert!(result.is_err(), "expected decoding to fail for {:?}", s);
            continue;
        }

        let (hrp, data) = result.unwrap_or_else(|e| panic!("expected {:?} to be valid: {}", s, e));
        let encoded = encode(&hrp, &data).unwrap();
        assert_eq!(encoded, s);

        let flipped = flip_first_data_char(s);
        assert!(decode(&flipped).is_err(), "bit flip in {:?} went unnoticed", s);
    }
}

#[test]
fn test_invalid_vectors_fail_for_the_right_reason() {
    let expectations: &[(&str, fn(&DecodeError) -> bool)] = &[
        ("split1checkupstagehandshakeupstreamerranterredcaperred2y9e2w", |e: &DecodeError| {
            *e == DecodeError::InvalidChecksum
        }),
        ("s lit1checkupstagehandshakeupstreamerranterredcaperredp8hs2p", |e: &DecodeError| {
            matches!(e, DecodeError::InvalidHrp { .. })
        }),
        ("split1cheo2y9e2w", |e: &DecodeError| {
            matches!(e, DecodeError::InvalidCharacter { char: 'o', .. })
        }),
        ("split1a2y9w", |e: &DecodeError| {
            matches!(e, DecodeError::InvalidDataLength { .. })
        }),
        ("1checkupstagehandshakeupstreamerranterredcaperred2y9e3w", |e: &DecodeError| {
            matches!(e, DecodeError::InvalidHrp { .. })
        }),
        ("pzry9x0s0muk", |e: &DecodeError| *e == DecodeError::MissingSeparator),
        ("1pzry9x0s0muk", |e: &DecodeError| matches!(e, DecodeError::InvalidHrp { .. })),
        ("x1b4n0q5v", |e: &DecodeError| {
            matches!(e, DecodeError::InvalidCharacter { char: 'b', .. })
        }),
        ("10a06t8", |e: &DecodeError| {
            matches!(e, DecodeError::ExceedsLengthLimit { length: 7, .. })
        }),
        ("1qzzfhee", |e: &DecodeError| matches!(e, DecodeError::InvalidHrp { .. })),
    ];

    for (s, check) in expectations {
        let err = decode(s).unwrap_err();
        assert!(check(&err), "unexpected error for {:?}: {:?}", s, err);
    }
}

#[test]
fn test_mixed_case_rejected_before_checksum() {
    assert_eq!(decode("A12uEL5L"), Err(DecodeError::InvalidCase));
    assert_eq!(
        decode("split1checkupstagehandshakeupstreamerranterredcaperred2Y9E3W"),
        Err(DecodeError::InvalidCase)
    );
}

#[test]
fn test_too_long_always_rejected() {
    let long = format!("a1{}", "q".repeat(89));
    assert!(matches!(
        decode(&long),
        Err(DecodeError::ExceedsLengthLimit { length: 91, .. })
    ));
}

#[test]
fn test_split_vector_contents() {
    let (hrp, data) =
        decode("split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w").unwrap();
    assert_eq!(hrp, "split");
    assert_eq!(data.len(), 48);
    assert_eq!(&data[..4], &[24, 23, 25, 24]);
}

#[test]
fn test_every_single_character_substitution_is_caught() {
    let valid = "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw";
    let separator = valid.rfind('1').unwrap();
    for pos in separator + 1..valid.len() {
        for replacement in crate::CHARSET.iter().map(|&b| b as char) {
            if valid.as_bytes()[pos] as char == replacement {
                continue;
            }
            let mut mutated = valid.to_string();
            mutated.replace_range(pos..pos + 1, &replacement.to_string());
            assert_eq!(
                decode(&mutated),
                Err(DecodeError::InvalidChecksum),
                "substitution at {} with {} accepted",
                pos,
                replacement
            );
        }
    }
}

#[test]
fn test_roundtrip_preserves_hrp_case() {
    for hrp in ["bc", "BC", "tb", "1", "?", "AGE-SECRET-KEY-"] {
        let data: Vec<u8> = (0..20).map(|i| (i * 3 % 32) as u8).collect();
        let encoded = encode(hrp, &data).unwrap();
        let (decoded_hrp, decoded_data) = decode(&encoded).unwrap();
        assert_eq!(decoded_hrp, hrp);
        assert_eq!(decoded_data, data);
    }
}

#[test]
fn test_bytes_survive_five_bit_trip() {
    let bytes: Vec<u8> = (0..=255).step_by(7).collect();
    let fives = convert_bits(&bytes, 8, 5, true).unwrap();
    let encoded = encode("data", &fives).unwrap();
    let (_, decoded) = decode(&encoded).unwrap();
    assert_eq!(convert_bits(&decoded, 5, 8, false).unwrap(), bytes);
}

#[test]
fn test_bech32m_vectors() {
    let valid = [
        "A1LQFN3A",
        "a1lqfn3a",
        "abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx",
        "split1checkupstagehandshakeupstreamerranterredcaperredlc445v",
        "?1v759aa",
    ];
    for s in valid {
        let decoded = decode_generic(s).unwrap();
        assert_eq!(decoded.variant, Variant::Bech32m, "{}", s);
        assert_eq!(
            encode_with_variant(&decoded.hrp, &decoded.data, Variant::Bech32m).unwrap(),
            s
        );
        assert_eq!(decode(s), Err(DecodeError::InvalidChecksum));
    }
}
