use encod3r::{encode, Method, UNKNOWN_METHOD_MESSAGE};
use proptest::prelude::*;

fn unhex(digits: &[u8]) -> u8 {
    u8::from_str_radix(std::str::from_utf8(digits).unwrap(), 16).unwrap()
}

/// Split `s` on `sep`, dropping the empty leading piece
fn pieces<'a>(s: &'a str, sep: &'a str) -> impl Iterator<Item = &'a str> {
    s.split(sep).skip(1)
}

proptest! {
    #[test]
    fn deterministic(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        for method in Method::ALL {
            prop_assert_eq!(encode(&input, method.name()), encode(&input, method.name()));
        }
    }

    #[test]
    fn base64_shape(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        let out = encode(&input, "base64");
        prop_assert_eq!(out.len() % 4, 0);
        prop_assert_eq!(out.len(), 4 * ((input.len() + 2) / 3));
        let pad = out.iter().filter(|&&b| b == b'=').count();
        prop_assert!(pad <= 2);
        prop_assert_eq!(pad, (3 - input.len() % 3) % 3);
        prop_assert!(out[..out.len() - pad].iter().all(|&b| b != b'='));
    }

    #[test]
    fn url_shape(input in proptest::collection::vec(any::<u8>(), 0..128)) {
        let out = encode(&input, "url");
        let mut decoded = Vec::new();
        let mut i = 0;
        while i < out.len() {
            if out[i] == b'%' {
                let digits = &out[i + 1..i + 3];
                prop_assert!(digits.iter().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(b)));
                decoded.push(unhex(digits));
                i += 3;
            } else {
                prop_assert!(out[i].is_ascii_alphanumeric() || b"-_.~".contains(&out[i]));
                decoded.push(out[i]);
                i += 1;
            }
        }
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn double_url_is_url_twice(input in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(encode(&input, "double_url"), encode(&encode(&input, "url"), "url"));
    }

    #[test]
    fn html_preserves_other_bytes(input in proptest::collection::vec(any::<u8>(), 0..128)) {
        let plain: Vec<u8> = input.iter().copied().filter(|b| !b"&<>\"'".contains(b)).collect();
        prop_assert_eq!(encode(&plain, "html"), plain.clone());
    }

    #[test]
    fn rot13_involution(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(encode(&encode(&input, "rot13"), "rot13"), input);
    }

    #[test]
    fn mixed_case_positions(input in proptest::collection::vec(any::<u8>(), 0..256)) {
        let out = encode(&input, "mixed_case");
        prop_assert_eq!(out.len(), input.len());
        for (i, (&o, &b)) in out.iter().zip(input.iter()).enumerate() {
            if i % 2 == 0 {
                prop_assert_eq!(o, b.to_ascii_lowercase());
            } else {
                prop_assert_eq!(o, b.to_ascii_uppercase());
            }
        }
    }

    #[test]
    fn fixed_width_escapes_reverse(input in proptest::collection::vec(any::<u8>(), 0..128)) {
        let hex = encode(&input, "hex");
        prop_assert_eq!(hex.len(), input.len() * 4);
        let back: Vec<u8> = hex.chunks(4).map(|c| unhex(&c[2..])).collect();
        prop_assert_eq!(&back, &input);

        let unicode = encode(&input, "unicode");
        prop_assert_eq!(unicode.len(), input.len() * 6);
        let back: Vec<u8> = unicode.chunks(6).map(|c| unhex(&c[2..])).collect();
        prop_assert_eq!(&back, &input);
    }

    #[test]
    fn variable_width_escapes_reverse(input in proptest::collection::vec(any::<u8>(), 0..128)) {
        let octal = String::from_utf8(encode(&input, "octal")).unwrap();
        let back: Vec<u8> = pieces(&octal, "\\")
            .map(|p| u8::from_str_radix(p, 8).unwrap())
            .collect();
        prop_assert_eq!(&back, &input);

        let dec = String::from_utf8(encode(&input, "html_dec")).unwrap();
        let back: Vec<u8> = pieces(&dec, "&#")
            .map(|p| p.trim_end_matches(';').parse().unwrap())
            .collect();
        prop_assert_eq!(&back, &input);

        let hex = String::from_utf8(encode(&input, "html_hex")).unwrap();
        let back: Vec<u8> = pieces(&hex, "&#x")
            .map(|p| u8::from_str_radix(p.trim_end_matches(';'), 16).unwrap())
            .collect();
        prop_assert_eq!(&back, &input);
    }

    #[test]
    fn unknown_method_sentinel(
        input in proptest::collection::vec(any::<u8>(), 0..64),
        method in "[a-z_]{0,12}",
    ) {
        prop_assume!(Method::ALL.iter().all(|m| m.name() != method));
        prop_assert_eq!(encode(&input, &method), UNKNOWN_METHOD_MESSAGE.as_bytes().to_vec());
    }
}

#[test]
fn empty_input_is_empty_output() {
    for method in Method::ALL {
        assert!(encode(b"", method.name()).is_empty());
    }
}
