#![no_main]

use libfuzzer_sys::fuzz_target;
use marshal::{format_i32, parse_i32, Radix, PRIVATE, PUBLIC};

fuzz_target!(|data: &[u8]| {
    let Ok(token) = std::str::from_utf8(data) else {
        return;
    };

    for codec in [PUBLIC, PRIVATE] {
        // Total: any token yields a value, and a decoded value re-encodes
        // to a token that decodes to the same value.
        let value = codec.decode_int(Some(token), 7);
        assert_eq!(codec.decode_int(Some(&codec.encode_int(value)), 0), value);
        let _ = codec.try_decode_int(Some(token));
        let _ = codec.decode_string(Some(token), "");
    }

    // Drive arbitrary bases from the first byte.
    if let Some((&first, rest)) = data.split_first() {
        let Ok(radix) = Radix::new(u32::from(first % 35) + 2) else {
            return;
        };
        if let Ok(rest) = std::str::from_utf8(rest) {
            if let Ok(value) = parse_i32(rest, radix) {
                assert_eq!(parse_i32(&format_i32(value, radix), radix), Ok(value));
            }
        }
    }
});
