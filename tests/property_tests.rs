//! Property-based tests for the string utilities under test

use condor_strutil::{buffer_to_str, copy_truncated, format_hex_addr, parse_hex_addr, truncate_utf8};
use proptest::prelude::*;

proptest! {
    /// The destination buffer always ends up NUL-terminated, the payload
    /// never overflows, and what was written is a prefix of the source.
    #[test]
    fn copy_truncated_is_bounded_and_terminated(src in "\\PC{0,64}", cap in 1usize..40) {
        let mut buf = vec![0xffu8; cap];
        let written = copy_truncated(&mut buf, &src);

        prop_assert!(written < cap);
        prop_assert_eq!(buf[written], 0);

        let recovered = buffer_to_str(&buf).expect("payload is valid UTF-8 up to the NUL");
        prop_assert!(src.starts_with(recovered));
    }

    /// Truncation never exceeds the byte budget and never splits a char.
    #[test]
    fn truncate_utf8_lands_on_char_boundaries(s in "\\PC{0,64}", max in 0usize..80) {
        let truncated = truncate_utf8(&s, max);
        prop_assert!(truncated.len() <= max);
        prop_assert!(s.starts_with(truncated));
    }

    /// Formatting an address and parsing it back is lossless.
    #[test]
    fn hex_addr_roundtrips(addr in any::<u64>()) {
        prop_assert_eq!(parse_hex_addr(&format_hex_addr(addr)), Some(addr));
    }
}
