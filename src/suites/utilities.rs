//! Cases covering the `condor_strutil` string helpers.

use condor_core::{SuiteRunner, check, check_eq};
use condor_strutil::{
    buffer_to_str, copy_truncated, format_hex_addr, is_blank, parse_hex_addr, truncate_utf8,
};

pub fn suite_utilities(r: &mut SuiteRunner<'_>) {
    r.case("copy_truncated_fits_buffer", || {
        let mut buf = [0u8; 16];
        let written = copy_truncated(&mut buf, "stack-frame");
        check_eq!(written, 11);
        check_eq!(buffer_to_str(&buf), Some("stack-frame"));
        Ok(())
    });

    r.case("copy_truncated_clips_long_input", || {
        let mut buf = [0u8; 8];
        let written = copy_truncated(&mut buf, "libmonochrome.so");
        check_eq!(written, 7);
        check_eq!(buffer_to_str(&buf), Some("libmono"));
        Ok(())
    });

    r.case("copy_truncated_respects_char_boundaries", || {
        let mut buf = [0u8; 4];
        // "señal" clips before the two-byte "ñ" rather than through it.
        let written = copy_truncated(&mut buf, "señal");
        check_eq!(written, 2);
        check_eq!(buffer_to_str(&buf), Some("se"));
        Ok(())
    });

    r.case("truncate_utf8_noop_when_short", || {
        check_eq!(truncate_utf8("backtrace", 64), "backtrace");
        check_eq!(truncate_utf8("", 0), "");
        Ok(())
    });

    r.case("hex_addr_roundtrip", || {
        let addr: u64 = 0x7f3a_9c00_1234;
        let rendered = format_hex_addr(addr);
        check!(rendered.starts_with("0x"), "missing 0x prefix: {rendered}");
        check_eq!(parse_hex_addr(&rendered), Some(addr));
        Ok(())
    });

    r.case("blank_detection", || {
        check!(is_blank("  \t"));
        check!(!is_blank("signal 11"));
        Ok(())
    });
}
