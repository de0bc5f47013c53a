#![no_main]

use libfuzzer_sys::fuzz_target;
use pgdl::{EntryPoint, highlight_with};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        for entry in [EntryPoint::Program, EntryPoint::AnyType, EntryPoint::Expression] {
            match highlight_with(s, entry) {
                Ok(tokens) => {
                    // Tokens must tile the input exactly
                    let mut cursor = 0;
                    for token in &tokens {
                        assert_eq!(token.span.start, cursor);
                        assert!(token.span.end > token.span.start);
                        assert_eq!(&s[token.span.start..token.span.end], token.text);
                        cursor = token.span.end;
                    }
                    assert_eq!(cursor, s.len());
                }
                Err(err) => assert!(err.offset() <= s.len()),
            }
        }
    }
});
