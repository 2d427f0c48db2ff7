#![no_main]

use libfuzzer_sys::fuzz_target;
use tdop::{grammar, parser, scanner, sql};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let table = grammar::statement_patterns();
        // Fuzz the scanner, then the parsers if scanning succeeds
        if scanner::tokenize(s, &table).is_ok() {
            if let Ok(tree) = parser::parse(s) {
                let _ = tree.to_dot();
            }
            let _ = sql::parse(s);
        }
    }
});
