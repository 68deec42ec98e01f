#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (makefile, object) = data;
    let _ = kunit_insert::extract_guard(makefile, object);
});
