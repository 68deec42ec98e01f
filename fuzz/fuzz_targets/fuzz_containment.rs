#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (fragment, content) = data;
    // A fragment appended after any separator is always found
    let extended = format!("{content}\n{fragment}");
    assert!(kunit_insert::is_contained(fragment, &extended));
});
