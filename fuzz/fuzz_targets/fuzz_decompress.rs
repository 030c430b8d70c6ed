#![no_main]

use huffpack::decompress;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes may fail with a format error - that's OK
    // We're looking for panics/crashes, not errors
    let _ = decompress(data, Vec::new());
});
