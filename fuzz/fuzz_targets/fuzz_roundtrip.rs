#![no_main]

use huffpack::{compress, decompress};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Compression must succeed for any finite input and round-trip exactly
    let mut compressed = Vec::new();
    compress(Cursor::new(data.to_vec()), &mut compressed).expect("compression cannot fail");

    let mut restored = Vec::new();
    decompress(compressed.as_slice(), &mut restored).expect("own output must decode");
    assert_eq!(restored, data);
});
