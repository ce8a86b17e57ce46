#![no_main]

use libfuzzer_sys::fuzz_target;
use sfscope::{render, SfFile};

fuzz_target!(|data: &[u8]| {
    let outcome = SfFile::from_mem(data.to_vec());
    let output = render(&outcome);
    assert_eq!(outcome.is_ok(), output.starts_with("SUCCESS\n"));
});
