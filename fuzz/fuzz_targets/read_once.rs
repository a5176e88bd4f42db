#![no_main]
use libfuzzer_sys::fuzz_target;
use read_once::{read_once, ReadOutcome};

fuzz_target!(|data: &[u8]| {
    // First byte picks the buffer capacity, the rest is the source.
    let (capacity, source_bytes) = match data.split_first() {
        Some((first, rest)) => (*first as usize, rest),
        None => return,
    };

    let mut source = std::io::Cursor::new(source_bytes);
    let mut buf = vec![0xCCu8; capacity];
    let mut offset = 0;

    loop {
        match read_once(&mut source, &mut buf).unwrap() {
            ReadOutcome::EndOfStream => {
                assert!(capacity > 0);
                assert_eq!(offset, source_bytes.len());
                break;
            }
            ReadOutcome::Read(0) => {
                assert_eq!(capacity, 0);
                break;
            }
            ReadOutcome::Read(n) => {
                assert!(n <= capacity);
                assert_eq!(&buf[..n], &source_bytes[offset..offset + n]);
                offset += n;
            }
        }
    }
});
