//! Observation fuzz target: feed arbitrary text to the record parser.
//! Construction and every accessor must not panic.
//! Build with: cargo fuzz run observation_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let o = wtrack_base::Observation::new(s);
    assert_eq!(o.raw(), s);
    let _ = o.timestamp();
    let _ = o.frequency();
    let _ = o.signal();
    assert_eq!(o.packet_type(), (o.r#type(), o.subtype()));
    let _ = o.src();
    let _ = o.dest();
    let _ = o.station();
    let _ = o.ap();
    let _ = o.check_strict();
    for (k, v) in o.attrs().iter() {
        assert!(o.attr(k).is_some());
        let _ = v;
    }
    assert_eq!(o.valid(), o.check().is_ok());
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run observation_fuzz");
}
