//! Benchmark: build observations from sniffer lines, then read every accessor.
//! Short line (fixed fields only) vs long line (station escapes plus many attributes).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use wtrack_base::{scan_capture, Observation, ScanOptions};

const SHORT: &str = "1595273999.7138083\t2.442GHz\t56\t2\t0\t0c:51:01:e4:da:2c\t28:ff:3c:a0:f0:7c";

fn long_line() -> String {
    let mut line = String::from(
        "1595096135.744034\t2.437GHz\t44\t0\t8\t1c:b7:2c:7c:15:98\tff:ff:ff:ff:ff:ff\t0\tHome\\x00\\x00Net",
    );
    for key in 0..40 {
        line.push_str(&format!("\t{}\t\\x01\\x00\\x00\\x0f\\xac\\x04", key));
    }
    line.push_str("\t999\t\n");
    line
}

fn read_all(o: &Observation) {
    black_box(o.timestamp());
    black_box(o.frequency());
    black_box(o.signal());
    black_box(o.packet_type());
    black_box(o.src());
    black_box(o.dest());
    black_box(o.station());
    black_box(o.attr("999"));
    black_box(o.ap());
    black_box(o.valid());
}

fn bench_observation(c: &mut Criterion) {
    let long = long_line();
    c.bench_function("observation_short", |b| {
        b.iter(|| read_all(&Observation::new(black_box(SHORT))))
    });
    c.bench_function("observation_long", |b| {
        b.iter(|| read_all(&Observation::new(black_box(long.as_str()))))
    });

    let capture: String = (0..1000)
        .map(|i| if i % 10 == 0 { SHORT.to_string() + "\n" } else { long.clone() })
        .collect();
    c.bench_function("scan_capture_1000", |b| {
        b.iter(|| {
            let scan = scan_capture(Cursor::new(capture.as_bytes()), ScanOptions::default())
                .expect("scan");
            black_box(scan.observations.len())
        })
    });
}

criterion_group!(benches, bench_observation);
criterion_main!(benches);
