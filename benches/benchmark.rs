//! Benchmarks for the enigma machine.
//!
//! Measures catalog/machine setup time, single-character conversion, and
//! message throughput for different message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{wiring, Alphabet, Machine, Permutation};

/// Rotor order used consistently across all benchmarks.
const ROTOR_ORDER: [&str; 5] = ["B", "Beta", "I", "II", "III"];

fn build_machine() -> Machine {
    let alphabet = Alphabet::upper();
    let catalog = wiring::naval_catalog(&alphabet).unwrap();
    let mut machine = Machine::new(alphabet.clone(), 5, 3, catalog).unwrap();
    machine.insert_rotors(&ROTOR_ORDER).unwrap();
    machine.set_rotors("AAAA").unwrap();
    machine.set_plugboard(Permutation::new("(YF) (HZ)", &alphabet).unwrap());
    machine
}

/// Benchmarks full machine construction and configuration, including
/// cycle-notation parsing for the whole naval catalog.
fn bench_setup(c: &mut Criterion) {
    c.bench_function("machine_setup", |b| {
        b.iter(|| {
            let machine = build_machine();
            black_box(machine);
        });
    });
}

/// Benchmarks one keystroke: stepping plus the full signal path.
fn bench_convert_char(c: &mut Criterion) {
    let mut machine = build_machine();
    c.bench_function("convert_char", |b| {
        b.iter(|| machine.convert(black_box(7)).unwrap());
    });
}

/// Benchmarks message conversion throughput across message sizes.
fn bench_convert_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_message");
    for len in [64usize, 1024, 16384] {
        let msg: String = (0..len)
            .map(|i| char::from(b'A' + (i % 26) as u8))
            .collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &msg, |b, msg| {
            let mut machine = build_machine();
            b.iter(|| machine.convert_message(black_box(msg)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_setup,
    bench_convert_char,
    bench_convert_message
);
criterion_main!(benches);
