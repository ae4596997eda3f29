use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ipcalc_cidr::Cidr;

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("cidr_parse", |b| {
        b.iter(|| Cidr::parse(black_box("192.168.1.10/24")))
    });
}

fn benchmark_report(c: &mut Criterion) {
    let cidr = Cidr::parse("172.20.3.4/22").unwrap();

    c.bench_function("cidr_report_text", |b| {
        b.iter(|| black_box(cidr).report().to_string())
    });
}

criterion_group!(benches, benchmark_parse, benchmark_report);
criterion_main!(benches);
