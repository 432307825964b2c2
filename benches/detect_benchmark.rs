use charprobe::{detect, DetectorConfig, EncodingEra, UniversalDetector};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const FRENCH_LATIN1: &[u8] = include_bytes!("../tests/data/french.latin1.txt");
const CHINESE_BIG5: &[u8] = include_bytes!("../tests/data/chinese.big5.txt");
const GERMAN_UTF8: &[u8] = include_bytes!("../tests/data/german.utf-8.txt");
const RUSSIAN_KOI8_R: &[u8] = include_bytes!("../tests/data/russian.koi8-r.txt");

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("Detect");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let config = DetectorConfig::default();
    let ascii = "Plain seven-bit text with nothing unusual in it. ".repeat(40);

    group.bench_function("ascii", |b| b.iter(|| {
        detect(black_box(ascii.as_bytes()), &config).unwrap()
    }));
    group.bench_function("utf8", |b| b.iter(|| {
        detect(black_box(GERMAN_UTF8), &config).unwrap()
    }));
    group.bench_function("latin1", |b| b.iter(|| {
        detect(black_box(FRENCH_LATIN1), &config).unwrap()
    }));
    group.bench_function("big5", |b| b.iter(|| {
        detect(black_box(CHINESE_BIG5), &config).unwrap()
    }));
    group.bench_function("koi8_r", |b| b.iter(|| {
        detect(black_box(RUSSIAN_KOI8_R), &config).unwrap()
    }));

    group.finish();
}

fn bench_eras(c: &mut Criterion) {
    let mut group = c.benchmark_group("Eras");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // more eras means more single-byte probers running side by side
    let eras = [
        ("modern_web", EncodingEra::MODERN_WEB),
        ("legacy", EncodingEra::MODERN_WEB | EncodingEra::LEGACY),
        ("all", EncodingEra::ALL),
    ];
    for (name, era) in eras {
        let config = DetectorConfig::default().with_encoding_era(era);
        group.bench_function(format!("latin1_{}", name), |b| b.iter(|| {
            detect(black_box(FRENCH_LATIN1), &config).unwrap()
        }));
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("Streaming");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let mut detector = UniversalDetector::new(DetectorConfig::default());
    for &size in &[16, 256, 4096] {
        group.bench_function(format!("chunks_{}", size), |b| b.iter(|| {
            detector.reset();
            for chunk in FRENCH_LATIN1.chunks(size) {
                detector.feed(black_box(chunk));
                if detector.is_done() {
                    break;
                }
            }
            detector.close()
        }));
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_documents,
    bench_eras,
    bench_streaming
);
criterion_main!(benches);
