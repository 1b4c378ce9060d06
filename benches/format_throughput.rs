//! Benchmarks for message formatting and response parsing
//!
//! This benchmark measures:
//! - Uniform → wire conversion for growing conversations
//! - Reply extraction per provider

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use ai_format_rust::{get_formatter, Message, ProviderKind};

fn conversation(len: usize) -> Vec<Message> {
    (0..len)
        .map(|i| {
            if i % 2 == 0 {
                Message::user(format!("question number {i}"))
            } else {
                Message::assistant(format!("answer number {i}"))
            }
        })
        .collect()
}

fn bench_format_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_messages");
    for len in [1usize, 16, 256] {
        let messages = conversation(len);
        group.throughput(Throughput::Elements(len as u64));
        for kind in [ProviderKind::OpenAi, ProviderKind::Echo] {
            group.bench_with_input(BenchmarkId::new(kind.key(), len), &messages, |b, m| {
                let driver = kind.driver();
                b.iter(|| driver.format_messages(black_box(m)))
            });
        }
    }
    group.finish();
}

fn bench_parse_response(c: &mut Criterion) {
    let cases = [
        (
            "openai",
            json!({"choices": [{"message": {"role": "assistant", "content": "hello"}}]}),
        ),
        (
            "ollama",
            json!({"message": {"role": "assistant", "content": "hello"}}),
        ),
        ("llamacpp", json!({"content": "hello"})),
    ];
    let mut group = c.benchmark_group("parse_response");
    for (key, body) in &cases {
        let driver = get_formatter(key);
        group.bench_function(*key, |b| b.iter(|| driver.parse_response(black_box(body))));
    }
    group.finish();
}

criterion_group!(benches, bench_format_messages, bench_parse_response);
criterion_main!(benches);
