//! Inference and filtering performance benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use rowscope::{generate_default_config, DatasetItem, ExplorerSession};

/// A sample row with a realistic mix of field shapes.
fn wide_sample(fields: usize) -> DatasetItem {
    let mut value = serde_json::Map::new();
    value.insert("task_id".to_string(), json!("TASK_0001"));
    value.insert("sector".to_string(), json!("Technology"));
    value.insert(
        "prompt".to_string(),
        json!("Produce a quarterly summary of the attached material."),
    );
    for i in 0..fields {
        value.insert(format!("extra_field_{}", i), json!(format!("value {}", i)));
    }
    value.insert("reference_file_urls".to_string(), json!(["https://x/a.pdf"]));
    serde_json::from_value(serde_json::Value::Object(value)).unwrap()
}

fn generate_items(count: usize) -> Vec<DatasetItem> {
    let sectors = ["Tech", "Legal", "Health", "Finance"];
    (0..count)
        .map(|i| {
            serde_json::from_value(json!({
                "task_id": format!("T{}", i),
                "sector": sectors[i % sectors.len()],
                "prompt": format!("Prompt body for task number {}", i),
            }))
            .unwrap()
        })
        .collect()
}

fn bench_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference");

    for fields in [5, 20, 80] {
        let sample = wide_sample(fields);
        group.throughput(Throughput::Elements(fields as u64));
        group.bench_with_input(
            BenchmarkId::new("generate_default_config", fields),
            &sample,
            |b, sample| {
                b.iter(|| generate_default_config(black_box("openai/gdpval"), black_box(sample)))
            },
        );
    }

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");

    for count in [100, 1000, 10000] {
        let items = generate_items(count);
        let config = generate_default_config("demo/tasks", &items[0]);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("set_filter", count), &count, |b, _| {
            b.iter_batched(
                || ExplorerSession::new(config.clone(), items.clone()),
                |mut session| {
                    session.set_filter("sector", "Tech");
                    black_box(session.len())
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_inference, bench_filtering);
criterion_main!(benches);
