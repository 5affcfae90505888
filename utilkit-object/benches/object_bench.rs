use criterion::{Criterion, black_box, criterion_group, criterion_main};
use utilkit_object::{object_clone, object_diff, object_to_query_string};
use utilkit_types::{Map, Value, json};

fn sample(width: usize) -> Value {
    let mut root = Map::new();
    for i in 0..width {
        root.insert(
            format!("field_{i}"),
            json!({"id": i, "name": format!("n{i}"), "tags": ["a", "b"], "meta": {"depth": {"n": i}}}),
        );
    }
    Value::Object(root)
}

fn bench_clone(c: &mut Criterion) {
    let v = sample(256);
    c.bench_function("object_clone/256", |b| b.iter(|| object_clone(black_box(&v))));
}

fn bench_diff(c: &mut Criterion) {
    let original = sample(256);
    let mut target = sample(256);
    target["field_7"]["meta"]["depth"]["n"] = json!(-1);
    let Value::Object(target) = target else {
        return;
    };
    c.bench_function("object_diff/256", |b| {
        b.iter(|| object_diff(black_box(&original), black_box(&target)))
    });
}

fn bench_query_string(c: &mut Criterion) {
    let v = sample(64);
    c.bench_function("object_to_query_string/64", |b| {
        b.iter(|| object_to_query_string(black_box(&v)))
    });
}

criterion_group!(benches, bench_clone, bench_diff, bench_query_string);
criterion_main!(benches);
