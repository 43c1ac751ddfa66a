//! Criterion benchmarks for foxglove-knn: single and batch prediction.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use foxglove_knn::{ClassPair, KnnClassifier};

fn make_blobs(n_per_class: usize, n_features: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<String>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut features = Vec::with_capacity(2 * n_per_class);
    let mut labels = Vec::with_capacity(2 * n_per_class);
    for (center, label) in [(0.0, "B"), (5.0, "M")] {
        for _ in 0..n_per_class {
            let row: Vec<f64> = (0..n_features)
                .map(|_| center + rng.r#gen::<f64>())
                .collect();
            features.push(row);
            labels.push(label.to_string());
        }
    }
    (features, labels)
}

fn bench_predict_single(c: &mut Criterion) {
    let (features, labels) = make_blobs(500, 30, 42);
    let classes = ClassPair::new("B", "M").unwrap();
    let knn = KnnClassifier::new(&features, &labels, classes, 7).unwrap();
    let query = vec![2.5; 30];

    c.bench_function("knn_predict_1000x30_k7", |b| {
        b.iter(|| knn.predict(&query).unwrap());
    });
}

fn bench_predict_batch(c: &mut Criterion) {
    let (features, labels) = make_blobs(500, 30, 42);
    let (queries, _) = make_blobs(100, 30, 7);
    let classes = ClassPair::new("B", "M").unwrap();
    let knn = KnnClassifier::new(&features, &labels, classes, 7).unwrap();

    c.bench_function("knn_predict_batch_200_queries_1000x30_k7", |b| {
        b.iter(|| knn.predict_batch(&queries).unwrap());
    });
}

criterion_group!(benches, bench_predict_single, bench_predict_batch);
criterion_main!(benches);
