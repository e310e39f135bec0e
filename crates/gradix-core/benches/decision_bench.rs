//! Benchmarks for the decision procedure.

use criterion::{criterion_group, criterion_main, Criterion};
use gradix_core::{
    decision, Gender, HighSchoolType, LabelDecoder, LinearClassifier, ModelBundle, Outcome,
    StandardScaler, StudentRecord,
};
use std::hint::black_box;

fn bench_bundle() -> ModelBundle {
    let classifier = LinearClassifier::new(
        vec![
            vec![0.5, 0.1, 0.0, 1.2, 0.8, 0.3],
            vec![0.0, 0.2, 0.1, 0.4, 0.1, 0.0],
            vec![-0.5, -0.1, 0.0, -1.2, -0.8, -0.3],
        ],
        vec![0.1, 0.0, -0.1],
    );
    let scaler = StandardScaler::new(
        vec![0.5, 21.0, 1.0, 90.0, 2.8, 0.3],
        vec![0.5, 4.0, 1.1, 45.0, 0.6, 0.46],
    );
    let labels = LabelDecoder::new(vec![
        Outcome::Graduated,
        Outcome::Active,
        Outcome::DroppedOut,
    ]);

    ModelBundle::from_parts(
        classifier,
        scaler,
        gradix_core::FeatureName::all().to_vec(),
        labels,
    )
    .expect("bench bundle is valid")
}

fn bench_predict(c: &mut Criterion) {
    let bundle = bench_bundle();
    let record = StudentRecord::new(Gender::Female, 20, HighSchoolType::Sma, 75, 3.1, false);

    c.bench_function("predict_rule_hit", |b| {
        b.iter(|| decision::predict(black_box(&record), black_box(&bundle)));
    });

    c.bench_function("infer_model_path", |b| {
        b.iter(|| decision::infer(black_box(&record), black_box(&bundle)));
    });
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);
