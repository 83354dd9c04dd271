use cabinet_designer::template::load_from_template;
use cabinet_designer::{
    derive_panels, parse_template_document, AppState, CabinetTemplate, ConstructionOptions,
    HierarchyStore, SceneGraph, TemplateDocument,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_derive_panels(c: &mut Criterion) {
    let options = ConstructionOptions::default();

    c.bench_function("derive_panels_default", |b| {
        b.iter(|| {
            let panels = derive_panels(
                black_box(800.0),
                black_box(720.0),
                black_box(560.0),
                black_box(18.0),
                &options,
            );
            black_box(panels.len())
        })
    });
}

fn build_synthetic_template(cabinet_count: usize) -> String {
    let cabinets = (0..cabinet_count)
        .map(|i| CabinetTemplate {
            id: Some(format!("cab-bench-{i}").into()),
            name: None,
            width: 400.0 + (i % 5) as f32 * 100.0,
            height: 720.0,
            depth: 560.0,
            thickness: 18.0,
            options: ConstructionOptions::default(),
        })
        .collect();
    TemplateDocument { cabinets }
        .to_json()
        .expect("Template-Serialisierung fehlgeschlagen")
}

fn bench_template_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("template_load");

    for &cabinet_count in &[100usize, 1_000usize] {
        let json = build_synthetic_template(cabinet_count);

        group.bench_with_input(
            BenchmarkId::new("parse_and_materialize", cabinet_count),
            &json,
            |b, json| {
                b.iter(|| {
                    let mut store = HierarchyStore::new(Box::new(SceneGraph::new()));
                    let entries =
                        parse_template_document(black_box(json)).expect("Template parse failed");
                    let report = load_from_template(&mut store, None, entries);
                    black_box(report.created.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("remove_all", cabinet_count),
            &json,
            |b, json| {
                b.iter_batched(
                    || {
                        let mut state = AppState::new();
                        let entries = parse_template_document(json).expect("Template parse failed");
                        load_from_template(&mut state.store, None, entries);
                        state
                    },
                    |mut state| {
                        state.store.clear_all();
                        black_box(state.panel_count())
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_derive_panels, bench_template_load);
criterion_main!(core_benches);
