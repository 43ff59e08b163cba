use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use pelagos::catalog::store::{CatalogStore, FilterUpdate};
use pelagos::taxonomy::extract_catalog;
use pelagos::taxonomy::node::{TaxonNode, TaxonProperty};

fn generate_forest(families: usize, species_per_family: usize) -> Vec<TaxonNode> {
    (0..families)
        .map(|f| TaxonNode {
            is_taxon: true,
            rank_name: Some("familia".to_string()),
            scientific_term: Some(format!("Familia{f}")),
            common_name: Some(format!("Familia{f}")),
            identifier: Some(format!("fam{f}")),
            children: (0..species_per_family)
                .map(|s| TaxonNode {
                    is_taxon: true,
                    scientific_term: Some(format!("Genus species{f}_{s}")),
                    common_name: Some(format!("Pez {f}-{s}")),
                    identifier: Some(format!("sp{f}_{s}")),
                    description: Some("Habita en fondos rocosos del Mediterráneo.".to_string()),
                    properties: vec![
                        TaxonProperty {
                            name: "Habitat".to_string(),
                            value: "Fondos rocosos".to_string(),
                        },
                        TaxonProperty {
                            name: "Distribución".to_string(),
                            value: "Mediterráneo occidental".to_string(),
                        },
                    ],
                    ..TaxonNode::default()
                })
                .collect(),
            ..TaxonNode::default()
        })
        .collect()
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("taxonomy/extract");

    for species in [100usize, 1000, 5000] {
        let forest = generate_forest(20, species / 20);
        group.bench_with_input(BenchmarkId::from_parameter(species), &forest, |b, forest| {
            b.iter(|| {
                let records = extract_catalog(forest);
                black_box(records);
            });
        });
    }

    group.finish();
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/filter");

    for species in [100usize, 1000, 5000] {
        let records = extract_catalog(&generate_forest(20, species / 20));
        group.bench_with_input(BenchmarkId::from_parameter(species), &records, |b, records| {
            b.iter(|| {
                let mut store = CatalogStore::new(records.clone(), 6);
                store.set_filters(FilterUpdate::search("pez 3"));
                black_box(store.get_page().total_count);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_filtering);
criterion_main!(benches);
