use criterion::{Criterion, black_box, criterion_group, criterion_main};
use shelfmark_core::{
    BookCatalog, BookRecord, PivotTable, PopularBook, PopularityTable, RecommenderContext,
    SimilarityMatrix,
};

/// Synthetic context roughly the size of the collaborative-filtering artifact (~700 titles).
fn build_context(n: usize) -> RecommenderContext {
    let titles: Vec<String> = (0..n).map(|i| format!("Book {i}")).collect();

    let catalog = BookCatalog::new(
        titles
            .iter()
            .map(|t| BookRecord::new(t.clone(), "Author", "http://img/cover.jpg"))
            .collect(),
    );

    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        1.0
                    } else {
                        ((i * 31 + j * 17) % 997) as f32 / 997.0
                    }
                })
                .collect()
        })
        .collect();

    let popular = PopularityTable::new(
        (0..50)
            .map(|i| PopularBook::new(format!("Book {i}"), "Author", "u", 50.0 - i as f64))
            .collect(),
    );

    RecommenderContext::new(
        popular,
        catalog,
        PivotTable::new(titles).unwrap(),
        SimilarityMatrix::new(rows).unwrap(),
    )
    .unwrap()
}

fn bench_recommend(c: &mut Criterion) {
    let ctx = build_context(700);

    c.bench_function("recommend_single", |b| {
        b.iter(|| ctx.recommend(black_box("Book 42")).unwrap());
    });

    c.bench_function("top_popular_50", |b| {
        b.iter(|| ctx.top_popular(black_box(50)).len());
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
