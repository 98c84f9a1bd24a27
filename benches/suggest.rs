use criterion::{black_box, criterion_group, criterion_main, Criterion};
use autocorrect::{Indexer, Query};

/// Deterministic pseudo-words over a small alphabet.
fn generate_words(count: usize) -> Vec<String> {
    let alphabet: Vec<char> = "abcdefghijklmnoprstuwy".chars().collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let len = 3 + (state % 9) as usize;
        let mut word: String = (0..len)
            .map(|n| alphabet[((state >> (n * 5)) % alphabet.len() as u64) as usize])
            .collect();
        /* Suffix keeps words distinct */
        word.push_str(&i.to_string());
        words.push(word);
    }
    words
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance", |b| {
        b.iter(|| autocorrect::edit_distance(black_box("accommodation"), black_box("acomodation")))
    });
}

fn bench_suggest(c: &mut Criterion) {
    let words = generate_words(50_000);
    let mut indexer = Indexer::new();
    indexer.add_words(&words).unwrap();
    /* Single-entry cache, consecutive queries differ */
    let index = indexer.finish_with_cache(1);
    let queries: Vec<String> = words.iter().step_by(997).map(|w| w[1..].to_string()).collect();

    let mut group = c.benchmark_group("suggest");
    group.bench_function("indexed", |b| {
        b.iter(|| {
            for word in queries.iter() {
                let _ = black_box(index.search(&Query::new(word)).unwrap());
            }
        })
    });
    group.bench_function("exhaustive", |b| {
        b.iter(|| {
            for word in queries.iter().take(5) {
                let _ = black_box(index.search_exhaustive(&Query::new(word)).unwrap());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_distance, bench_suggest);
criterion_main!(benches);
