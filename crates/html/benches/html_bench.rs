use criterion::{Criterion, black_box, criterion_group, criterion_main};
use html::perf_fixtures::{make_blocks, make_nested};
use html::{TokenizerConfig, TreeBuilder, TreeBuilderConfig, parse, tokenize};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;
const NESTED_DEPTH: usize = 10_000;

fn make_bracket_adversarial(bytes: usize) -> String {
    let mut body = String::with_capacity(bytes + 16);
    body.push_str("<div>");
    while body.len() < bytes {
        body.push_str("<<a < b <");
    }
    body.push_str("</div>");
    body
}

fn bench_tokenize_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    let config = TokenizerConfig::default();
    c.bench_function("bench_tokenize_small", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(&input), &config).expect("valid fixture");
            black_box(tokens.len());
        });
    });
}

fn bench_tokenize_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    let config = TokenizerConfig::default();
    c.bench_function("bench_tokenize_large", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(&input), &config).expect("valid fixture");
            black_box(tokens.len());
        });
    });
}

fn bench_tree_build_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    let config = TreeBuilderConfig::default();
    let tokens = tokenize(&input, &config.tokenizer).expect("valid fixture");
    c.bench_function("bench_tree_build_large", |b| {
        b.iter(|| {
            let mut builder = TreeBuilder::new(&config);
            for token in black_box(&tokens).iter().cloned() {
                builder.push_tag(token).expect("balanced fixture");
            }
            black_box(builder.finish().expect("balanced fixture"));
        });
    });
}

fn bench_parse_large_end_to_end(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_parse_large_end_to_end", |b| {
        b.iter(|| {
            let forest = parse(black_box(&input)).expect("valid fixture");
            black_box(forest);
        });
    });
}

fn bench_parse_deep_nesting(c: &mut Criterion) {
    let input = make_nested(NESTED_DEPTH);
    c.bench_function("bench_parse_deep_nesting", |b| {
        b.iter(|| {
            let forest = parse(black_box(&input)).expect("valid fixture");
            black_box(forest.len());
        });
    });
}

fn bench_tokenize_bracket_adversarial(c: &mut Criterion) {
    let input = make_bracket_adversarial(512 * 1024);
    let config = TokenizerConfig::default();
    c.bench_function("bench_tokenize_bracket_adversarial", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(&input), &config).expect("valid fixture");
            black_box(tokens.len());
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize_small,
    bench_tokenize_large,
    bench_tree_build_large,
    bench_parse_large_end_to_end,
    bench_parse_deep_nesting,
    bench_tokenize_bracket_adversarial
);
criterion_main!(benches);
