use criterion::{criterion_group, criterion_main, Criterion};
use verity_bool::{syntax::Equation, table::TruthTable};

const EQUATIONS: [&str; 6] = [
    "A*B+!C",
    "(A+B)(C+!D)",
    "!(A*B)+!A*!B",
    "A(B+C)(D+E)",
    "!A!B!C+ABC",
    "(A+!B)*(B+!C)*(C+!A)",
];

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(parse_all));
}

fn table_benchmark(c: &mut Criterion) {
    let equations = parse_all();
    c.bench_function("table", |b| b.iter(|| tabulate(&equations)));
}

fn parse_all() -> Vec<Equation> {
    EQUATIONS.iter().map(|text| text.parse().unwrap()).collect()
}

fn tabulate(equations: &[Equation]) -> usize {
    let table = TruthTable::new(equations);
    table.rows().filter_map(Result::ok).count()
}

criterion_group!(benches, parse_benchmark, table_benchmark);
criterion_main!(benches);
