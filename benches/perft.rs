use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use chromachess::controller::GameController;
use chromachess::engine::search::{Search, SearchLimits};
use chromachess::game::Color;

const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_starting_position");
    group
        .significance_level(0.1)
        .sample_size(50)
        .measurement_time(std::time::Duration::from_secs(10));

    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut controller = GameController::new();
                controller.new_game(&ALL).unwrap();
                black_box(controller.perft(depth).unwrap())
            });
        });
    }
    group.finish();
}

fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_starting_position");
    group.sample_size(20);

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let mut controller = GameController::new();
            let state = *controller.new_game(&ALL).unwrap();

            b.iter(|| black_box(Search::new(SearchLimits::depth(depth)).run(&state).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, perft_benchmark, search_benchmark);
criterion_main!(benches);
