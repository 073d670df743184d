use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use undo_redo::{AddCommand, AppendTextCommand, CommandManager, MultiplyCommand};

/// Benchmark recording commands with and without a history bound
fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");
    let commands: i64 = 1000;

    for limit in [None, Some(100)] {
        let label = match limit {
            Some(n) => format!("bounded_{}", n),
            None => "unbounded".to_string(),
        };

        group.bench_with_input(BenchmarkId::from_parameter(label), &commands, |b, &n| {
            b.iter(|| {
                let mut manager: CommandManager<i64> = match limit {
                    Some(max) => CommandManager::with_capacity(max),
                    None => CommandManager::new(),
                };
                let mut value: i64 = 0;
                for i in 0..n {
                    manager
                        .execute(Box::new(AddCommand::new(i)), &mut value)
                        .unwrap();
                }
                black_box(value)
            });
        });
    }
    group.finish();
}

/// Benchmark walking the whole history back and forth
fn bench_undo_redo_cycle(c: &mut Criterion) {
    let mut manager: CommandManager<i64> = CommandManager::new();
    let mut value: i64 = 1;

    // Doubling, then negating and stepping toward zero keeps |value| <= 2
    for i in 0..500 {
        if i % 2 == 0 {
            manager
                .execute(Box::new(MultiplyCommand::new(2)), &mut value)
                .unwrap();
        } else {
            manager
                .execute(Box::new(MultiplyCommand::new(-1)), &mut value)
                .unwrap();
            manager
                .execute(Box::new(AddCommand::new(-value.signum())), &mut value)
                .unwrap();
        }
    }
    assert_eq!(manager.undo_count(), 750);

    c.bench_function("undo_redo_cycle_750", |b| {
        b.iter(|| {
            while manager.can_undo() {
                manager.undo(&mut value).unwrap();
            }
            while manager.can_redo() {
                manager.redo(&mut value).unwrap();
            }
            black_box(value)
        });
    });
}

/// Benchmark text typing with undo
fn bench_text_typing(c: &mut Criterion) {
    c.bench_function("type_and_undo_text", |b| {
        b.iter(|| {
            let mut text = String::new();
            let mut manager: CommandManager<String> = CommandManager::new();
            for word in ["lorem ", "ipsum ", "dolor ", "sit ", "amet"]
                .iter()
                .cycle()
                .take(200)
            {
                manager
                    .execute(Box::new(AppendTextCommand::new(*word)), &mut text)
                    .unwrap();
            }
            while manager.can_undo() {
                manager.undo(&mut text).unwrap();
            }
            black_box(text.len())
        });
    });
}

criterion_group!(
    benches,
    bench_execute,
    bench_undo_redo_cycle,
    bench_text_typing
);
criterion_main!(benches);
