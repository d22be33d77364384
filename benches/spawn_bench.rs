use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pokehunt::{CreatureGenerator, FixedRoll, Session, SessionConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn bench_spawn(c: &mut Criterion) {
    let generator = CreatureGenerator::new();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("spawn_creature", |b| {
        b.iter(|| black_box(generator.spawn(&mut rng)))
    });
}

fn bench_session_minute(c: &mut Criterion) {
    c.bench_function("session_minute_of_play", |b| {
        b.iter(|| {
            let mut session =
                Session::start(SessionConfig::for_testing(), FixedRoll::always_high()).unwrap();
            for _ in 0..600 {
                if let Some(target) = session.population().first().map(|c| c.id) {
                    session.select(target);
                    session.throw_ball();
                }
                session.advance(Duration::from_millis(100));
            }
            black_box(session.collection().len())
        })
    });
}

criterion_group!(benches, bench_spawn, bench_session_minute);
criterion_main!(benches);
