use criterion::{black_box, criterion_group, criterion_main, Criterion};
use factory_game::core::{Building, Grid};
use factory_game::engine::{BuildingManager, GameSession};
use factory_game::term::{FrameBuffer, GameView, Viewport};
use factory_game::types::{BuildingType, GameAction, GRID_HEIGHT, GRID_WIDTH};

fn bench_session_tick(c: &mut Criterion) {
    let mut session = GameSession::new()
        .with_player_at(400.0, 300.0)
        .with_enemy_at(500.0, 200.0)
        .with_enemy_at(500.0, 400.0);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16), (1, 1));
        })
    });
}

fn bench_fill_grid(c: &mut Criterion) {
    c.bench_function("fill_and_clear_grid", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            let mut manager = BuildingManager::new(&mut grid);
            for y in 0..GRID_HEIGHT {
                for x in 0..GRID_WIDTH {
                    manager.try_place_building(BuildingType::Conveyor, x, y);
                }
            }
            for y in 0..GRID_HEIGHT {
                for x in 0..GRID_WIDTH {
                    manager.remove_building(x, y);
                }
            }
            black_box(grid.occupied_count())
        })
    });
}

fn bench_rejected_placement(c: &mut Criterion) {
    let mut grid = Grid::new();
    grid.place_building(Building::new(BuildingType::Factory, 5, 5));

    c.bench_function("place_on_occupied_cell", |b| {
        b.iter(|| grid.place_building(black_box(Building::new(BuildingType::Conveyor, 5, 5))))
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut session = GameSession::new();
    for i in 0..GRID_WIDTH {
        session.apply_action(GameAction::PlaceAt { x: i, y: i % GRID_HEIGHT });
    }
    session.set_hover(Some((200.0, 150.0)));

    c.bench_function("render_frame_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&session), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_session_tick,
    bench_fill_grid,
    bench_rejected_placement,
    bench_render_frame
);
criterion_main!(benches);
