use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snaketris::core::{GameSnapshot, GameState, Rules};
use tui_snaketris::types::{Direction, GameAction, BOARD_CELLS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Practice mode keeps the game running without a restart inside the window.
    let rules = Rules::default().with_game_over_disabled(true);
    let mut gs = GameState::with_rules(1, rules);
    let mut snap = GameSnapshot::default();
    snap.snake.reserve(BOARD_CELLS * 2);

    // Warm-up.
    let _ = gs.tick(16);
    let _ = gs.apply_action(GameAction::MoveLeft);
    gs.snapshot_into(&mut snap);

    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    let allocs = with_alloc_counting(|| {
        for i in 0..200u32 {
            let _ = gs.tick(16 + (i % 7) * 30);
            if i % 5 == 0 {
                let _ = gs.apply_action(GameAction::Turn(turns[(i / 5) as usize % 4]));
            }
        }

        for _ in 0..50 {
            let _ = gs.apply_action(GameAction::MoveLeft);
            let _ = gs.apply_action(GameAction::MoveRight);
            let _ = gs.apply_action(GameAction::RotateCw);
            let _ = gs.apply_action(GameAction::RotateCcw);
        }

        // Soft drops drive the lock, line-clear and spawn paths.
        for _ in 0..400 {
            let _ = gs.apply_action(GameAction::SoftDrop);
            let _ = gs.tick(150);
            gs.snapshot_into(&mut snap);
        }
    });

    assert_eq!(allocs, 0);
}
