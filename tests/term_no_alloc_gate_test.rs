use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_snaketris::core::{GameSnapshot, GameState};
use tui_snaketris::scores::HighScores;
use tui_snaketris::term::{FrameBuffer, GameView, PanelExtras, Viewport};
use tui_snaketris::types::{BOARD_CELLS, FRAME_MS};

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
fn term_game_view_render_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut scores = HighScores::new();
    scores.add_score("ada", 120, 0);
    scores.add_score("bob", 40, 0);
    let extras = PanelExtras {
        high_scores: Some(&scores),
        name_prompt: None,
    };

    let mut gs = GameState::new(1);
    let mut snap = GameSnapshot::default();
    snap.snake.reserve(BOARD_CELLS * 2);

    // Warm-up (resize/initial clears).
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, &extras, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = gs.tick(FRAME_MS);
            gs.snapshot_into(&mut snap);
            let _ = snap.fingerprint();
            view.render_into(&snap, &extras, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
