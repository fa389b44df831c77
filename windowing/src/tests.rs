use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn random_layout(rng: &mut Lcg) -> Layout {
    if rng.gen_bool() {
        Layout::linear(rng.gen_range_u32(1, 300))
    } else {
        Layout::grid(rng.gen_range_u32(1, 500), rng.gen_range_u32(1, 300))
    }
}

#[test]
fn linear_window_at_top() {
    // length=1000, itemHeight=50, containerHeight=400, scrollTop=0:
    // pageSize=16, window 0..=32.
    let layout = Layout::linear(50);
    let dims = Dimensions::new(800, 600);
    let w = layout.window(1000, 0, 400, dims).unwrap();
    assert_eq!(w.start_index, 0);
    assert_eq!(w.end_index, 32);
    assert_eq!(w.item_height, 50);
    assert_eq!(w.item_width, ItemWidth::Fill);
    assert_eq!(w.columns, 1);
    assert_eq!(w.len(), 33);
}

#[test]
fn linear_window_mid_scroll() {
    // scrollTop=5000: floor(5000/50)=100, start=100-16=84, end=84+32=116.
    let layout = Layout::linear(50);
    let dims = Dimensions::new(800, 600);
    let w = layout.window(1000, 5000, 400, dims).unwrap();
    assert_eq!(w.start_index, 84);
    assert_eq!(w.end_index, 116);
}

#[test]
fn linear_window_clamps_to_last_index() {
    let layout = Layout::linear(50);
    let dims = Dimensions::new(800, 600);
    let w = layout.window(10, 100_000, 400, dims).unwrap();
    assert_eq!(w.start_index, 9);
    assert_eq!(w.end_index, 9);
}

#[test]
fn linear_fixed_width_passes_through() {
    let layout = Layout::linear_fixed_width(50, 320);
    let dims = Dimensions::new(800, 600);
    let w = layout.window(100, 0, 400, dims).unwrap();
    assert_eq!(w.item_width, ItemWidth::Fixed(320));
}

#[test]
fn linear_total_extent() {
    let layout = Layout::linear(132);
    let dims = Dimensions::new(800, 600);
    assert_eq!(layout.total_extent(dims, 1000), 132_000);
    assert_eq!(layout.total_extent(dims, 0), 0);
}

#[test]
fn empty_list_has_no_window() {
    let dims = Dimensions::new(800, 600);
    assert_eq!(Layout::linear(50).window(0, 0, 400, dims), None);
    assert_eq!(Layout::grid(200, 100).window(0, 0, 400, dims), None);

    let w = Windower::new(WindowerOptions::new(Layout::linear(50), 0));
    let mut items = Vec::new();
    w.collect_items(&mut items);
    assert!(items.is_empty());
}

#[test]
fn unmeasured_container_degenerates_to_single_item() {
    let layout = Layout::linear(50);
    let dims = Dimensions::new(800, 600);
    let w = layout.window(1000, 5000, 0, dims).unwrap();
    assert_eq!(w.start_index, 100);
    assert_eq!(w.end_index, 100);
}

#[test]
fn grid_columns_and_extent() {
    // viewportWidth=1000, itemWidth=200, itemHeight=100, length=37:
    // columns=5, extent=ceil(37/5)*100=800.
    let layout = Layout::grid(200, 100);
    let dims = Dimensions::new(1000, 600);
    assert_eq!(layout.columns(1000), 5);
    assert_eq!(layout.total_extent(dims, 37), 800);
}

#[test]
fn grid_columns_clamp_to_one() {
    let layout = Layout::grid(400, 132);
    assert_eq!(layout.columns(250), 1);
    assert_eq!(layout.columns(0), 1);
}

#[test]
fn grid_cell_rescales_height_to_column_width() {
    let layout = Layout::grid(200, 100);

    // Viewport exactly columns * item_width: configured size is kept.
    let (width, height) = layout.cell(Dimensions::new(1000, 600));
    assert_eq!(width, ItemWidth::Fixed(200));
    assert_eq!(height, 100);

    // 999px viewport: 4 columns of 249px, height scaled by the same ratio.
    let (width, height) = layout.cell(Dimensions::new(999, 600));
    assert_eq!(width, ItemWidth::Fixed(249));
    assert_eq!(height, 124); // floor(100 * 249 / 200)
}

#[test]
fn grid_window_snaps_to_row_start() {
    let layout = Layout::grid(200, 100);
    let dims = Dimensions::new(1000, 600);

    // containerHeight=100: rowPage=2, page=10.
    let w = layout.window(37, 350, 100, dims).unwrap();
    assert_eq!(w.columns, 5);
    assert_eq!(w.start_index, 15); // 5 * floor(350/100)
    assert_eq!(w.end_index, 35);
    assert_eq!(w.start_index % w.columns, 0);
}

#[test]
fn grid_window_overscroll_snaps_to_last_row() {
    let layout = Layout::grid(200, 100);
    let dims = Dimensions::new(1000, 600);

    // Way past the end of a 37-item grid: the window starts at the last row
    // boundary (35), not at the clamped last index (36).
    let w = layout.window(37, 1_000_000, 100, dims).unwrap();
    assert_eq!(w.start_index, 35);
    assert_eq!(w.end_index, 36);
    assert_eq!(w.start_index % w.columns, 0);
}

#[test]
fn grid_window_unmeasured_viewport_pins_first_row() {
    let layout = Layout::grid(200, 100);
    let dims = Dimensions::new(0, 0);
    let w = layout.window(37, 5000, 0, dims).unwrap();
    assert_eq!(w.columns, 1);
    assert_eq!(w.start_index, 0);
    assert_eq!(w.end_index, 0);
}

#[test]
fn grid_item_geometry() {
    let layout = Layout::grid(200, 100);
    let dims = Dimensions::new(1000, 600);
    let w = layout.window(37, 0, 400, dims).unwrap();

    let item = w.item(0);
    assert_eq!((item.left, item.top), (0, 0));

    // Index 7: row 1, column 2.
    let item = w.item(7);
    assert_eq!(item.left, 400);
    assert_eq!(item.top, 100);
    assert_eq!(item.bottom(), 200);

    // Last row holds items 35 and 36.
    let item = w.item(36);
    assert_eq!(item.left, 200);
    assert_eq!(item.top, 700);
}

#[test]
fn linear_item_geometry_is_stacked() {
    let layout = Layout::linear(132);
    let dims = Dimensions::new(800, 600);
    let w = layout.window(100, 0, 400, dims).unwrap();
    let item = w.item(7);
    assert_eq!(item.left, 0);
    assert_eq!(item.top, 7 * 132);
    assert_eq!(item.width, ItemWidth::Fill);
}

#[test]
fn window_is_deterministic() {
    let layout = Layout::grid(200, 100);
    let dims = Dimensions::new(1000, 600);
    let a = layout.window(37, 350, 100, dims);
    let b = layout.window(37, 350, 100, dims);
    assert_eq!(a, b);
}

#[test]
fn window_bounds_hold_for_random_inputs() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..2000 {
        let layout = random_layout(&mut rng);
        let len = rng.gen_range_usize(1, 5000);
        let dims = Dimensions::new(rng.gen_range_u32(0, 4000), rng.gen_range_u32(0, 4000));
        let container_height = rng.gen_range_u32(0, 4000);
        let scroll_top = rng.gen_range_u64(0, 2_000_000);

        let w = layout
            .window(len, scroll_top, container_height, dims)
            .unwrap();
        assert!(w.start_index <= w.end_index);
        assert!(w.end_index < len);
        if matches!(layout, Layout::Grid { .. }) {
            assert_eq!(w.start_index % w.columns, 0);
        }
    }
}

#[test]
fn start_index_is_monotonic_in_scroll_top() {
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let layout = random_layout(&mut rng);
        let len = rng.gen_range_usize(1, 2000);
        let dims = Dimensions::new(rng.gen_range_u32(1, 3000), rng.gen_range_u32(1, 3000));
        let container_height = rng.gen_range_u32(0, 2000);

        let mut scroll_top = 0u64;
        let mut prev_start = 0usize;
        for _ in 0..50 {
            scroll_top += rng.gen_range_u64(0, 10_000);
            let w = layout
                .window(len, scroll_top, container_height, dims)
                .unwrap();
            assert!(w.start_index >= prev_start);
            prev_start = w.start_index;
        }
    }
}

#[test]
fn resolve_fixed_height_ignores_measurements() {
    let probe = HeightProbe {
        top_offset: 64,
        parent_height: 900,
    };
    assert_eq!(resolve_container_height(&HeightRule::Fixed(400), 0, probe), 400);
    assert_eq!(
        resolve_container_height(&HeightRule::Fixed(400), 1080, HeightProbe::default()),
        400
    );
}

#[test]
fn resolve_clip_to_window_subtracts_top_offset() {
    let probe = HeightProbe {
        top_offset: 64,
        parent_height: 900,
    };
    assert_eq!(
        resolve_container_height(&HeightRule::ClipToWindow, 1080, probe),
        1016
    );
    // A container below the viewport bottom resolves to zero, not underflow.
    assert_eq!(
        resolve_container_height(&HeightRule::ClipToWindow, 40, probe),
        0
    );
}

#[test]
fn resolve_fill_parent_uses_parent_height() {
    let probe = HeightProbe {
        top_offset: 64,
        parent_height: 900,
    };
    assert_eq!(
        resolve_container_height(&HeightRule::FillParent, 1080, probe),
        900
    );
}

#[test]
fn windower_resolves_height_on_resize() {
    let options = WindowerOptions::new(Layout::linear(50), 1000)
        .with_height(HeightRule::ClipToWindow)
        .with_initial_dimensions(Some(Dimensions::new(800, 600)));
    let mut w = Windower::new(options);
    assert_eq!(w.container_height(), 600);

    w.set_height_probe(HeightProbe {
        top_offset: 100,
        parent_height: 0,
    });
    assert_eq!(w.container_height(), 500);

    w.set_dimensions(Dimensions::new(800, 1000));
    assert_eq!(w.container_height(), 900);
}

#[test]
fn windower_fixed_height_survives_resize() {
    let options = WindowerOptions::new(Layout::linear(50), 1000)
        .with_height(HeightRule::Fixed(400))
        .with_initial_dimensions(Some(Dimensions::new(800, 600)));
    let mut w = Windower::new(options);
    assert_eq!(w.container_height(), 400);

    w.apply_resize_event(
        Dimensions::new(1920, 1080),
        HeightProbe {
            top_offset: 200,
            parent_height: 700,
        },
    );
    assert_eq!(w.container_height(), 400);
}

#[test]
fn windower_scroll_clamping() {
    let options = WindowerOptions::new(Layout::linear(50), 100)
        .with_height(HeightRule::Fixed(400))
        .with_initial_dimensions(Some(Dimensions::new(800, 600)));
    let mut w = Windower::new(options);
    assert_eq!(w.total_extent(), 5000);
    assert_eq!(w.max_scroll_top(), 4600);

    w.set_scroll_top_clamped(100_000);
    assert_eq!(w.scroll_top(), 4600);
}

#[test]
fn windower_window_matches_layout_math() {
    let options = WindowerOptions::new(Layout::linear(50), 1000)
        .with_height(HeightRule::Fixed(400))
        .with_initial_dimensions(Some(Dimensions::new(800, 600)))
        .with_initial_scroll_top(5000);
    let w = Windower::new(options);
    let window = w.window().unwrap();
    assert_eq!(window.start_index, 84);
    assert_eq!(window.end_index, 116);

    let mut items = Vec::new();
    w.collect_items(&mut items);
    assert_eq!(items.len(), 33);
    assert_eq!(items[0].index, 84);
    assert_eq!(items[0].top, 84 * 50);
}

#[test]
fn windower_notifies_on_change() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let options = WindowerOptions::new(Layout::linear(50), 1000)
        .with_height(HeightRule::Fixed(400))
        .with_on_change(Some(move |_: &Windower| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
    let mut w = Windower::new(options);

    w.set_scroll_top(100);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // Unchanged value: no notification.
    w.set_scroll_top(100);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // A batch collapses to a single notification.
    w.batch_update(|w| {
        w.set_scroll_top(200);
        w.set_dimensions(Dimensions::new(640, 480));
        w.set_len(2000);
    });
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn windower_probe_change_without_height_change_is_silent() {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let options = WindowerOptions::new(Layout::linear(50), 1000)
        .with_height(HeightRule::Fixed(400))
        .with_on_change(Some(move |_: &Windower| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
    let mut w = Windower::new(options);

    // Under a fixed height, probe churn never resolves to a new height.
    w.set_height_probe(HeightProbe {
        top_offset: 10,
        parent_height: 500,
    });
    w.set_height_probe(HeightProbe {
        top_offset: 20,
        parent_height: 600,
    });
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(w.container_height(), 400);
}

#[test]
fn windower_item_origin() {
    let options = WindowerOptions::new(Layout::grid(200, 100), 37)
        .with_height(HeightRule::Fixed(400))
        .with_initial_dimensions(Some(Dimensions::new(1000, 600)));
    let w = Windower::new(options);

    let item = w.item_origin(7).unwrap();
    assert_eq!(item.left, 400);
    assert_eq!(item.top, 100);
    assert_eq!(item.width, ItemWidth::Fixed(200));

    assert!(w.item_origin(37).is_none());
}

#[test]
fn windower_update_options_switches_layout() {
    let options = WindowerOptions::new(Layout::linear(132), 37)
        .with_height(HeightRule::Fixed(400))
        .with_initial_dimensions(Some(Dimensions::new(1000, 600)));
    let mut w = Windower::new(options);
    assert_eq!(w.window().unwrap().columns, 1);

    w.update_options(|o| o.layout = Layout::grid(200, 100));
    let window = w.window().unwrap();
    assert_eq!(window.columns, 5);
    assert_eq!(w.total_extent(), 800);
}
