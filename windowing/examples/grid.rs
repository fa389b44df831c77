// Example: a wrapping grid that re-flows with the viewport width.
use windowing::{Dimensions, HeightRule, Layout, Windower, WindowerOptions};

fn main() {
    let options = WindowerOptions::new(Layout::grid(400, 132), 5_000)
        .with_height(HeightRule::Fixed(600))
        .with_initial_dimensions(Some(Dimensions::new(1280, 800)));
    let mut w = Windower::new(options);

    for width in [1280, 900, 350] {
        w.set_dimensions(Dimensions::new(width, 800));
        let window = w.window().expect("non-empty grid");
        println!(
            "viewport_width={width}: columns={} cell={:?}x{} extent={}",
            window.columns,
            window.item_width,
            window.item_height,
            w.total_extent()
        );
        w.for_each_item(|item| {
            if item.index < window.start_index + window.columns {
                println!("  item {} at ({}, {})", item.index, item.left, item.top);
            }
        });
    }
}
