// Example: windowing a large vertical list.
use windowing::{Dimensions, HeightRule, Layout, Windower, WindowerOptions};

fn main() {
    let options = WindowerOptions::new(Layout::linear(132), 10_000)
        .with_height(HeightRule::Fixed(400))
        .with_initial_dimensions(Some(Dimensions::new(800, 600)));
    let mut w = Windower::new(options);

    println!("total_extent={}", w.total_extent());

    for scroll_top in [0, 5_000, 660_000] {
        w.apply_scroll_event(scroll_top);
        let window = w.window().expect("non-empty list");
        println!(
            "scroll_top={scroll_top}: rendering {} items ({}..={})",
            window.len(),
            window.start_index,
            window.end_index
        );
    }

    let mut items = Vec::new();
    w.collect_items(&mut items);
    println!("first visible item: {:?}", items.first());
}
