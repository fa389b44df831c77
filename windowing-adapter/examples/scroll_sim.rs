// Example: event-driven host loop with coalescing and slot reuse.
use windowing::{Dimensions, HeightProbe, HeightRule, Layout, WindowerOptions};
use windowing_adapter::{Controller, HostEvent, SlotChange, Slots};

fn main() {
    let options =
        WindowerOptions::new(Layout::linear(132), 10_000).with_height(HeightRule::FillParent);
    let mut controller = Controller::new(options);
    let mut slots = Slots::new();

    // Each frame delivers a burst of events; only the latest value per input
    // survives to the recompute.
    let frames: &[&[HostEvent]] = &[
        &[
            HostEvent::Resized(Dimensions::new(800, 600)),
            HostEvent::Measured(HeightProbe {
                top_offset: 0,
                parent_height: 600,
            }),
        ],
        &[
            HostEvent::Scrolled(1_000),
            HostEvent::Scrolled(2_500),
            HostEvent::Scrolled(4_000),
        ],
        &[HostEvent::Scrolled(4_100)],
    ];

    for (frame, events) in frames.iter().enumerate() {
        for event in events.iter() {
            controller.on_event(*event);
        }
        if !controller.flush() {
            println!("frame {frame}: window unchanged, nothing to render");
            continue;
        }

        let window = controller.window();
        let mut mounted = 0;
        let mut kept = 0;
        let mut unmounted = 0;
        slots.sync(window.as_ref(), |change| match change {
            SlotChange::Mount { .. } => mounted += 1,
            SlotChange::Keep { .. } => kept += 1,
            SlotChange::Unmount { .. } => unmounted += 1,
        });
        println!(
            "frame {frame}: window={:?} mounted={mounted} kept={kept} unmounted={unmounted}",
            window.map(|w| (w.start_index, w.end_index))
        );
    }
}
