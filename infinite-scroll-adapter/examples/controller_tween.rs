use infinite_scroll::RecyclerOptions;
use infinite_scroll_adapter::{Controller, Easing, MotionOptions};

fn main() {
    // Example: a controller driving tween scrolling without holding any UI objects.
    //
    // An adapter would:
    // - start a motion (e.g. in response to a "go to index" command)
    // - call tick(dt) once per frame
    // - apply the returned offset to the real scroll container (if any)
    // - render using the recycler's slots
    let mut c = Controller::new(
        RecyclerOptions::new(10_000, 100.0).with_space_height(10.0),
        MotionOptions::default().with_easing(Easing::SmoothStep),
    );
    c.initialize(600.0);

    let target = c.jump_to_index(2_000, true);
    println!("target_offset={target}");

    let dt = 1.0 / 60.0;
    let mut frame = 0u32;
    while let Some(off) = c.tick(dt) {
        frame += 1;
        if frame % 4 == 0 {
            println!(
                "frame={frame} off={off:.1} active={:?}",
                c.recycler().active_range()
            );
        }
    }

    println!(
        "done: off={} active={:?}",
        c.scroll_offset(),
        c.recycler().active_range()
    );
}
