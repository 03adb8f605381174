// Example: routing host notifications through the dispatch table.
use infinite_scroll::RecyclerOptions;
use infinite_scroll_adapter::{Controller, ListEvent, MotionOptions, Step};

fn main() {
    let mut c = Controller::new(
        RecyclerOptions::new(100, 100.0).with_space_height(10.0),
        MotionOptions::default(),
    );
    c.initialize(500.0);

    // What a host might deliver over a few seconds: a drag, a button press, a search.
    let script = [
        ListEvent::DragBegin,
        ListEvent::ScrollChanged(240.0),
        ListEvent::ScrollChanged(585.0),
        ListEvent::DragEnd,
        ListEvent::Step(Step::Next),
        ListEvent::Jump("abc".to_owned()),
        ListEvent::Jump("42".to_owned()),
    ];

    let dt = 1.0 / 60.0;
    for event in script {
        let label = format!("{event:?}");
        match c.dispatch(event) {
            Some(target) => println!("{label}: moving to {target}"),
            None => println!("{label}: offset={}", c.scroll_offset()),
        }
        // Let each motion finish before the next event.
        while let Some(off) = c.tick(dt) {
            // A real host would write `off` into its scroll widget here and receive a
            // ScrollChanged notification back.
            c.on_scroll_changed(off);
        }
        let first = c.recycler().slots().iter().find(|s| s.active);
        println!("  settled at {} first={:?}", c.scroll_offset(), first.map(|s| &s.label));
    }
}
