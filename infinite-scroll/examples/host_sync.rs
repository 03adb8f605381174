// Example: mirroring slots onto host widgets from the refresh callback.
use std::sync::{Arc, Mutex};

use infinite_scroll::{Recycler, RecyclerOptions, Slot};

#[derive(Debug, Default)]
struct Widget {
    visible: bool,
    y: f64,
    text: String,
}

fn main() {
    // A host would keep real widgets here; this one only records their state.
    let widgets: Arc<Mutex<Vec<Widget>>> = Arc::default();

    let opts = RecyclerOptions::new(3, 100.0)
        .with_space_height(10.0)
        .with_label(|i| format!("Row #{i}"))
        .with_on_refresh(Some({
            let widgets = Arc::clone(&widgets);
            move |r: &Recycler| {
                let Ok(mut widgets) = widgets.lock() else {
                    return;
                };
                widgets.resize_with(r.pool_size(), Widget::default);
                for (w, slot) in widgets.iter_mut().zip(r.slots()) {
                    apply(w, slot);
                }
            }
        }));

    let mut r = Recycler::new(opts);
    r.initialize(300.0);

    if let Ok(widgets) = widgets.lock() {
        for (i, w) in widgets.iter().enumerate() {
            println!("widget {i}: {w:?}");
        }
    }
}

fn apply(w: &mut Widget, slot: &Slot) {
    w.visible = slot.active;
    if slot.active {
        // Host y points up, rows stack downwards.
        w.y = -slot.position;
        w.text.clone_from(&slot.label);
    }
}
