// Example: a pool of slots walking over a large dataset.
use infinite_scroll::{Recycler, RecyclerOptions};

fn main() {
    let mut r = Recycler::new(RecyclerOptions::new(1_000_000, 100.0).with_space_height(10.0));
    r.initialize(600.0);

    println!("pool_size={}", r.pool_size());
    println!("content_extent={}", r.content_extent());

    for offset in [0.0, 5_000.0, 123_456.0, r.max_scroll_offset()] {
        r.refresh(offset);
        println!("offset={offset} active={:?}", r.active_range());
        r.for_each_active_slot(|i, slot| {
            println!("  slot {i}: y={} {:?}", slot.position, slot.label);
        });
    }
}
