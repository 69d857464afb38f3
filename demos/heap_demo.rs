//! Walkthrough of the binomial heap operations.
//!
//! ```bash
//! cargo run --example heap_demo
//! ```

use binomial_heap::BinomialHeap;

fn main() {
    let mut heap = BinomialHeap::new();

    for key in [10, 20, 5, 30, 15, 10] {
        heap.insert(key);
    }
    println!("heap after insertions: {heap:?}");
    println!("minimum element: {:?}", heap.find_min());

    println!("extracting minimum: {:?}", heap.extract_min());
    println!("heap after extract: {heap:?}");

    println!("extracting minimum: {:?}", heap.extract_min());
    println!("heap after extract: {heap:?}");

    println!("decreasing key 30 to 2");
    heap.decrease_key(&30, 2).unwrap();
    println!("heap after decrease: {heap:?}");

    println!("deleting key 20");
    heap.delete(&20).unwrap();
    println!("heap after delete: {heap:?}");

    for key in [8, 25, 7] {
        heap.insert(key);
    }
    println!("heap after more insertions: {heap:?}");

    print!("draining:");
    while let Some(key) = heap.extract_min() {
        print!(" {key}");
    }
    println!();
}
