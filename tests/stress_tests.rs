//! Load tests that push the heap through large operation patterns.
//!
//! These catch consolidation and splicing edge cases that only appear once
//! the root list cycles through many shapes.

use binomial_heap::BinomialHeap;

#[test]
fn massive_insert_then_drain() {
    let mut heap = BinomialHeap::new();

    // Insert in a scrambled order so the tree shapes vary.
    for i in 0..1000 {
        heap.insert((i * 7919) % 1000);
    }
    assert_eq!(heap.len(), 1000);

    // The multipliers are coprime, so the drain is exactly 0..1000.
    for i in 0..1000 {
        assert_eq!(heap.extract_min(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn alternating_insert_and_extract() {
    let mut heap = BinomialHeap::new();

    for i in 0..200 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        // Always removes the smallest still present, which is i after
        // i values have already been taken out.
        assert_eq!(heap.extract_min(), Some(i));
    }
    assert_eq!(heap.len(), 200);

    for i in 200..400 {
        assert_eq!(heap.extract_min(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn repeated_unions_accumulate() {
    let mut heap = BinomialHeap::new();

    for chunk in 0..50 {
        let mut donor = BinomialHeap::new();
        for i in 0..20 {
            donor.insert(chunk * 20 + i);
        }
        heap.union(donor);
        assert_eq!(heap.len(), ((chunk + 1) * 20) as usize);
        assert_eq!(heap.find_min(), Some(&0));
    }

    for i in 0..1000 {
        assert_eq!(heap.extract_min(), Some(i));
    }
}

#[test]
fn many_decrease_keys() {
    let mut heap = BinomialHeap::new();

    for i in 0..500 {
        heap.insert(10_000 + i);
    }

    // Pull every key down below the original range, one at a time.
    for i in 0..500 {
        heap.decrease_key(&(10_000 + i), i).unwrap();
    }

    for i in 0..500 {
        assert_eq!(heap.extract_min(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn many_deletes_interleaved_with_extracts() {
    let mut heap = BinomialHeap::new();
    for i in 0..512 {
        heap.insert(i);
    }

    // Delete the odd keys, extract the even ones.
    for i in 0..256 {
        assert_eq!(heap.delete(&(i * 2 + 1)), Ok(i * 2 + 1));
        assert_eq!(heap.extract_min(), Some(i * 2));
    }
    assert!(heap.is_empty());
}

#[test]
fn duplicate_heavy_workload() {
    let mut heap = BinomialHeap::new();

    for _ in 0..100 {
        for key in [5, 1, 5, 9, 1] {
            heap.insert(key);
        }
    }
    assert_eq!(heap.len(), 500);

    // Drain order must be all 1s, then all 5s, then all 9s.
    let mut counts = [0usize; 3];
    let mut last = i32::MIN;
    while let Some(key) = heap.extract_min() {
        assert!(key >= last);
        last = key;
        match key {
            1 => counts[0] += 1,
            5 => counts[1] += 1,
            9 => counts[2] += 1,
            other => panic!("unexpected key {other}"),
        }
    }
    assert_eq!(counts, [200, 200, 100]);
}

#[test]
fn drain_and_refill_cycles() {
    let mut heap = BinomialHeap::new();

    for cycle in 0..20 {
        for i in 0..64 {
            heap.insert(cycle * 64 + i);
        }
        for i in 0..64 {
            assert_eq!(heap.extract_min(), Some(cycle * 64 + i));
        }
        assert!(heap.is_empty());
        assert_eq!(heap.extract_min(), None);
    }
}
