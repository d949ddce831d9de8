//! Indexed (argsort) sorting example.
//!
//! Demonstrates the indexed adapter:
//! - Sorting floating-point keys without mutating the input
//! - The original-index mapping and the sort-process-unsort pattern
//! - Stability for duplicate keys

use bubble::prelude::*;

fn main() -> Result<(), SortError> {
    let keys = [0.3, 0.1, 0.2, 0.1];

    let sorter = Bubble::new().adapter(Indexed).build()?;
    let result = sorter.sort(&keys);

    println!("Sorted keys: {:?}", result.keys);
    println!("Index map:   {:?}", result.indices);

    // Duplicate keys keep their input order: the 0.1 at input position 1
    // sorts ahead of the 0.1 at input position 3.
    assert_eq!(result.indices[0], 1);
    assert_eq!(result.indices[1], 3);

    // Process in sorted order, then map results back to input order.
    let ranks: Vec<usize> = (0..result.keys.len()).collect();
    let ranks_in_input_order = result.unsort(&ranks)?;
    println!("Ranks:       {:?}", ranks_in_input_order);

    Ok(())
}
