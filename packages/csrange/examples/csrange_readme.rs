//! Example that demonstrates the usage shown in the package documentation.
//!
//! This shows how to use the `csrange` package for decoding, encoding and splitting range lists.

use csrange::SplitPolicy;

fn main() {
    println!("=== csrange README Example ===");

    let ports = csrange::decode("1,4-6,8").unwrap();
    assert_eq!(ports, vec![1, 4, 5, 6, 8]);

    println!("Ports: {ports:?}");
    println!("As range list: {}", csrange::encode(ports.iter().copied()));

    // Divide the work into three units, keeping consecutive ports together.
    let buckets = SplitPolicy::Contiguous
        .split_str(3, "1-39,199-201,400")
        .unwrap();

    for (number, bucket) in (1_usize..).zip(&buckets) {
        println!("Bucket {number}: {bucket}");
    }

    println!("README example completed successfully!");
}
