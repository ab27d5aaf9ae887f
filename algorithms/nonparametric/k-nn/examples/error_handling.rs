//! Example demonstrating error handling with the k-NN classifier.
//!
//! Every misuse of the classifier surfaces as a `KnnError` instead of a
//! panic or a silently shortened neighbor list.

use holdout_helpers::{L2Dist, Record};
use k_nn::{KnnClassifier, KnnError, NeighborPolicy};

fn main() {
    println!("k-NN Classifier Error Handling Examples");
    println!("=======================================");

    let training_data = vec![
        Record::new(1.0, 1.0, 1),
        Record::new(2.0, 2.0, 1),
        Record::new(1.0, 2.0, 1),
        Record::new(8.0, 8.0, 2),
        Record::new(9.0, 8.0, 2),
        Record::new(8.0, 9.0, 2),
    ];

    // Example 1: Handle invalid k value
    println!("\n1. Handling invalid k value (k=0):");
    match KnnClassifier::new(0, training_data.clone(), L2Dist) {
        Ok(_) => println!("   Classifier created successfully"),
        Err(e @ KnnError::InvalidK { .. }) => println!("   Caught expected error: {}", e),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Example 2: Handle empty training set
    println!("\n2. Handling empty training set:");
    let empty_data: Vec<Record<i64, f64>> = vec![];
    match KnnClassifier::new(3, empty_data, L2Dist) {
        Ok(classifier) => match classifier.predict(&Record::new(1.0, 1.0, 0)) {
            Ok(label) => println!("   Predicted label: {}", label),
            Err(e) => println!("   Caught expected error: {}", e),
        },
        Err(e) => println!("   Error creating classifier: {}", e),
    }

    // Example 3: k larger than the training set, strict and relaxed
    println!("\n3. Handling k larger than the training set (k=10, 6 records):");
    let query = Record::new(2.5, 2.5, 0);
    match KnnClassifier::new(10, training_data.clone(), L2Dist) {
        Ok(classifier) => match classifier.predict(&query) {
            Ok(label) => println!("   Predicted label: {}", label),
            Err(e) => println!("   Caught expected error: {}", e),
        },
        Err(e) => println!("   Error creating classifier: {}", e),
    }
    match KnnClassifier::new(10, training_data.clone(), L2Dist) {
        Ok(classifier) => {
            let relaxed = classifier.with_policy(NeighborPolicy::Truncate);
            match relaxed.predict(&query) {
                Ok(label) => println!("   Truncate policy predicted: {}", label),
                Err(e) => println!("   Unexpected error: {}", e),
            }
        }
        Err(e) => println!("   Error creating classifier: {}", e),
    }

    // Example 4: Demonstrate error propagation in a function
    println!("\n4. Error propagation in functions:");

    fn classify_with_error_handling(training_data: Vec<Record<i64, f64>>) -> Result<i64, KnnError> {
        let classifier = KnnClassifier::new(3, training_data, L2Dist)?;
        classifier.predict(&Record::new(7.5, 8.5, 0))
    }

    match classify_with_error_handling(training_data) {
        Ok(result) => println!("   Classification result: {}", result),
        Err(e) => println!("   Classification failed: {}", e),
    }
}
