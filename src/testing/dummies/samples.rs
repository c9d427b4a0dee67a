use crate::core::{Dataset, Sample};

/// Four hand-built samples with every value inside the default histogram
/// ranges.
pub fn four_samples() -> Dataset {
    Dataset::new(vec![
        Sample::new(10.0, 20.0, 30.0, 12.0, 17.0),
        Sample::new(40.0, -10.0, 30.0, 35.5, -2.0),
        Sample::new(75.0, 5.0, 80.0, 70.0, 9.5),
        Sample::new(2.0, 60.0, 62.0, -6.0, 64.0),
    ])
}
