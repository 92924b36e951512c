//! @ai:module:intent Monotonic timing of a single primitive call
//! @ai:module:layer infrastructure
//! @ai:module:public_api measure
//! @ai:module:stateless true

use std::hint::black_box;
use std::time::Instant;

/// @ai:intent Run the operation once and return its output with the elapsed nanoseconds
/// @ai:post elapsed saturates at u64::MAX
/// @ai:effects time
pub fn measure<T>(operation: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let output = black_box(operation());
    let elapsed = start.elapsed();

    (output, u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
}
