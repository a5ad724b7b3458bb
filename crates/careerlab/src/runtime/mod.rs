//! Seams for everything the product fakes: time, randomness, and the
//! timer-driven task machine standing in for real asynchronous work.

pub mod clock;
pub mod random;
pub mod task;

pub use clock::{Clock, ManualClock, SystemClock};
pub use random::{FixedRandom, RandomSource, SeededRandom};
pub use task::{TaskEvent, TaskShape, TaskSimulator, TaskState};
