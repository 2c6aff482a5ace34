#![allow(dead_code)]

pub mod entities;
pub mod repositories;

pub use entities::{appointment, product, testimonial};
pub use repositories::{FailingObserver, FlakyStore, RecordingObserver};

/// Surface library logs when a test is run with `RUST_LOG` set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
