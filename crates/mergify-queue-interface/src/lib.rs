//! Work queue interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::QueueError;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockQueueService;
pub use interface::QueueService;
