//! Background fetch worker plumbing.
//!
//! The UI thread never blocks on the network: it sends [`FetchCommand`]s to a
//! worker thread and drains [`FetchResult`]s between redraws. Every search
//! carries a monotonically increasing generation id; a result is only applied
//! when its id still matches the latest issued generation, so a slow response
//! to an old keystroke can never overwrite fresher results.

mod commands;
mod worker;

pub use commands::{FetchCommand, FetchResult};
pub use worker::spawn;
