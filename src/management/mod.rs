mod client;
pub mod interface;
pub mod result;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::*;
pub use result::{Error, Result};
pub use transport::Transport;
