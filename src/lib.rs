pub mod error;
pub mod feed;
pub mod graphs;
pub mod islands;
pub mod queue;
pub mod relay;
pub mod report;
pub mod search;
pub mod search_data;
pub mod utility;

pub use error::{Error, Result};
