pub mod error;
pub mod graphs;
pub mod logging;
pub mod search;
pub mod utility;
