pub mod config;
pub mod extract;
pub mod grouping;
pub mod model;
pub mod output;
pub mod report;
pub mod scoring;
pub mod summary;
