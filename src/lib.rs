pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod io;
pub mod knowledgebase;
pub mod logging;
pub mod pipelines;
pub mod processing;
pub mod sharding;
