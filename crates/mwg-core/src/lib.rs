pub mod config;
pub mod logging;

pub mod fetch;
pub mod filter;
pub mod outdir;
pub mod pipeline;
pub mod profile;
pub mod relay;
