pub mod fs;
pub mod ranking;
pub mod statistics;
