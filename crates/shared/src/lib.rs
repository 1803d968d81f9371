pub mod domain;
pub mod manifest;
pub mod units;
