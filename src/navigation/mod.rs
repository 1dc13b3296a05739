pub mod auto_advance;
pub mod navigator;
