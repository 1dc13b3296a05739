pub mod animator;
pub mod spring;
pub mod table;
pub mod target;
