pub mod controller;
pub mod guest;
pub mod surface;
