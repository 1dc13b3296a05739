pub mod remaining;
