pub mod header;
pub mod providers;
