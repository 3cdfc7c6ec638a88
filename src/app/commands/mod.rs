pub mod index;
pub mod list;
pub mod sync;
