//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept the pool as the first argument.

pub mod favourite_repo;

pub use favourite_repo::FavouriteRepo;
