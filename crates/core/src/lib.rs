//! Pure domain logic for the Neoscope platform.
//!
//! No I/O lives here: date-range validation, approach-window
//! filtering, the asteroid data model, and the shared error taxonomy.
//! The `db`, `neows`, and `api` crates all build on these types.

pub mod approach;
pub mod asteroid;
pub mod date_range;
pub mod error;
