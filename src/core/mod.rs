//! Core edit-distance engine
//!
//! Pure functions over string pairs: the prefix distance table, the canonical
//! transform sequence reconstructed from it, and the letter-code boundary.
//! Nothing here performs I/O or holds shared state.

mod op;
mod table;
mod transform;

pub use op::{Transform, TransformError, format_sequence, parse_sequence};
pub use table::DistanceTable;
pub use transform::{
    Step, distance, reconstruction_steps, transform_sequence, transform_sequence_with_table,
};
