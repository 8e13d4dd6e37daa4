// Crate root library declaration and module exports.
pub mod model;
pub mod projection;
pub mod state;
