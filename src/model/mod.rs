//! Pure domain records and the `AppState` root container.
//! No I/O, no CLI, no storage. Only data types and lookup primitives.

pub mod budget;
pub mod goal;
pub mod investment;
pub mod state;
pub mod transaction;
pub mod user;

pub use budget::*;
pub use goal::*;
pub use investment::*;
pub use state::*;
pub use transaction::*;
pub use user::*;
