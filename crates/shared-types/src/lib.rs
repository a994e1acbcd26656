pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod policy;
pub mod requests;
pub mod school;

pub use config::*;
pub use error::*;
pub use models::*;
pub use requests::*;
pub use school::*;

// policy and filters are NOT glob re-exported: their free functions
// (`navigation`, `columns`, `search` …) read best behind the module path,
// e.g. `policy::can_view(role, section)`.
