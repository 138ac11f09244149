//! Command implementations.

pub mod aggregate;
pub mod coverage;
pub mod points;
pub mod rank;
pub mod score;
pub mod session;

pub use self::aggregate::execute_aggregate;
pub use self::coverage::execute_coverage;
pub use self::points::{execute_points, execute_range};
pub use self::rank::execute_rank;
pub use self::score::execute_score;
pub use self::session::execute_session;
