pub mod dash_dash;
pub mod explode;
pub mod tokenize;

pub use dash_dash::DashDashPhase;
pub use explode::ExplodePhase;
pub use tokenize::{Token, TokenizePhase};
