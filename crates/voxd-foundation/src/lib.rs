pub mod error;
pub mod pidfile;
pub mod shutdown;
pub mod state;

pub use error::*;
pub use pidfile::*;
pub use shutdown::*;
pub use state::*;
