pub mod drafts;
pub mod models;
pub mod requests;
pub mod session;

pub use drafts::*;
pub use models::*;
pub use requests::*;
pub use session::*;
