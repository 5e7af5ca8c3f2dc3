pub mod selection;
pub mod session;

pub use selection::Selection;
pub use session::{GenerationState, Session, SessionError, SessionSnapshot};
