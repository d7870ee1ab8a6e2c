//! Host shell components for Retouch.

mod edit_history;
mod request_status;

pub use edit_history::EditHistory;
pub use request_status::RequestStatus;
