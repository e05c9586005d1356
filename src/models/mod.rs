pub mod email;

pub use email::{OutgoingEmail, RelayRequest, RelayResponse, SUCCESS_MESSAGE};
