pub mod store;
pub mod value;

pub use store::{default_token, TokenChange, TokenStore, DEFAULT_TOKENS};
pub use value::TokenValue;
