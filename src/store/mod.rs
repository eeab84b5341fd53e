mod auth;
mod chat;

pub use auth::AuthStore;
pub use chat::{
    ChatStore, DrawerState, FALLBACK_CLEAR_HISTORY, FALLBACK_FETCH_HISTORY, FALLBACK_SEND_MESSAGE,
};
