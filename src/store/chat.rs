use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api::ChatApi;
use crate::models::{Message, Role};

pub const FALLBACK_FETCH_HISTORY: &str = "無法載入歷史對話";
pub const FALLBACK_SEND_MESSAGE: &str = "AI 回覆失敗，請稍後再試";
pub const FALLBACK_CLEAR_HISTORY: &str = "清空歷史紀錄失敗";

/// Observable drawer state, rendered by the view layer.
#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    pub is_open: bool,
    pub current_image_url: String,
    pub messages: Vec<Message>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Chat drawer state and actions. Each action wraps one `ChatApi` call and
/// mutates the state on completion.
///
/// The epoch counter scopes in-flight work to one drawer lifetime:
/// `open_drawer` and `close_drawer` advance it, and a completion whose
/// snapshot no longer matches is discarded instead of mutating state that
/// belongs to a closed (or reopened) drawer. The lock is never held across
/// an await.
pub struct ChatStore {
    api: Arc<dyn ChatApi>,
    state: Mutex<DrawerState>,
    epoch: AtomicU64,
}

impl ChatStore {
    pub fn new(api: Arc<dyn ChatApi>) -> Self {
        ChatStore {
            api,
            state: Mutex::new(DrawerState::default()),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> DrawerState {
        self.state.lock().clone()
    }

    fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// True if the drawer lifetime the operation started in is still the
    /// active one.
    fn still_current(&self, epoch: u64) -> bool {
        self.current_epoch() == epoch
    }

    /// Open the drawer for an image and load its history. Resolves once
    /// the history fetch has settled.
    pub async fn open_drawer(&self, image_url: &str) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        {
            let mut state = self.state.lock();
            state.is_open = true;
            state.current_image_url = image_url.to_string();
        }
        self.fetch_history(image_url).await;
    }

    /// Close the drawer and reset its state. In-flight requests are not
    /// interrupted, but their results are discarded on arrival.
    pub fn close_drawer(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *self.state.lock() = DrawerState::default();
    }

    pub async fn fetch_history(&self, image_url: &str) {
        let epoch = self.current_epoch();
        {
            let mut state = self.state.lock();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.api.get_history(image_url).await;

        let mut state = self.state.lock();
        if !self.still_current(epoch) {
            return;
        }
        match result {
            Ok(messages) => {
                // Replayed history never animates.
                state.messages = messages
                    .into_iter()
                    .map(|mut message| {
                        message.is_new = false;
                        message
                    })
                    .collect();
            }
            Err(err) => {
                state.error = Some(err.user_message(FALLBACK_FETCH_HISTORY));
            }
        }
        state.is_loading = false;
    }

    /// Ask a question about the current image. The user's message is
    /// appended optimistically before the request; a failed send rolls it
    /// back and surfaces the error instead.
    ///
    /// Skipped without effect when the prompt is blank, no image is
    /// active, or another drawer operation is still in flight.
    pub async fn send_message(&self, prompt: &str) {
        let (image_url, epoch) = {
            let mut state = self.state.lock();
            if prompt.trim().is_empty() || state.current_image_url.is_empty() {
                return;
            }
            if state.is_loading {
                return;
            }
            state.messages.push(Message::user(prompt));
            state.is_loading = true;
            state.error = None;
            (state.current_image_url.clone(), self.current_epoch())
        };

        let result = self.api.ask_question(&image_url, prompt).await;

        let mut state = self.state.lock();
        if !self.still_current(epoch) {
            return;
        }
        match result {
            Ok(reply) => {
                // Marked new so the view runs its one-shot typing effect.
                state.messages.push(Message::model(reply, true));
            }
            Err(err) => {
                let is_optimistic = state
                    .messages
                    .last()
                    .map_or(false, |m| m.role == Role::User && m.content == prompt);
                if is_optimistic {
                    state.messages.pop();
                }
                state.error = Some(err.user_message(FALLBACK_SEND_MESSAGE));
            }
        }
        state.is_loading = false;
    }

    /// Erase the conversation for the current image, locally and on the
    /// backend. Skipped when no image is active or an operation is in
    /// flight.
    pub async fn clear_current_history(&self) {
        let (image_url, epoch) = {
            let mut state = self.state.lock();
            if state.current_image_url.is_empty() || state.is_loading {
                return;
            }
            state.is_loading = true;
            (state.current_image_url.clone(), self.current_epoch())
        };

        let result = self.api.clear_history(&image_url).await;

        let mut state = self.state.lock();
        if !self.still_current(epoch) {
            return;
        }
        match result {
            Ok(()) => state.messages.clear(),
            Err(err) => {
                state.error = Some(err.user_message(FALLBACK_CLEAR_HISTORY));
            }
        }
        state.is_loading = false;
    }
}
