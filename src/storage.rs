use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub const QUIZ_DATA_KEY: &str = "quiz_data";
pub const UTM_PARAMS_KEY: &str = "quiz_utms";
pub const TIMER_START_KEY: &str = "quiz_timer_start";
pub const SPOTS_LEFT_KEY: &str = "spots_left";
pub const USER_COUNT_KEY: &str = "user_count";

pub const DEFAULT_SPOTS: u32 = 50;
pub const DEFAULT_USER_COUNT: u32 = 23;

/// String-keyed persistent store. Backed by `localStorage` in the browser and
/// by an in-memory map in tests. Reads and writes never fail from the caller's
/// point of view: a throwing backing store means the value is simply absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed store. Quota errors, disabled storage and a missing
/// window all degrade to "no value".
#[derive(Clone, Default)]
pub struct LocalStore;

impl LocalStore {
    fn backing(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.backing().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = self.backing() {
            if s.set_item(key, value).is_err() {
                gloo_console::warn!("storage write failed for key", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = self.backing() {
            let _ = s.remove_item(key);
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct QuizAnswer {
    #[serde(rename = "questionId")]
    pub question_id: u32,
    pub question: String,
    pub answer: String,
}

/// Answers collected by the chat quiz. Written incrementally by the chat page,
/// read-only everywhere else. Fields keep the Spanish answer strings verbatim
/// since the personalization branches match on them.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizData {
    pub gender: String,
    pub time_separation: String,
    pub who_ended: String,
    pub relationship_duration: String,
    pub current_situation: String,
    pub ex_situation: String,
    pub commitment_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub answers: Vec<QuizAnswer>,
}

/// Binary gender selector driving the personalized copy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gender {
    Hombre,
    Mujer,
}

impl Gender {
    /// Unknown or empty values fall back to `Hombre`, matching the result
    /// page's historical default.
    pub fn from_answer(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("MUJER") {
            Gender::Mujer
        } else {
            Gender::Hombre
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Hombre => "HOMBRE",
            Gender::Mujer => "MUJER",
        }
    }
}

impl QuizData {
    pub fn gender(&self) -> Gender {
        Gender::from_answer(&self.gender)
    }
}

/// Reads the persisted quiz record. Absent or corrupted JSON yields the empty
/// default rather than an error.
pub fn quiz_data(store: &dyn KeyValueStore) -> QuizData {
    store
        .get(QUIZ_DATA_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_quiz_data(store: &dyn KeyValueStore, data: &QuizData) {
    match serde_json::to_string(data) {
        Ok(raw) => store.set(QUIZ_DATA_KEY, &raw),
        Err(_) => gloo_console::warn!("quiz data not serializable"),
    }
}

pub fn spots_left(store: &dyn KeyValueStore) -> u32 {
    store
        .get(SPOTS_LEFT_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_SPOTS)
}

pub fn set_spots_left(store: &dyn KeyValueStore, spots: u32) {
    store.set(SPOTS_LEFT_KEY, &spots.to_string());
}

pub fn user_count(store: &dyn KeyValueStore) -> u32 {
    store
        .get(USER_COUNT_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_USER_COUNT)
}

pub type SharedStore = Rc<dyn KeyValueStore>;

#[cfg(test)]
pub mod fake {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for `localStorage`.
    #[derive(Default)]
    pub struct MemoryStore {
        map: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.map.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.map.borrow_mut().remove(key);
        }
    }
}
