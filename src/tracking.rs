use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

pub const VIDEO_NAME: &str = "VSL Plan Personalizado";

const LANDING_PAGE: &str = "landing";
const CHAT_PAGE: &str = "chat";
const RESULT_PAGE: &str = "resultado";

/// One well-formed record for the tag-management layer. The `event` field is
/// the dataLayer event name; everything else rides along as parameters.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackingEvent {
    PageView {
        page_title: &'static str,
        page_location: String,
        page_path: &'static str,
    },
    CtaClick {
        button_name: &'static str,
        button_location: &'static str,
        page: &'static str,
    },
    ChatStarted {
        page: &'static str,
    },
    QuestionAnswered {
        question_id: u32,
        question_text: String,
        answer: String,
        page: &'static str,
    },
    ChatCompleted {
        page: &'static str,
    },
    RevelationViewed {
        revelation_name: &'static str,
        phase_number: u8,
        page: &'static str,
    },
    VideoStarted {
        video_name: &'static str,
        page: &'static str,
    },
    VideoButtonUnlocked {
        unlock_time_seconds: u32,
        video_name: &'static str,
        page: &'static str,
    },
    PhaseProgressionClicked {
        phase_from: u8,
        phase_to: u8,
        button_name: &'static str,
        page: &'static str,
    },
    OfferRevealed {
        page: &'static str,
    },
    CtaBuyClick {
        button_name: &'static str,
        button_location: &'static str,
        value: u32,
        page: &'static str,
    },
    SpotsAlert {
        spots_remaining: u32,
        page: &'static str,
    },
    /// Defined for the tag manager's conversion setup. Nothing in this app
    /// fires it; purchase confirmation happens outside the funnel.
    Purchase {
        transaction_id: String,
        value: f64,
        currency: &'static str,
        items: Vec<PurchaseItem>,
    },
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct PurchaseItem {
    pub item_name: String,
    pub item_category: &'static str,
    pub price: f64,
    pub quantity: u32,
}

impl TrackingEvent {
    pub fn landing_page_view(page_location: String) -> Self {
        TrackingEvent::PageView {
            page_title: "Landing Page",
            page_location,
            page_path: "/",
        }
    }

    pub fn chat_page_view(page_location: String) -> Self {
        TrackingEvent::PageView {
            page_title: "Chat Analysis",
            page_location,
            page_path: "/chat",
        }
    }

    pub fn result_page_view(page_location: String) -> Self {
        TrackingEvent::PageView {
            page_title: "Result Page",
            page_location,
            page_path: "/resultado",
        }
    }

    pub fn landing_cta_click() -> Self {
        TrackingEvent::CtaClick {
            button_name: "Iniciar Análisis",
            button_location: "landing_primary",
            page: LANDING_PAGE,
        }
    }

    pub fn chat_started() -> Self {
        TrackingEvent::ChatStarted { page: CHAT_PAGE }
    }

    pub fn question_answered(question_id: u32, question_text: String, answer: String) -> Self {
        TrackingEvent::QuestionAnswered {
            question_id,
            question_text,
            answer,
            page: CHAT_PAGE,
        }
    }

    pub fn chat_completed() -> Self {
        TrackingEvent::ChatCompleted { page: CHAT_PAGE }
    }

    pub fn chat_cta_click() -> Self {
        TrackingEvent::CtaClick {
            button_name: "Ver Mi Plan Personalizado",
            button_location: "chat_complete",
            page: CHAT_PAGE,
        }
    }

    pub fn revelation_viewed(revelation_name: &'static str, phase_number: u8) -> Self {
        TrackingEvent::RevelationViewed {
            revelation_name,
            phase_number,
            page: RESULT_PAGE,
        }
    }

    pub fn video_started() -> Self {
        TrackingEvent::VideoStarted {
            video_name: VIDEO_NAME,
            page: RESULT_PAGE,
        }
    }

    pub fn video_button_unlocked(unlock_time_seconds: u32) -> Self {
        TrackingEvent::VideoButtonUnlocked {
            unlock_time_seconds,
            video_name: VIDEO_NAME,
            page: RESULT_PAGE,
        }
    }

    pub fn phase_progression_clicked(
        phase_from: u8,
        phase_to: u8,
        button_name: &'static str,
    ) -> Self {
        TrackingEvent::PhaseProgressionClicked {
            phase_from,
            phase_to,
            button_name,
            page: RESULT_PAGE,
        }
    }

    pub fn offer_revealed() -> Self {
        TrackingEvent::OfferRevealed { page: RESULT_PAGE }
    }

    pub fn cta_buy_click(button_location: &'static str) -> Self {
        TrackingEvent::CtaBuyClick {
            button_name: "Comprar Ahora",
            button_location,
            value: 1,
            page: RESULT_PAGE,
        }
    }

    pub fn spots_alert(spots_remaining: u32) -> Self {
        TrackingEvent::SpotsAlert {
            spots_remaining,
            page: RESULT_PAGE,
        }
    }
}

/// Push-style analytics sink. Delivery is fire-and-forget; a sink must never
/// block or fail the caller.
pub trait EventSink {
    fn push(&self, event: TrackingEvent);
}

pub type SharedSink = Rc<dyn EventSink>;

/// Production sink: pushes onto `window.dataLayer`, creating the array first
/// if the tag-manager snippet has not run yet.
#[derive(Clone, Default)]
pub struct DataLayerSink;

impl DataLayerSink {
    fn layer(&self) -> Option<js_sys::Array> {
        let window = web_sys::window()?;
        let key = JsValue::from_str("dataLayer");
        let existing = js_sys::Reflect::get(&window, &key).ok()?;
        if js_sys::Array::is_array(&existing) {
            return Some(existing.unchecked_into());
        }
        let created = js_sys::Array::new();
        js_sys::Reflect::set(&window, &key, &created).ok()?;
        Some(created)
    }
}

impl EventSink for DataLayerSink {
    fn push(&self, event: TrackingEvent) {
        let Some(layer) = self.layer() else {
            gloo_console::warn!("dataLayer unavailable, event dropped");
            return;
        };
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match event.serialize(&serializer) {
            Ok(value) => {
                layer.push(&value);
            }
            Err(_) => gloo_console::warn!("tracking event not serializable"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_names() {
        let event = TrackingEvent::spots_alert(20);
        let value = serde_json::to_value(&event).expect("serializable");
        assert_eq!(value["event"], "spots_alert");
        assert_eq!(value["spots_remaining"], 20);
        assert_eq!(value["page"], "resultado");
    }

    #[test]
    fn progression_event_carries_from_to_and_button() {
        let event = TrackingEvent::phase_progression_clicked(1, 2, "Desbloquear El Vídeo Secreto");
        let value = serde_json::to_value(&event).expect("serializable");
        assert_eq!(value["event"], "phase_progression_clicked");
        assert_eq!(value["phase_from"], 1);
        assert_eq!(value["phase_to"], 2);
        assert_eq!(value["button_name"], "Desbloquear El Vídeo Secreto");
    }

    #[test]
    fn purchase_event_shape_is_preserved() {
        let event = TrackingEvent::Purchase {
            transaction_id: "TXN-123".to_string(),
            value: 9.9,
            currency: "USD",
            items: vec![PurchaseItem {
                item_name: "Plan de Reconquista 21 Días".to_string(),
                item_category: "Digital Product",
                price: 9.9,
                quantity: 1,
            }],
        };
        let value = serde_json::to_value(&event).expect("serializable");
        assert_eq!(value["event"], "purchase");
        assert_eq!(value["items"][0]["item_category"], "Digital Product");
    }
}
