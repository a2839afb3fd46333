//! Small browser side effects. Everything here is cosmetic or best-effort:
//! a missing window, an unsupported API or an absent element never bubbles up
//! to the funnel logic.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

const VSL_PLAYER_ID: &str = "vid-694bc5dff757812677c3b148";
const VSL_PLAYER_SCRIPT: &str = "https://scripts.converteai.net/d1055f81-b10e-4e76-a928-5438e4f7acf6/players/694bc5dff757812677c3b148/v4/player.js";

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn current_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn current_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Rewrites the visible URL's query string in place, without navigation.
pub fn replace_visible_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        let url = format!("{path}?{query}");
        if history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .is_err()
        {
            gloo_console::warn!("failed to restore query string");
        }
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            gloo_console::warn!("popup blocked for outbound link");
        }
    }
}

/// Smooth-scrolls a revealed section into view. Skipped silently when the
/// section has not mounted yet.
pub fn scroll_into_view(target: &NodeRef) {
    let Some(element) = target.cast::<web_sys::Element>() else {
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    options.block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Markup for the hosted video player, filling its absolutely-positioned
/// placeholder.
fn vsl_player_markup() -> String {
    format!(
        r#"<vturb-smartplayer id="{VSL_PLAYER_ID}" style="display: block; margin: 0 auto; width: 100%; height: 100%; position: absolute; top: 0; left: 0;"></vturb-smartplayer>"#
    )
}

/// Injects the hosted video player into the placeholder and loads its script
/// once per document. Skipped silently when the placeholder has not mounted.
pub fn mount_vsl_player(target: &NodeRef) {
    let Some(placeholder) = target.cast::<web_sys::Element>() else {
        return;
    };
    placeholder.set_inner_html(&vsl_player_markup());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let already_loaded = document
        .query_selector("script[src*='player.js']")
        .ok()
        .flatten()
        .is_some();
    if already_loaded {
        return;
    }
    let Ok(script) = document.create_element("script") else {
        return;
    };
    if script.set_attribute("src", VSL_PLAYER_SCRIPT).is_err()
        || script.set_attribute("async", "").is_err()
    {
        return;
    }
    if let Some(head) = document.head() {
        if head.append_child(&script).is_err() {
            gloo_console::warn!("video player script not attached");
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Short sine blip marking a reveal. WebAudio may be unavailable or the
/// context suspended; both are ignored.
pub fn play_key_sound() {
    let _ = try_play_key_sound();
}

fn try_play_key_sound() -> Result<(), JsValue> {
    let ctx = web_sys::AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    oscillator.frequency().set_value(800.0);
    oscillator.set_type(web_sys::OscillatorType::Sine);
    let now = ctx.current_time();
    gain.gain().set_value_at_time(0.1, now)?;
    gain.gain().exponential_ramp_to_value_at_time(0.01, now + 0.1)?;
    oscillator.start()?;
    oscillator.stop_with_when(now + 0.1)?;
    Ok(())
}
