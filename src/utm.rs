use crate::storage::{KeyValueStore, UTM_PARAMS_KEY};
use std::collections::BTreeMap;

/// Campaign parameters captured on any entry point.
pub const CAMPAIGN_KEYS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
    "fbclid",
    "gclid",
];

/// The landing page additionally captures the TikTok click id.
pub const LANDING_KEYS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
    "fbclid",
    "gclid",
    "ttclid",
];

/// Whitelist for an entry pathname. The landing route is the only link the
/// ad networks decorate with the TikTok click id. Capture happens exactly
/// once per app load, at the root; a second capture from the same query
/// would overwrite the record with the narrower key set.
pub fn entry_whitelist(pathname: &str) -> &'static [&'static str] {
    if pathname == "/" {
        LANDING_KEYS
    } else {
        CAMPAIGN_KEYS
    }
}

/// Decodes `a=b&c=d` pairs. Tolerates a leading `?`, empty segments and
/// values containing `=`. Percent-decoding failures keep the raw text.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=')?;
            if key.is_empty() {
                return None;
            }
            let decode = |raw: &str| {
                urlencoding::decode(raw)
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| raw.to_string())
            };
            Some((decode(key), decode(value)))
        })
        .collect()
}

/// Captures whitelisted params from a query string. When at least one is
/// present the full set overwrites any previous capture (last write wins);
/// when none are present the prior capture is left untouched.
pub fn capture_from_query(store: &dyn KeyValueStore, query: &str, whitelist: &[&str]) {
    let mut captured = BTreeMap::new();
    for (key, value) in parse_query(query) {
        if whitelist.contains(&key.as_str()) && !value.is_empty() {
            captured.insert(key, value);
        }
    }
    if captured.is_empty() {
        return;
    }
    match serde_json::to_string(&captured) {
        Ok(raw) => store.set(UTM_PARAMS_KEY, &raw),
        Err(_) => gloo_console::warn!("utm capture not serializable"),
    }
}

/// The stored capture. Corrupted JSON reads as "nothing captured".
pub fn stored(store: &dyn KeyValueStore) -> BTreeMap<String, String> {
    store
        .get(UTM_PARAMS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Query string to restore into the visible URL when the current URL carries
/// none, so URL-inspecting analytics keep seeing the campaign params.
/// `None` when nothing was ever captured.
pub fn visible_query(store: &dyn KeyValueStore) -> Option<String> {
    let params = stored(store);
    if params.is_empty() {
        return None;
    }
    Some(encode_pairs(&params))
}

fn encode_pairs(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the outbound checkout URL with the three timestamp-derived click
/// identifiers the payment processor expects. Always appended, whether or not
/// any UTMs exist; campaign params are layered on separately by the caller
/// via [`append_params`].
pub fn checkout_url(base: &str, now_ms: u64) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{base}{separator}xcod={}&sck={}&bid={}",
        now_ms,
        now_ms + 1000,
        now_ms + 2000
    )
}

/// Appends captured params to an already well-formed URL. A no-op for an
/// empty capture.
pub fn append_params(url: &str, params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{}", encode_pairs(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fake::MemoryStore;

    #[test]
    fn capture_keeps_only_whitelisted_keys() {
        let store = MemoryStore::new();
        capture_from_query(
            &store,
            "?utm_source=fb&utm_campaign=x&rogue=1&page=2",
            CAMPAIGN_KEYS,
        );
        let params = stored(&store);
        assert_eq!(params.len(), 2);
        assert_eq!(params["utm_source"], "fb");
        assert_eq!(params["utm_campaign"], "x");
    }

    #[test]
    fn empty_query_leaves_prior_capture_untouched() {
        let store = MemoryStore::new();
        capture_from_query(&store, "?utm_source=fb", CAMPAIGN_KEYS);
        capture_from_query(&store, "", CAMPAIGN_KEYS);
        capture_from_query(&store, "?page=2", CAMPAIGN_KEYS);
        assert_eq!(stored(&store)["utm_source"], "fb");
    }

    #[test]
    fn recapture_overwrites_wholesale() {
        let store = MemoryStore::new();
        capture_from_query(&store, "?utm_source=fb&utm_term=old", CAMPAIGN_KEYS);
        capture_from_query(&store, "?utm_source=ig", CAMPAIGN_KEYS);
        let params = stored(&store);
        assert_eq!(params["utm_source"], "ig");
        assert!(!params.contains_key("utm_term"), "stale key survived recapture");
    }

    #[test]
    fn ttclid_captured_only_with_landing_whitelist() {
        let store = MemoryStore::new();
        capture_from_query(&store, "?ttclid=tok", CAMPAIGN_KEYS);
        assert!(stored(&store).is_empty());
        capture_from_query(&store, "?ttclid=tok", LANDING_KEYS);
        assert_eq!(stored(&store)["ttclid"], "tok");
    }

    #[test]
    fn entry_whitelist_carries_ttclid_only_on_the_landing_route() {
        assert!(entry_whitelist("/").contains(&"ttclid"));
        assert!(!entry_whitelist("/chat").contains(&"ttclid"));
        assert!(!entry_whitelist("/resultado").contains(&"ttclid"));
    }

    #[test]
    fn landing_capture_keeps_campaign_params_and_click_id_together() {
        let store = MemoryStore::new();
        capture_from_query(&store, "?utm_source=fb&ttclid=tok", entry_whitelist("/"));
        let params = stored(&store);
        assert_eq!(params["utm_source"], "fb");
        assert_eq!(params["ttclid"], "tok");
    }

    #[test]
    fn corrupted_capture_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(UTM_PARAMS_KEY, "{broken");
        assert!(stored(&store).is_empty());
        assert_eq!(visible_query(&store), None);
    }

    #[test]
    fn capture_round_trips_through_visible_query() {
        let store = MemoryStore::new();
        capture_from_query(&store, "?utm_source=fb&utm_campaign=x", CAMPAIGN_KEYS);
        let query = visible_query(&store).expect("capture exists");
        assert!(query.contains("utm_source=fb"));
        assert!(query.contains("utm_campaign=x"));

        // Simulate a reload with no query string: re-capturing from the
        // rebuilt visible URL must preserve the same params.
        let rebuilt = MemoryStore::new();
        capture_from_query(&rebuilt, &query, CAMPAIGN_KEYS);
        assert_eq!(stored(&rebuilt), stored(&store));
    }

    #[test]
    fn values_are_url_encoded_in_visible_query() {
        let store = MemoryStore::new();
        capture_from_query(&store, "?utm_campaign=ver%C3%A1no%20final", CAMPAIGN_KEYS);
        let query = visible_query(&store).expect("capture exists");
        assert!(query.contains("utm_campaign=ver%C3%A1no%20final"));
    }

    #[test]
    fn checkout_url_always_carries_click_identifiers() {
        let url = checkout_url("https://pay.example.com/X?off=abc", 1_700_000_000_000);
        assert!(url.contains("xcod=1700000000000"));
        assert!(url.contains("sck=1700000001000"));
        assert!(url.contains("bid=1700000002000"));
        assert!(!url.contains("??"));
    }

    #[test]
    fn checkout_url_handles_base_without_query() {
        let url = checkout_url("https://pay.example.com/X", 5);
        assert!(url.starts_with("https://pay.example.com/X?xcod=5"));
    }

    #[test]
    fn append_params_with_empty_capture_is_identity() {
        let base = checkout_url("https://pay.example.com/X", 5);
        assert_eq!(append_params(&base, &BTreeMap::new()), base);
    }

    #[test]
    fn outbound_url_carries_captured_utms_exactly_once() {
        let store = MemoryStore::new();
        capture_from_query(&store, "?utm_source=fb&utm_campaign=x", CAMPAIGN_KEYS);
        let url = append_params(&checkout_url("https://pay.example.com/X?off=abc", 7), &stored(&store));
        assert_eq!(url.matches("utm_source=fb").count(), 1);
        assert_eq!(url.matches("utm_campaign=x").count(), 1);
        assert!(url.contains("xcod=7"));
    }
}
