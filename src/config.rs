/// Hotmart checkout for the 21-day plan. The offer code is part of the base
/// URL, so the query separator is already present.
pub const CHECKOUT_BASE_URL: &str = "https://pay.hotmart.com/F100142422S?off=g0y3vexd";

/// Timing and pricing knobs for the result-page reveal sequence. The funnel
/// shipped several times with only these values changing, so they live behind
/// named presets instead of scattered literals.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FunnelConfig {
    /// One-shot delay before the loading screen gives way to the diagnosis.
    pub diagnosis_delay_ms: u32,
    /// Seconds the video-phase advance button stays locked after entry.
    pub video_unlock_delay_seconds: u32,
    /// Fade-out settle time between an advance click and the phase commit.
    pub transition_settle_ms: u32,
    /// Offer price in cents, shown on the CTA.
    pub price_cents: u32,
    /// Countdown window backing the urgency timer.
    pub countdown_window_seconds: u32,
    /// The spots counter never decays below this.
    pub spots_floor: u32,
}

impl FunnelConfig {
    /// Values from the first public revision of the result page.
    pub const fn initial_launch() -> Self {
        FunnelConfig {
            diagnosis_delay_ms: 2500,
            video_unlock_delay_seconds: 10,
            transition_settle_ms: 400,
            price_cents: 990,
            countdown_window_seconds: 47 * 60,
            spots_floor: 15,
        }
    }

    /// Values currently in production.
    pub const fn current() -> Self {
        FunnelConfig {
            diagnosis_delay_ms: 2500,
            video_unlock_delay_seconds: 20,
            transition_settle_ms: 1300,
            price_cents: 990,
            countdown_window_seconds: 47 * 60,
            spots_floor: 15,
        }
    }

    pub fn price_display(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

impl Default for FunnelConfig {
    fn default() -> Self {
        FunnelConfig::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_window_is_forty_seven_minutes() {
        assert_eq!(FunnelConfig::current().countdown_window_seconds, 2820);
    }

    #[test]
    fn price_formats_with_two_decimals() {
        assert_eq!(FunnelConfig::current().price_display(), "$9.90");
        let cheap = FunnelConfig {
            price_cents: 705,
            ..FunnelConfig::current()
        };
        assert_eq!(cheap.price_display(), "$7.05");
    }
}
