//! Result-page phase progression engine. Owns which content block is visible,
//! the per-phase acknowledged flags, the fade-out tag used for transition
//! animation, and the timed unlock gate in front of the video phase. All
//! timers live outside in the page component; this type only reacts to their
//! callbacks, so it runs unchanged under host-target tests.

use crate::config::FunnelConfig;
use crate::content;
use crate::tracking::{EventSink, SharedSink, TrackingEvent};

/// The five stages of the reveal sequence, in the only order they can occur.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Phase {
    Loading,
    Diagnosis,
    Video,
    Window,
    Offer,
}

impl Phase {
    pub fn number(self) -> u8 {
        match self {
            Phase::Loading => 0,
            Phase::Diagnosis => 1,
            Phase::Video => 2,
            Phase::Window => 3,
            Phase::Offer => 4,
        }
    }

    fn next(self) -> Option<Phase> {
        match self {
            Phase::Loading => Some(Phase::Diagnosis),
            Phase::Diagnosis => Some(Phase::Video),
            Phase::Video => Some(Phase::Window),
            Phase::Window => Some(Phase::Offer),
            Phase::Offer => None,
        }
    }

    /// Index into the acknowledged flags for the user-advanceable phases.
    fn ack_slot(self) -> Option<usize> {
        match self {
            Phase::Diagnosis => Some(0),
            Phase::Video => Some(1),
            Phase::Window => Some(2),
            _ => None,
        }
    }
}

/// Timed gate in front of the video phase's advance button. Scoped to one
/// occupancy of the video phase; re-armed on every entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnlockGate {
    seconds_left: u32,
    enabled: bool,
}

impl UnlockGate {
    fn armed(delay_seconds: u32) -> Self {
        UnlockGate {
            seconds_left: delay_seconds,
            enabled: delay_seconds == 0,
        }
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Clone)]
pub struct ResultFlow {
    config: FunnelConfig,
    sink: SharedSink,
    phase: Phase,
    fade_out: Option<Phase>,
    acknowledged: [bool; 3],
    gate: UnlockGate,
}

impl ResultFlow {
    pub fn new(config: FunnelConfig, sink: SharedSink) -> Self {
        ResultFlow {
            gate: UnlockGate::armed(config.video_unlock_delay_seconds),
            config,
            sink,
            phase: Phase::Loading,
            fade_out: None,
            acknowledged: [false; 3],
        }
    }

    pub fn config(&self) -> &FunnelConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Source phase of an in-flight transition, used to tag the fade-out
    /// animation on the section being left.
    pub fn fade_out_phase(&self) -> Option<Phase> {
        self.fade_out
    }

    /// Whether the user already pressed this phase's advance button. Never
    /// resets; the machine does not revisit phases.
    pub fn is_acknowledged(&self, phase: Phase) -> bool {
        phase.ack_slot().map(|slot| self.acknowledged[slot]).unwrap_or(false)
    }

    pub fn gate(&self) -> UnlockGate {
        self.gate
    }

    /// Loading → Diagnosis, fired once by the mount timer. Later calls are
    /// no-ops so a stray duplicate timeout cannot re-emit analytics.
    pub fn reveal_diagnosis(&mut self) -> bool {
        if self.phase != Phase::Loading {
            return false;
        }
        self.phase = Phase::Diagnosis;
        self.sink
            .push(TrackingEvent::revelation_viewed("Por qué te dejó", Phase::Diagnosis.number()));
        true
    }

    pub fn can_advance(&self) -> bool {
        let Some(slot) = self.phase.ack_slot() else {
            return false;
        };
        if self.acknowledged[slot] || self.fade_out.is_some() {
            return false;
        }
        if self.phase == Phase::Video && !self.gate.enabled {
            return false;
        }
        true
    }

    /// First half of a user-initiated advance: set the acknowledged flag and
    /// start the fade-out. The page schedules the settle timeout and then
    /// calls [`commit_advance`]. Returns false (and changes nothing) when the
    /// advance is gated, repeated, or already in flight.
    ///
    /// [`commit_advance`]: ResultFlow::commit_advance
    pub fn begin_advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if let Some(slot) = self.phase.ack_slot() {
            self.acknowledged[slot] = true;
        }
        self.fade_out = Some(self.phase);
        true
    }

    /// Second half of an advance, after the settle delay: commit the new
    /// phase, clear the fade-out, then emit analytics tagged with the new
    /// phase number. Order matters and is asserted by tests.
    pub fn commit_advance(&mut self) -> bool {
        let Some(from) = self.fade_out.take() else {
            return false;
        };
        let Some(to) = from.next() else {
            return false;
        };
        self.phase = to;
        if to == Phase::Video {
            self.gate = UnlockGate::armed(self.config.video_unlock_delay_seconds);
        }
        self.sink.push(TrackingEvent::phase_progression_clicked(
            from.number(),
            to.number(),
            content::advance_button_label(from.number()),
        ));
        match to {
            Phase::Video => self.sink.push(TrackingEvent::video_started()),
            Phase::Window => self
                .sink
                .push(TrackingEvent::revelation_viewed("Ventana 72 Horas", to.number())),
            Phase::Offer => {
                self.sink
                    .push(TrackingEvent::revelation_viewed("Oferta Revelada", to.number()));
                self.sink.push(TrackingEvent::offer_revealed());
            }
            _ => {}
        }
        true
    }

    /// One-second gate tick while the video phase is occupied. Returns true
    /// on the tick that unlocks the button; that tick also emits the single
    /// `video_button_unlocked` event.
    pub fn tick_unlock(&mut self) -> bool {
        if self.phase != Phase::Video || self.gate.enabled {
            return false;
        }
        self.gate.seconds_left = self.gate.seconds_left.saturating_sub(1);
        if self.gate.seconds_left > 0 {
            return false;
        }
        self.gate.enabled = true;
        self.sink.push(TrackingEvent::video_button_unlocked(
            self.config.video_unlock_delay_seconds,
        ));
        true
    }

    /// Buy CTA press. Emits the click event; the page opens the checkout URL.
    /// Phase state is untouched, the offer stays on screen.
    pub fn record_buy_click(&self, button_location: &'static str) {
        self.sink.push(TrackingEvent::cta_buy_click(button_location));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::fake::RecordingSink;
    use std::rc::Rc;

    fn flow_with_sink(config: FunnelConfig) -> (ResultFlow, Rc<RecordingSink>) {
        let sink = RecordingSink::shared();
        (ResultFlow::new(config, sink.clone()), sink)
    }

    fn advance(flow: &mut ResultFlow) {
        assert!(flow.begin_advance(), "advance refused at {:?}", flow.phase());
        assert!(flow.commit_advance());
    }

    fn unlock_gate(flow: &mut ResultFlow) {
        while !flow.gate().is_enabled() {
            flow.tick_unlock();
        }
    }

    #[test]
    fn phases_progress_monotonically_to_offer() {
        let (mut flow, _sink) = flow_with_sink(FunnelConfig::current());
        let mut seen = vec![flow.phase().number()];
        assert!(flow.reveal_diagnosis());
        seen.push(flow.phase().number());
        advance(&mut flow);
        seen.push(flow.phase().number());
        unlock_gate(&mut flow);
        advance(&mut flow);
        seen.push(flow.phase().number());
        advance(&mut flow);
        seen.push(flow.phase().number());
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        // Offer is terminal.
        assert!(!flow.begin_advance());
        assert!(!flow.commit_advance());
        assert_eq!(flow.phase(), Phase::Offer);
    }

    #[test]
    fn reveal_diagnosis_is_idempotent() {
        let (mut flow, sink) = flow_with_sink(FunnelConfig::current());
        assert!(flow.reveal_diagnosis());
        assert!(!flow.reveal_diagnosis());
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn advance_cannot_skip_or_regress() {
        let (mut flow, _sink) = flow_with_sink(FunnelConfig::current());
        // No advance out of loading.
        assert!(!flow.begin_advance());
        flow.reveal_diagnosis();
        advance(&mut flow);
        assert_eq!(flow.phase(), Phase::Video);
        // Commit without a begun advance is a no-op.
        assert!(!flow.commit_advance());
        assert_eq!(flow.phase(), Phase::Video);
    }

    #[test]
    fn repeated_clicks_on_an_acknowledged_phase_do_nothing() {
        let (mut flow, sink) = flow_with_sink(FunnelConfig::current());
        flow.reveal_diagnosis();
        assert!(flow.begin_advance());
        // Second click lands during the fade; third after commit would be on
        // the next phase, so re-press the same phase via the ack flag check.
        assert!(!flow.begin_advance());
        assert!(flow.commit_advance());
        assert!(flow.is_acknowledged(Phase::Diagnosis));
        let before = sink.events().len();
        assert!(!flow.reveal_diagnosis());
        assert_eq!(sink.events().len(), before);
    }

    #[test]
    fn video_advance_is_a_noop_while_gate_is_locked() {
        let (mut flow, sink) = flow_with_sink(FunnelConfig::current());
        flow.reveal_diagnosis();
        advance(&mut flow);
        assert_eq!(flow.phase(), Phase::Video);
        let events_before = sink.events().len();
        assert!(!flow.can_advance());
        assert!(!flow.begin_advance());
        assert!(!flow.commit_advance());
        assert_eq!(flow.phase(), Phase::Video);
        assert_eq!(flow.fade_out_phase(), None);
        assert!(!flow.is_acknowledged(Phase::Video));
        assert_eq!(sink.events().len(), events_before, "gated advance emitted analytics");
    }

    #[test]
    fn gate_unlocks_on_the_final_tick_with_one_event() {
        let config = FunnelConfig {
            video_unlock_delay_seconds: 10,
            ..FunnelConfig::current()
        };
        let (mut flow, sink) = flow_with_sink(config);
        flow.reveal_diagnosis();
        advance(&mut flow);
        sink.clear();
        for tick in 1..=9 {
            assert!(!flow.tick_unlock(), "gate opened early at tick {tick}");
            assert!(!flow.gate().is_enabled());
            assert!(!flow.begin_advance());
        }
        assert!(flow.tick_unlock());
        assert!(flow.gate().is_enabled());
        let unlocked: Vec<_> = sink
            .events()
            .into_iter()
            .filter(|event| {
                matches!(event, TrackingEvent::VideoButtonUnlocked { unlock_time_seconds: 10, .. })
            })
            .collect();
        assert_eq!(unlocked.len(), 1);
        // Further ticks stay silent.
        assert!(!flow.tick_unlock());
        assert_eq!(sink.events().len(), 1);
        // And the advance now succeeds.
        assert!(flow.begin_advance());
        assert!(flow.commit_advance());
        assert_eq!(flow.phase(), Phase::Window);
    }

    #[test]
    fn gate_rearms_on_entry_into_video() {
        let (mut flow, _sink) = flow_with_sink(FunnelConfig::current());
        flow.reveal_diagnosis();
        advance(&mut flow);
        assert_eq!(flow.gate().seconds_left(), 20);
        assert!(!flow.gate().is_enabled());
    }

    #[test]
    fn commit_emits_events_in_the_contract_order() {
        let (mut flow, sink) = flow_with_sink(FunnelConfig::current());
        flow.reveal_diagnosis();
        sink.clear();
        advance(&mut flow);
        assert_eq!(sink.names(), vec!["phase_progression_clicked", "video_started"]);

        unlock_gate(&mut flow);
        sink.clear();
        advance(&mut flow);
        assert_eq!(sink.names(), vec!["phase_progression_clicked", "revelation_viewed"]);

        sink.clear();
        advance(&mut flow);
        assert_eq!(
            sink.names(),
            vec!["phase_progression_clicked", "revelation_viewed", "offer_revealed"]
        );
    }

    #[test]
    fn progression_events_are_tagged_with_the_new_phase() {
        let (mut flow, sink) = flow_with_sink(FunnelConfig::current());
        flow.reveal_diagnosis();
        advance(&mut flow);
        unlock_gate(&mut flow);
        sink.clear();
        advance(&mut flow);
        let tagged: Vec<u8> = sink
            .events()
            .into_iter()
            .filter_map(|event| match event {
                TrackingEvent::RevelationViewed { phase_number, .. } => Some(phase_number),
                _ => None,
            })
            .collect();
        assert_eq!(tagged, vec![Phase::Window.number()]);
    }

    #[test]
    fn fade_out_tags_the_source_phase_and_clears_on_commit() {
        let (mut flow, _sink) = flow_with_sink(FunnelConfig::current());
        flow.reveal_diagnosis();
        assert!(flow.begin_advance());
        assert_eq!(flow.fade_out_phase(), Some(Phase::Diagnosis));
        assert_eq!(flow.phase(), Phase::Diagnosis, "phase committed before settle");
        assert!(flow.commit_advance());
        assert_eq!(flow.fade_out_phase(), None);
        assert_eq!(flow.phase(), Phase::Video);
    }

    #[test]
    fn buy_click_emits_without_changing_state() {
        let (mut flow, sink) = flow_with_sink(FunnelConfig::current());
        flow.reveal_diagnosis();
        advance(&mut flow);
        unlock_gate(&mut flow);
        advance(&mut flow);
        advance(&mut flow);
        sink.clear();
        flow.record_buy_click("result_buy_main");
        flow.record_buy_click("sticky_footer");
        assert_eq!(flow.phase(), Phase::Offer);
        assert_eq!(sink.names(), vec!["cta_buy_click", "cta_buy_click"]);
    }

    #[test]
    fn zero_delay_preset_starts_unlocked() {
        let config = FunnelConfig {
            video_unlock_delay_seconds: 0,
            ..FunnelConfig::current()
        };
        let (mut flow, _sink) = flow_with_sink(config);
        flow.reveal_diagnosis();
        advance(&mut flow);
        assert!(flow.gate().is_enabled());
        assert!(flow.can_advance());
    }
}
