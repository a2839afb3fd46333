use crate::config::{FunnelConfig, CHECKOUT_BASE_URL};
use crate::content;
use crate::countdown;
use crate::effects;
use crate::funnel::{Phase, ResultFlow};
use crate::spots::SpotsCounter;
use crate::storage::{self, LocalStore, SharedStore};
use crate::tracking::{DataLayerSink, EventSink, SharedSink, TrackingEvent};
use crate::utm;
use gloo_timers::callback::{Interval, Timeout};
use std::rc::Rc;
use yew::prelude::*;

/// Messages into the phase machine. Every timer and click goes through the
/// reducer so callbacks always act on the current state, never on a value
/// captured at an earlier render.
pub enum FlowAction {
    RevealDiagnosis,
    BeginAdvance,
    CommitAdvance,
    TickUnlock,
}

struct FlowState(ResultFlow);

impl Reducible for FlowState {
    type Action = FlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            FlowAction::RevealDiagnosis => {
                next.reveal_diagnosis();
            }
            FlowAction::BeginAdvance => {
                next.begin_advance();
            }
            FlowAction::CommitAdvance => {
                next.commit_advance();
            }
            FlowAction::TickUnlock => {
                next.tick_unlock();
            }
        }
        Rc::new(FlowState(next))
    }
}

fn value_or_unspecified(value: &str) -> String {
    if value.trim().is_empty() {
        "No especificado".to_string()
    } else {
        value.to_string()
    }
}

fn delay_emoji(config: &FunnelConfig, seconds_left: u32) -> &'static str {
    let total = config.video_unlock_delay_seconds.max(1);
    let progress = (total - seconds_left.min(total)) as f64 / total as f64;
    if progress < 0.2 {
        "😴"
    } else if progress < 0.4 {
        "⏳"
    } else if progress < 0.7 {
        "🔥"
    } else {
        "🚀"
    }
}

#[function_component(ResultPage)]
pub fn result_page() -> Html {
    let config = FunnelConfig::current();
    let store: SharedStore = Rc::new(LocalStore);
    let sink: SharedSink = Rc::new(DataLayerSink);

    let flow = {
        let sink = sink.clone();
        use_reducer(move || FlowState(ResultFlow::new(config, sink)))
    };

    let quiz = storage::quiz_data(store.as_ref());
    let gender = quiz.gender();

    let time_left = use_state(|| {
        countdown::remaining_seconds(&LocalStore, effects::now_ms(), config.countdown_window_seconds)
    });
    let spots = use_state(|| storage::spots_left(&LocalStore));
    let loading_progress = use_state(|| 0u32);
    let people_buying = use_state(|| 1 + (js_sys::Math::random() * 5.0) as u32);
    // Live value for the jitter interval; reading the state handle inside the
    // callback would only ever see the mount-time value.
    let buying_cell = use_mut_ref(|| *people_buying);
    let spots_counter = use_mut_ref(|| SpotsCounter::new(config.spots_floor));

    let diagnosis_ref = use_node_ref();
    let video_ref = use_node_ref();
    let vsl_ref = use_node_ref();
    let window_ref = use_node_ref();
    let offer_ref = use_node_ref();

    // Mount: restore the query string for URL-inspecting analytics, emit the
    // page view, and start the page-scoped timers. Every handle is dropped in
    // the cleanup closure.
    {
        let flow = flow.clone();
        let sink = sink.clone();
        let store = store.clone();
        let time_left = time_left.clone();
        let spots = spots.clone();
        let loading_progress = loading_progress.clone();
        let people_buying = people_buying.clone();
        let spots_counter = spots_counter.clone();
        use_effect_with_deps(
            move |_| {
                if effects::current_query().is_empty() {
                    if let Some(query) = utm::visible_query(store.as_ref()) {
                        effects::replace_visible_query(&query);
                    }
                }
                sink.push(TrackingEvent::result_page_view(effects::current_href()));

                let mounted_at = effects::now_ms();
                let progress_interval = Interval::new(100, move || {
                    // 4% per 100ms, same fill rate as the loading bar always had.
                    let elapsed = effects::now_ms().saturating_sub(mounted_at);
                    loading_progress.set(((elapsed / 25) as u32).min(100));
                });

                let reveal_timeout = {
                    let flow = flow.clone();
                    Timeout::new(config.diagnosis_delay_ms, move || {
                        effects::play_key_sound();
                        flow.dispatch(FlowAction::RevealDiagnosis);
                    })
                };

                let countdown_interval = Interval::new(1000, move || {
                    time_left.set(countdown::remaining_seconds(
                        &LocalStore,
                        effects::now_ms(),
                        config.countdown_window_seconds,
                    ));
                });

                let spots_interval = {
                    let sink = sink.clone();
                    let store = store.clone();
                    Interval::new(45_000, move || {
                        let value = spots_counter
                            .borrow_mut()
                            .tick(store.as_ref(), sink.as_ref());
                        spots.set(value);
                    })
                };

                let buying_period = 5000 + (js_sys::Math::random() * 10_000.0) as u32;
                let buying_interval = Interval::new(buying_period, move || {
                    let mut current = buying_cell.borrow_mut();
                    *current = if js_sys::Math::random() > 0.5 {
                        (*current + 1).min(7)
                    } else {
                        current.saturating_sub(1).max(1)
                    };
                    people_buying.set(*current);
                });

                move || {
                    drop(progress_interval);
                    drop(reveal_timeout);
                    drop(countdown_interval);
                    drop(spots_interval);
                    drop(buying_interval);
                }
            },
            (),
        );
    }

    // Unlock-gate tick, scoped to a single occupancy of the video phase. The
    // cleanup runs on phase change, so leaving the phase tears the interval
    // down with it.
    {
        let flow = flow.clone();
        let deps = flow.0.phase();
        use_effect_with_deps(
            move |phase: &Phase| {
                let interval = (*phase == Phase::Video).then(|| {
                    Interval::new(1000, move || {
                        flow.dispatch(FlowAction::TickUnlock);
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    // Inject the hosted video player once the video section has settled on
    // screen. A missing placeholder is skipped inside mount_vsl_player.
    {
        let vsl_ref = vsl_ref.clone();
        let deps = flow.0.phase();
        use_effect_with_deps(
            move |phase: &Phase| {
                let timeout = (*phase == Phase::Video).then(|| {
                    Timeout::new(500, move || {
                        effects::mount_vsl_player(&vsl_ref);
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    // Settle delay between a begun advance and its commit.
    {
        let flow = flow.clone();
        let deps = flow.0.fade_out_phase();
        use_effect_with_deps(
            move |fade: &Option<Phase>| {
                let timeout = fade.map(|_| {
                    Timeout::new(config.transition_settle_ms, move || {
                        flow.dispatch(FlowAction::CommitAdvance);
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    // Bring the newly revealed section into view, once it has had a moment
    // to mount. A missing target is skipped inside scroll_into_view.
    {
        let target = match flow.0.phase() {
            Phase::Loading => None,
            Phase::Diagnosis => Some(diagnosis_ref.clone()),
            Phase::Video => Some(video_ref.clone()),
            Phase::Window => Some(window_ref.clone()),
            Phase::Offer => Some(offer_ref.clone()),
        };
        use_effect_with_deps(
            move |_| {
                let timeout = target.map(|node| {
                    Timeout::new(100, move || {
                        effects::scroll_into_view(&node);
                    })
                });
                move || drop(timeout)
            },
            flow.0.phase(),
        );
    }

    let on_advance = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            if flow.0.can_advance() {
                effects::play_key_sound();
                flow.dispatch(FlowAction::BeginAdvance);
            }
        })
    };

    let on_buy = {
        let flow = flow.clone();
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            flow.0.record_buy_click("result_buy_main");
            let url = utm::append_params(
                &utm::checkout_url(CHECKOUT_BASE_URL, effects::now_ms()),
                &utm::stored(store.as_ref()),
            );
            effects::open_in_new_tab(&url);
        })
    };

    let phase = flow.0.phase();
    let fade = flow.0.fade_out_phase();
    let gate = flow.0.gate();
    let price = config.price_display();

    let advance_block = |for_phase: Phase, class: &'static str, emoji: &'static str| -> Html {
        if flow.0.is_acknowledged(for_phase) {
            html! {
                <div class="checkmark-container">
                    <div class="checkmark-glow">{"✅"}</div>
                </div>
            }
        } else {
            html! {
                <button class={classes!("cta-button", class)} onclick={on_advance.clone()}>
                    {format!("{emoji} {}", content::advance_button_label(for_phase.number()))}
                </button>
            }
        }
    };

    html! {
        <div class="result-container">
            <div class="result-header">
                <h1 class="result-title">{"Tu Plan Personalizado Está Listo"}</h1>
                <div class="urgency-bar">
                    <span>{"⚠️"}</span>
                    <span>{format!("Tu análisis expira en: {}", countdown::format_mmss(*time_left))}</span>
                </div>
                <p class="urgency-note">
                    {"Por seguridad, tu diagnóstico personalizado estará disponible solo por 47 minutos."}
                </p>
            </div>

            {
                if phase > Phase::Loading {
                    html! {
                        <div class="progress-bar-container fade-in">
                            { content::progress_labels().iter().enumerate().map(|(index, label)| {
                                let step = index as u8 + 1;
                                let state = if phase.number() > step {
                                    "progress-step completed"
                                } else if phase.number() == step {
                                    "progress-step active"
                                } else {
                                    "progress-step"
                                };
                                html! {
                                    <div class={state}>
                                        <div class="step-circle">
                                            { if phase.number() > step { "✅".to_string() } else { step.to_string() } }
                                        </div>
                                        <span class="step-label">{label}</span>
                                    </div>
                                }
                            }).collect::<Html>() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="revelations-container">
                {
                    if phase == Phase::Loading {
                        html! {
                            <div class="revelation fade-in loading-box">
                                <div class="spin-brain">{"🧠"}</div>
                                <h2>{"ANALIZANDO TU CASO"}</h2>
                                <p>{content::loading_message(gender)}</p>
                                <div class="loading-steps">
                                    <div class="loading-step active">{"📊 Respuestas procesadas"}</div>
                                    <div class={classes!("loading-step", (*loading_progress >= 40).then(|| "active"))}>
                                        {"🧠 Generando tu diagnóstico personalizado..."}
                                    </div>
                                </div>
                                <div class="progress-outer">
                                    <div class="progress-inner" style={format!("width: {}%;", *loading_progress)}></div>
                                </div>
                                <div class="progress-labels">
                                    <span>{format!("{}%", *loading_progress)}</span>
                                    <span>{format!("⏱️ {}s...", (100 - *loading_progress).div_ceil(10).max(1))}</span>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if phase == Phase::Diagnosis {
                        html! {
                            <div
                                ref={diagnosis_ref.clone()}
                                class={classes!("revelation", "fade-in", (fade == Some(Phase::Diagnosis)).then(|| "fade-out"))}
                            >
                                <div class="revelation-header">
                                    <div class="revelation-icon">{"💔"}</div>
                                    <h2>{content::title(gender)}</h2>
                                </div>
                                <div class="quiz-summary-box">
                                    <p class="summary-title">{"📋 TU SITUACIÓN ESPECÍFICA"}</p>
                                    <div class="summary-grid">
                                        <div><span>{"✓ "}</span><strong>{"Tiempo: "}</strong>{value_or_unspecified(&quiz.time_separation)}</div>
                                        <div><span>{"✓ "}</span><strong>{"Quién terminó: "}</strong>{value_or_unspecified(&quiz.who_ended)}</div>
                                        <div><span>{"✓ "}</span><strong>{"Contacto: "}</strong>{value_or_unspecified(&quiz.current_situation)}</div>
                                        <div><span>{"✓ "}</span><strong>{"Compromiso: "}</strong>{value_or_unspecified(&quiz.commitment_level)}</div>
                                    </div>
                                </div>
                                <p class="revelation-text">{content::diagnosis_copy(&quiz)}</p>
                                <div class="emotional-validation">
                                    <p><strong>{"Tu situación específica:"}</strong><br />{content::emotional_validation(&quiz)}</p>
                                </div>
                                { advance_block(Phase::Diagnosis, "btn-green", "🔓") }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if phase == Phase::Video {
                        html! {
                            <div
                                ref={video_ref.clone()}
                                class={classes!("revelation", "fade-in", (fade == Some(Phase::Video)).then(|| "fade-out"))}
                            >
                                <div class="revelation-header">
                                    <h2>{match gender {
                                        crate::storage::Gender::Hombre =>
                                            "Ahora solo falta un paso más para recuperar a la mujer que amas.",
                                        crate::storage::Gender::Mujer =>
                                            "Ahora solo falta un paso más para recuperar al hombre que amas.",
                                    }}</h2>
                                </div>
                                <div class="vsl-container">
                                    <div ref={vsl_ref.clone()} class="vsl-placeholder"></div>
                                </div>
                                {
                                    if flow.0.is_acknowledged(Phase::Video) {
                                        html! {
                                            <div class="checkmark-container">
                                                <div class="checkmark-glow">{"✅"}</div>
                                            </div>
                                        }
                                    } else if !gate.is_enabled() {
                                        html! {
                                            <div class="video-delay-indicator">
                                                <p class="delay-text">
                                                    {format!(
                                                        "{} Próxima sección en {} segundos...",
                                                        delay_emoji(&config, gate.seconds_left()),
                                                        gate.seconds_left()
                                                    )}
                                                </p>
                                                <div class="delay-progress-outer">
                                                    <div
                                                        class="delay-progress-inner"
                                                        style={format!(
                                                            "width: {}%;",
                                                            100 * (config.video_unlock_delay_seconds - gate.seconds_left())
                                                                / config.video_unlock_delay_seconds.max(1)
                                                        )}
                                                    ></div>
                                                </div>
                                                <button class="cta-button btn-yellow disabled" disabled=true>
                                                    {content::advance_button_label(Phase::Video.number())}
                                                </button>
                                            </div>
                                        }
                                    } else {
                                        advance_block(Phase::Video, "btn-yellow", "⚡")
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if phase == Phase::Window {
                        html! {
                            <div
                                ref={window_ref.clone()}
                                class={classes!("revelation", "fade-in", "ventana-box", (fade == Some(Phase::Window)).then(|| "fade-out"))}
                            >
                                <div class="ventana-header">
                                    <span>{"⚡"}</span>
                                    <h2>{"LA VENTANA DE 72 HORAS"}</h2>
                                </div>
                                <p class="revelation-text">{content::window_copy(gender)}</p>
                                <div class="fases-list">
                                    { (1..=3).map(|n| {
                                        let copy = content::window_phase(gender, n);
                                        html! {
                                            <div class="fase-item">
                                                <strong>{format!("FASE {n}: {} ({})", copy.title, copy.time_range)}</strong>
                                                <p>{&copy.summary}</p>
                                                <ul>
                                                    { copy.bullets.iter().map(|bullet| html! { <li>{bullet}</li> }).collect::<Html>() }
                                                </ul>
                                                <p class="fase-warning">{&copy.warning}</p>
                                            </div>
                                        }
                                    }).collect::<Html>() }
                                </div>
                                { advance_block(Phase::Window, "btn-orange", "⚡") }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if phase == Phase::Offer {
                        html! {
                            <div ref={offer_ref.clone()} class="revelation fade-in offer-section">
                                {
                                    {
                                        let (badge, subtitle) = content::completion_badge(gender);
                                        html! {
                                            <div class="completion-banner">
                                                <p class="completion-title">{badge}</p>
                                                <p class="completion-subtitle">{subtitle}</p>
                                            </div>
                                        }
                                    }
                                }
                                <div class="offer-badge">{"OFERTA EXCLUSIVA"}</div>
                                <h2 class="offer-title-main">{content::offer_title(gender)}</h2>
                                <div class="quiz-summary-box">
                                    <p class="summary-title">{"Basado en tu situación específica:"}</p>
                                    <ul class="summary-list">
                                        <li>{"✓ Tiempo: "}{value_or_unspecified(&quiz.time_separation)}</li>
                                        <li>{"✓ Quién terminó: "}{value_or_unspecified(&quiz.who_ended)}</li>
                                        <li>{"✓ Contacto: "}{value_or_unspecified(&quiz.current_situation)}</li>
                                        <li>{"✓ Compromiso: "}{value_or_unspecified(&quiz.commitment_level)}</li>
                                    </ul>
                                </div>
                                <div class="offer-features">
                                    { content::features(gender).iter().map(|feature| html! {
                                        <div class="feature">
                                            <span class="check-icon">{"✔"}</span>
                                            <span>{feature}</span>
                                        </div>
                                    }).collect::<Html>() }
                                </div>
                                <div class="price-box">
                                    <p class="price-old">{"Precio regular: $123"}</p>
                                    <p class="price-new">{&price}</p>
                                    <p class="price-discount">{"💰 92% de descuento HOY"}</p>
                                </div>
                                <button class="cta-button btn-green cta-buy" onclick={on_buy}>
                                    <span>{format!("🚀 {} POR {price}", content::cta_label(gender))}</span>
                                    <span class="cta-subline">
                                        {format!("⏰ {} RESTANTES", countdown::format_mmss(*time_left))}
                                    </span>
                                </button>
                                <div class="guarantee-section">
                                    <div class="guarantee-icon">{"🛡️"}</div>
                                    <h3>{"GARANTÍA BLINDADA DE 30 DÍAS"}</h3>
                                    <p>
                                        {"Si en 30 días no ves resultados concretos en tu reconquista, \
                                          devolvemos el 100% de tu dinero, sin preguntas, sin burocracia."}
                                    </p>
                                </div>
                                <div class="trust-icons">
                                    <span>{"🔒 Compra segura"}</span>
                                    <span>{"✅ Acceso instantáneo"}</span>
                                    <span>{"↩️ 30 días de garantía"}</span>
                                </div>
                                <div class="final-urgency-grid">
                                    <div class="urgency-item">
                                        <span>{"Tiempo:"}</span>
                                        <strong>{countdown::format_mmss(*time_left)}</strong>
                                    </div>
                                    <div class="urgency-item">
                                        <span>{"Vacantes:"}</span>
                                        <strong>{format!("{}/50", *spots)}</strong>
                                    </div>
                                </div>
                                <p class="people-buying">{format!("✨ {} comprando ahora", *people_buying)}</p>
                                <p class="social-proof">{"✓ +12.847 reconquistas exitosas"}</p>
                                <p class="exclusivity-note">
                                    {"Exclusivo para quien completó el análisis personalizado"}
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if phase == Phase::Offer {
                    html! {
                        <div class="sticky-footer-urgency fade-in-up">
                            {format!("⏰ {} • {} spots restantes", countdown::format_mmss(*time_left), *spots)}
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
.result-container { padding-bottom: 100px; max-width: 800px; margin: 0 auto; color: white; }
.result-header { text-align: center; padding: 24px 16px 8px; }
.urgency-bar { display: flex; justify-content: center; gap: 8px; color: #fde047; font-weight: bold; }
.urgency-note { font-size: 0.8rem; color: rgba(255,255,255,0.6); margin-top: 8px; }
.revelation { background: rgba(0,0,0,0.4); border-radius: 16px; padding: 24px; margin: 16px; }
.revelation-text { white-space: pre-line; line-height: 1.6; }
.loading-box { background: rgba(234, 179, 8, 0.1); border: 2px solid #eab308; text-align: center; padding: 40px; }
.spin-brain { font-size: 3rem; animation: spin 2s linear infinite; display: inline-block; }
.loading-steps { margin: 16px 0; }
.loading-step { opacity: 0.4; padding: 4px; }
.loading-step.active { opacity: 1; }
.progress-outer { height: 10px; background: rgba(255,255,255,0.2); border-radius: 5px; overflow: hidden; }
.progress-inner { height: 100%; background: #eab308; transition: width 0.1s linear; }
.progress-labels { display: flex; justify-content: space-between; font-size: 0.85rem; margin-top: 6px; }
.quiz-summary-box { background: rgba(234, 179, 8, 0.1); border: 2px solid rgba(234, 179, 8, 0.3); border-radius: 12px; padding: 20px; margin-bottom: 30px; }
.summary-title { color: rgb(253, 224, 71); font-weight: bold; margin-bottom: 12px; }
.summary-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 15px; text-align: left; }
.summary-grid span, .summary-list { color: #4ade80; }
.summary-list { list-style: none; padding: 0; margin: 0; color: white; line-height: 1.8; }
.emotional-validation { background: rgba(74, 222, 128, 0.1); border: 2px solid rgba(74, 222, 128, 0.3); border-radius: 12px; padding: 20px; margin-top: 20px; color: #4ade80; }
.cta-button { width: 100%; color: black; font-weight: 900; padding: 20px; border-radius: 12px; border: 3px solid white; cursor: pointer; margin-top: 20px; font-size: 1.1rem; display: flex; flex-direction: column; align-items: center; gap: 8px; }
.cta-button.disabled, .cta-button:disabled { opacity: 0.6; cursor: not-allowed; filter: grayscale(50%); }
.btn-green { background: #10b981; }
.btn-yellow { background: #eab308; animation: bounce 1s infinite; }
.btn-orange { background: #f97316; animation: pulse 1.5s infinite; }
.cta-buy { animation: glowshake 2s infinite; font-size: 1.3rem; }
.cta-subline { font-size: 0.9rem; opacity: 0.9; font-weight: 600; }
.checkmark-container { display: flex; justify-content: center; align-items: center; margin-top: 20px; min-height: 80px; }
.checkmark-glow { font-size: 4rem; animation: checkmarkShine 1s ease-in-out; }
.fade-in { animation: fadeIn 0.6s ease-in-out; }
.fade-out { animation: fadeOutAnimation 0.3s ease-out forwards; }
.fade-in-up { animation: fadeInUp 0.5s ease-out forwards; }
.progress-bar-container { display: flex; justify-content: space-between; margin: 20px auto; max-width: 800px; padding: 15px; background: rgba(0,0,0,0.4); border-radius: 12px; position: sticky; top: 0; z-index: 999; backdrop-filter: blur(5px); }
.progress-step { flex: 1; display: flex; flex-direction: column; align-items: center; color: rgba(255,255,255,0.5); font-size: 0.8rem; }
.step-circle { width: 32px; height: 32px; border-radius: 50%; background: rgba(255,255,255,0.2); display: flex; justify-content: center; align-items: center; margin-bottom: 5px; }
.progress-step.active .step-circle { background: #eab308; color: black; }
.progress-step.completed .step-circle { background: #4ade80; color: white; }
.vsl-container { position: relative; width: 100%; padding-bottom: 56.25%; background: #000; border-radius: 8px; overflow: hidden; }
.vsl-placeholder { position: absolute; inset: 0; }
.video-delay-indicator { background: rgba(0,0,0,0.4); border: 2px solid #eab308; border-radius: 12px; padding: 20px; margin-top: 20px; text-align: center; display: flex; flex-direction: column; gap: 15px; }
.delay-text { font-size: 1.1rem; font-weight: bold; }
.delay-progress-outer { width: 100%; height: 10px; background: rgba(255,255,255,0.2); border-radius: 5px; overflow: hidden; }
.delay-progress-inner { height: 100%; background: #eab308; transition: width 1s linear; }
.ventana-header { display: flex; justify-content: center; gap: 10px; align-items: center; }
.fases-list { display: flex; flex-direction: column; gap: 16px; margin: 20px 0; }
.fase-item { background: rgba(0,0,0,0.3); border-radius: 12px; padding: 16px; }
.fase-item ul { margin: 8px 0; padding-left: 20px; }
.fase-warning { color: #facc15; font-size: 0.9rem; }
.completion-banner { background: rgba(74, 222, 128, 0.1); border: 2px solid rgba(74, 222, 128, 0.3); border-radius: 12px; padding: 16px; margin-bottom: 20px; text-align: center; }
.completion-title { color: #4ade80; font-weight: 900; font-size: 1.2rem; margin: 0 0 6px; }
.completion-subtitle { margin: 0; font-size: 0.95rem; }
.offer-badge { background: #f97316; color: black; font-weight: 900; display: inline-block; padding: 6px 16px; border-radius: 999px; }
.offer-title-main { margin: 16px 0; }
.offer-features { display: flex; flex-direction: column; gap: 12px; margin-bottom: 24px; }
.feature { display: flex; gap: 10px; align-items: flex-start; }
.check-icon { color: #4ade80; font-weight: bold; }
.price-box { text-align: center; margin-bottom: 25px; }
.price-old { text-decoration: line-through; opacity: 0.6; margin: 0; }
.price-new { font-size: 3rem; color: #facc15; font-weight: 900; margin: 5px 0; }
.price-discount { color: #4ade80; font-weight: bold; }
.guarantee-section { background: rgba(74, 222, 128, 0.1); border: 3px solid rgba(74, 222, 128, 0.4); border-radius: 16px; padding: 24px; margin: 24px 0; text-align: center; }
.guarantee-icon { font-size: 3rem; }
.trust-icons { display: flex; justify-content: center; gap: 15px; color: #4ade80; font-size: 0.85rem; margin-bottom: 20px; flex-wrap: wrap; }
.final-urgency-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; margin: 18px 0; }
.urgency-item { background: rgba(0,0,0,0.3); padding: 12px; border-radius: 8px; text-align: center; display: flex; flex-direction: column; gap: 4px; }
.people-buying, .social-proof { text-align: center; color: rgb(74, 222, 128); font-size: 0.85rem; margin: 6px 0; opacity: 0.85; }
.exclusivity-note { text-align: center; font-size: 0.8rem; color: rgba(255,255,255,0.7); }
.sticky-footer-urgency { position: fixed; bottom: 0; left: 0; right: 0; background: rgba(0,0,0,0.95); padding: 15px; color: #fde047; text-align: center; z-index: 1000; border-top: 2px solid #eab308; font-weight: bold; }
@keyframes spin { 0% { transform: rotate(0deg); } 100% { transform: rotate(360deg); } }
@keyframes fadeIn { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes fadeOutAnimation { from { opacity: 1; transform: translateY(0); } to { opacity: 0; transform: translateY(-20px); } }
@keyframes fadeInUp { from { opacity: 0; transform: translateY(100%); } to { opacity: 1; transform: translateY(0); } }
@keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-5px); } }
@keyframes pulse { 0% { transform: scale(1); } 70% { transform: scale(1.02); } 100% { transform: scale(1); } }
@keyframes glowshake { 0%, 100% { transform: translateX(0); } 25% { transform: translateX(-2px); } 75% { transform: translateX(2px); } }
@keyframes checkmarkShine { 0% { opacity: 0; transform: scale(0.5); } 50% { opacity: 1; transform: scale(1.1); } 100% { opacity: 1; transform: scale(1); } }
                "#}
            </style>
        </div>
    }
}
