use crate::effects;
use crate::storage::{self, Gender, LocalStore, QuizAnswer, QuizData};
use crate::tracking::{DataLayerSink, EventSink, TrackingEvent};
use crate::Route;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const TOTAL_QUESTIONS: u32 = 8;
const TYPING_PAUSE_MS: u32 = 700;
const SKIPPED_REASON: &str = "Prefiero no decirlo";

/// The scripted interview. Answer strings are load-bearing downstream: the
/// diagnosis copy branches on them verbatim, so they are defined here once
/// and never reworded.
fn question_text(step: u32, gender: Gender) -> String {
    match step {
        1 => "Para crear tu análisis personalizado necesito conocerte. ¿Eres hombre o mujer?".to_string(),
        2 => "¿Cuánto tiempo llevan separados?".to_string(),
        3 => "¿Quién terminó la relación?".to_string(),
        4 => "¿Cuánto tiempo estuvieron juntos?".to_string(),
        5 => "¿Cómo está el contacto entre ustedes ahora mismo?".to_string(),
        6 => match gender {
            Gender::Hombre => "¿Sabes si ella está saliendo con otra persona?".to_string(),
            Gender::Mujer => "¿Sabes si él está saliendo con otra persona?".to_string(),
        },
        7 => "¿Qué tan comprometido estás con recuperar esta relación?".to_string(),
        _ => "Última pregunta. En tus palabras, ¿cuál crees que fue el motivo principal de la ruptura?".to_string(),
    }
}

/// Option buttons for a step. Empty means the step takes free text.
fn options(step: u32, gender: Gender) -> Vec<&'static str> {
    match step {
        1 => vec!["HOMBRE", "MUJER"],
        2 => vec!["MENOS DE 1 SEMANA", "1-4 SEMANAS", "1-6 MESES", "MÁS DE 6 MESES"],
        3 => match gender {
            Gender::Hombre => vec!["ELLA TERMINÓ", "YO TERMINÉ", "DECISIÓN MUTUA"],
            Gender::Mujer => vec!["ÉL TERMINÓ", "YO TERMINÉ", "DECISIÓN MUTUA"],
        },
        4 => vec!["MENOS DE 6 MESES", "6 MESES A 1 AÑO", "1-3 AÑOS", "MÁS DE 3 AÑOS"],
        5 => vec!["CONTACTO CERO", "ME IGNORA", "BLOQUEADO", "HABLAMOS A VECES"],
        6 => vec!["SALE CON OTRA PERSONA", "SIGUE SIN PAREJA", "NO LO SÉ"],
        7 => vec!["HARÉ LO QUE SEA NECESARIO", "TOTALMENTE", "QUIERO INTENTARLO"],
        _ => vec![],
    }
}

fn apply_answer(data: &mut QuizData, step: u32, answer: &str) {
    match step {
        1 => data.gender = answer.to_string(),
        2 => data.time_separation = answer.to_string(),
        3 => data.who_ended = answer.to_string(),
        4 => data.relationship_duration = answer.to_string(),
        5 => data.current_situation = answer.to_string(),
        6 => data.ex_situation = answer.to_string(),
        7 => data.commitment_level = answer.to_string(),
        _ => {
            if answer != SKIPPED_REASON {
                data.reason = Some(answer.to_string());
            }
        }
    }
    data.answers.push(QuizAnswer {
        question_id: step,
        question: question_text(step, data.gender()),
        answer: answer.to_string(),
    });
}

#[function_component(Chat)]
pub fn chat() -> Html {
    let navigator = use_navigator();

    let step = use_state(|| 1u32);
    let typing = use_state(|| false);
    let transcript = use_state(Vec::<(String, String)>::new);
    let data = use_mut_ref(QuizData::default);
    // Holds the typing pause so it survives the render; replaced per answer,
    // dropped with the component.
    let pending = use_mut_ref(|| None::<Timeout>);
    let reason_ref = use_node_ref();
    let bottom_ref = use_node_ref();

    let user_count = storage::user_count(&LocalStore);

    use_effect_with_deps(
        move |_| {
            DataLayerSink.push(TrackingEvent::chat_page_view(effects::current_href()));
            || ()
        },
        (),
    );

    {
        let bottom_ref = bottom_ref.clone();
        use_effect_with_deps(
            move |_| {
                effects::scroll_into_view(&bottom_ref);
                || ()
            },
            (*step, *typing),
        );
    }

    let submit_answer = {
        let step = step.clone();
        let typing = typing.clone();
        let transcript = transcript.clone();
        let data = data.clone();
        let pending = pending.clone();
        Callback::from(move |answer: String| {
            let current = *step;
            if current > TOTAL_QUESTIONS || *typing {
                return;
            }
            if current == 1 {
                DataLayerSink.push(TrackingEvent::chat_started());
            }
            let question = question_text(current, data.borrow().gender());
            apply_answer(&mut data.borrow_mut(), current, &answer);
            storage::save_quiz_data(&LocalStore, &data.borrow());
            DataLayerSink.push(TrackingEvent::question_answered(
                current,
                question.clone(),
                answer.clone(),
            ));

            let mut log = (*transcript).clone();
            log.push((question, answer));
            transcript.set(log);

            if current == TOTAL_QUESTIONS {
                DataLayerSink.push(TrackingEvent::chat_completed());
                step.set(current + 1);
                return;
            }

            typing.set(true);
            let step = step.clone();
            let typing = typing.clone();
            *pending.borrow_mut() = Some(Timeout::new(TYPING_PAUSE_MS, move || {
                typing.set(false);
                step.set(current + 1);
            }));
        })
    };

    let on_reason_submit = {
        let submit_answer = submit_answer.clone();
        let reason_ref = reason_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = reason_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let value = input.value();
            if value.trim().is_empty() {
                return;
            }
            input.set_value("");
            submit_answer.emit(value.trim().to_string());
        })
    };

    let on_reason_skip = {
        let submit_answer = submit_answer.clone();
        Callback::from(move |_: MouseEvent| {
            submit_answer.emit(SKIPPED_REASON.to_string());
        })
    };

    let on_see_plan = Callback::from(move |_: MouseEvent| {
        DataLayerSink.push(TrackingEvent::chat_cta_click());
        effects::scroll_to_top();
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Resultado);
        }
    });

    let gender = data.borrow().gender();
    let current = *step;
    let completed = current > TOTAL_QUESTIONS;
    let answered = current.saturating_sub(1).min(TOTAL_QUESTIONS);

    html! {
        <div class="chat-container">
            <div class="chat-header">
                <h1>{"Análisis de Reconquista"}</h1>
                <p class="live-count">{format!("🟢 {user_count} personas están siendo analizadas ahora")}</p>
                <div class="chat-progress-outer">
                    <div
                        class="chat-progress-inner"
                        style={format!("width: {}%;", 100 * answered / TOTAL_QUESTIONS)}
                    ></div>
                </div>
            </div>

            <div class="chat-log">
                { (*transcript).iter().map(|(question, answer)| html! {
                    <>
                        <div class="bubble bot">{question}</div>
                        <div class="bubble user">{answer}</div>
                    </>
                }).collect::<Html>() }

                {
                    if *typing {
                        html! { <div class="bubble bot typing">{"..."}</div> }
                    } else if completed {
                        html! {
                            <div class="chat-complete fade-in">
                                <div class="bubble bot">
                                    {"✅ Análisis completado. Tu diagnóstico personalizado está listo."}
                                </div>
                                <button class="chat-cta" onclick={on_see_plan}>
                                    {"🔓 VER MI PLAN PERSONALIZADO"}
                                </button>
                            </div>
                        }
                    } else {
                        let opts = options(current, gender);
                        html! {
                            <>
                                <div class="bubble bot">{question_text(current, gender)}</div>
                                {
                                    if opts.is_empty() {
                                        html! {
                                            <div class="reason-input-row">
                                                <input
                                                    ref={reason_ref.clone()}
                                                    class="reason-input"
                                                    type="text"
                                                    placeholder="Escribe aquí..."
                                                    maxlength="200"
                                                />
                                                <button class="option-button" onclick={on_reason_submit}>
                                                    {"Enviar"}
                                                </button>
                                                <button class="option-button skip" onclick={on_reason_skip}>
                                                    {"Omitir"}
                                                </button>
                                            </div>
                                        }
                                    } else {
                                        html! {
                                            <div class="options-column">
                                                { opts.into_iter().map(|option| {
                                                    let submit_answer = submit_answer.clone();
                                                    html! {
                                                        <button
                                                            class="option-button"
                                                            onclick={Callback::from(move |_| {
                                                                submit_answer.emit(option.to_string());
                                                            })}
                                                        >
                                                            {option}
                                                        </button>
                                                    }
                                                }).collect::<Html>() }
                                            </div>
                                        }
                                    }
                                }
                            </>
                        }
                    }
                }
                <div ref={bottom_ref.clone()}></div>
            </div>

            <style>
                {r#"
.chat-container { max-width: 600px; margin: 0 auto; min-height: 100vh; display: flex; flex-direction: column; color: white; padding: 16px; }
.chat-header { text-align: center; padding: 12px 0; }
.chat-header h1 { font-size: 1.4rem; margin: 0 0 6px; }
.live-count { color: #4ade80; font-size: 0.85rem; margin: 0 0 10px; }
.chat-progress-outer { height: 6px; background: rgba(255,255,255,0.15); border-radius: 3px; overflow: hidden; }
.chat-progress-inner { height: 100%; background: #eab308; transition: width 0.4s ease; }
.chat-log { flex: 1; display: flex; flex-direction: column; gap: 10px; padding: 16px 0; }
.bubble { max-width: 85%; padding: 12px 16px; border-radius: 16px; line-height: 1.5; }
.bubble.bot { background: rgba(255,255,255,0.1); align-self: flex-start; border-bottom-left-radius: 4px; }
.bubble.user { background: #10b981; color: black; font-weight: 600; align-self: flex-end; border-bottom-right-radius: 4px; }
.bubble.typing { letter-spacing: 3px; animation: blink 1s infinite; }
.options-column { display: flex; flex-direction: column; gap: 8px; align-self: flex-end; width: 85%; }
.option-button { background: rgba(234, 179, 8, 0.15); border: 2px solid #eab308; color: #fde047; font-weight: 700; border-radius: 12px; padding: 12px; cursor: pointer; }
.option-button:hover { background: rgba(234, 179, 8, 0.35); }
.option-button.skip { border-color: rgba(255,255,255,0.3); color: rgba(255,255,255,0.6); }
.reason-input-row { display: flex; flex-direction: column; gap: 8px; align-self: flex-end; width: 85%; }
.reason-input { padding: 12px; border-radius: 12px; border: 2px solid rgba(255,255,255,0.3); background: rgba(0,0,0,0.4); color: white; }
.chat-complete { display: flex; flex-direction: column; gap: 14px; }
.chat-cta { background: #10b981; color: black; font-weight: 900; font-size: 1.1rem; padding: 18px; border-radius: 12px; border: 3px solid white; cursor: pointer; animation: pulse 1.5s infinite; }
.fade-in { animation: fadeIn 0.6s ease-in-out; }
@keyframes blink { 0%, 100% { opacity: 0.4; } 50% { opacity: 1; } }
@keyframes pulse { 0% { transform: scale(1); } 70% { transform: scale(1.02); } 100% { transform: scale(1); } }
@keyframes fadeIn { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: translateY(0); } }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_has_a_prompt_and_options_until_the_free_text_step() {
        for step in 1..TOTAL_QUESTIONS {
            assert!(!question_text(step, Gender::Hombre).is_empty());
            assert!(!options(step, Gender::Hombre).is_empty(), "step {step} has no options");
        }
        assert!(options(TOTAL_QUESTIONS, Gender::Hombre).is_empty());
    }

    #[test]
    fn who_ended_options_follow_the_declared_gender() {
        assert!(options(3, Gender::Hombre).contains(&"ELLA TERMINÓ"));
        assert!(options(3, Gender::Mujer).contains(&"ÉL TERMINÓ"));
    }

    #[test]
    fn answers_land_in_their_fields_and_in_the_transcript() {
        let mut data = QuizData::default();
        apply_answer(&mut data, 1, "MUJER");
        apply_answer(&mut data, 2, "MENOS DE 1 SEMANA");
        apply_answer(&mut data, 5, "CONTACTO CERO");
        assert_eq!(data.gender, "MUJER");
        assert_eq!(data.gender(), Gender::Mujer);
        assert_eq!(data.time_separation, "MENOS DE 1 SEMANA");
        assert_eq!(data.current_situation, "CONTACTO CERO");
        assert_eq!(data.answers.len(), 3);
        assert_eq!(data.answers[2].question_id, 5);
    }

    #[test]
    fn skipped_reason_stays_unset() {
        let mut data = QuizData::default();
        apply_answer(&mut data, TOTAL_QUESTIONS, SKIPPED_REASON);
        assert_eq!(data.reason, None);
        apply_answer(&mut data, TOTAL_QUESTIONS, "celos constantes");
        assert_eq!(data.reason.as_deref(), Some("celos constantes"));
    }
}
