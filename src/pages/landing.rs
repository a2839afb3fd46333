use crate::effects;
use crate::tracking::{DataLayerSink, EventSink, TrackingEvent};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigator = use_navigator();

    // UTM capture happens once at the app root, which sees the same query
    // and picks the landing whitelist for this route.
    use_effect_with_deps(
        move |_| {
            DataLayerSink.push(TrackingEvent::landing_page_view(effects::current_href()));
            || ()
        },
        (),
    );

    let on_cta = Callback::from(move |_: MouseEvent| {
        DataLayerSink.push(TrackingEvent::landing_cta_click());
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Chat);
        }
    });

    html! {
        <div class="landing-container">
            <div class="content-wrapper">
                <main class="landing-main">
                    <h1 class="headline">
                        <span class="alert-emoji">{"⚠️"}</span>
                        <span class="headline-text">
                            <span class="highlight-orange">{"ATENCIÓN"}</span>
                            {": Hay un "}
                            <span class="highlight-orange-italic">{"truco sucio"}</span>
                            {", pero "}
                            <span class="highlight-orange">{"efectivo"}</span>
                            {" para recuperar a tu ex... 💔, ¡y "}
                            <span class="highlight-orange">{"está aquí"}</span>
                            {"! Entonces no uses "}
                            <span class="highlight-orange">{"esto 👇"}</span>
                            {", si no estás listo para que "}
                            <span class="highlight-orange">{"vuelva rogando"}</span>
                            {"!"}
                        </span>
                    </h1>

                    <div class="cta-section">
                        <button class="landing-cta" onclick={on_cta}>
                            <span class="cta-icon">{"⏰"}</span>
                            <span>{"DESCUBRIR ANTES QUE SEA TARDE"}</span>
                        </button>
                    </div>
                </main>

                <footer class="landing-footer">
                    <p class="disclaimer">{"Análisis 100% privado y confidencial"}</p>
                </footer>
            </div>

            <style>
                {r#"
.landing-container { min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #000; overflow: hidden; }
.content-wrapper { width: 100%; max-width: 800px; padding: 2rem; }
.landing-main { display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 3rem; min-height: 70vh; }
.headline { text-align: center; font-size: 2.5rem; line-height: 1.3; color: #fff; font-weight: 700; margin: 0; display: flex; flex-direction: column; align-items: center; gap: 1rem; }
.alert-emoji { font-size: 4rem; animation: pulse 2s infinite; }
.headline-text { font-size: 2.2rem; font-weight: 700; line-height: 1.3; }
.highlight-orange, .highlight-orange-italic { background: linear-gradient(135deg, #FFB800 0%, #FF8C00 100%); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; font-weight: 800; }
.highlight-orange-italic { font-style: italic; }
.cta-section { width: 100%; display: flex; justify-content: center; }
.landing-cta { background: linear-gradient(135deg, #ff3b3b 0%, #ff6b6b 100%); color: #fff; border: none; border-radius: 16px; padding: 2rem 3rem; font-size: 1.5rem; font-weight: 700; cursor: pointer; box-shadow: 0 8px 24px rgba(255, 59, 59, 0.4); display: flex; align-items: center; justify-content: center; gap: 1rem; min-width: 90%; text-transform: uppercase; letter-spacing: 1px; animation: pulse-cta 2s ease-in-out infinite; }
.landing-cta:hover { transform: translateY(-4px) scale(1.05); animation: none; }
.cta-icon { font-size: 2rem; }
.landing-footer { text-align: center; padding: 2rem 0; margin-top: 4rem; }
.disclaimer { font-size: 0.85rem; color: rgba(255, 255, 255, 0.5); margin: 0; }
@keyframes pulse { 0%, 100% { opacity: 1; transform: scale(1); } 50% { opacity: 0.7; transform: scale(1.1); } }
@keyframes pulse-cta { 0%, 100% { transform: scale(1); box-shadow: 0 8px 24px rgba(255, 59, 59, 0.4); } 50% { transform: scale(1.05); box-shadow: 0 12px 32px rgba(255, 59, 59, 0.7); } }
@media (max-width: 768px) {
  .headline { font-size: 1.8rem; }
  .alert-emoji { font-size: 3rem; }
  .headline-text { font-size: 1.6rem; }
  .landing-cta { padding: 1.5rem 2rem; font-size: 1.2rem; min-width: 100%; }
}
                "#}
            </style>
        </div>
    }
}
