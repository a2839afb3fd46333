//! Personalized marketing copy. Pure functions over the quiz answers; the
//! result page renders their return values verbatim and never inspects them.

use crate::storage::{Gender, QuizData};

pub fn title(gender: Gender) -> &'static str {
    match gender {
        Gender::Hombre => "Por Qué Ella Se Fue",
        Gender::Mujer => "Por Qué Él Se Fue",
    }
}

pub fn loading_message(gender: Gender) -> &'static str {
    match gender {
        Gender::Hombre => "Generando tu protocolo específico para reconquistar a ella...",
        Gender::Mujer => "Generando tu protocolo específico para reconquistar a él...",
    }
}

fn pronoun(gender: Gender) -> &'static str {
    match gender {
        Gender::Hombre => "ella",
        Gender::Mujer => "él",
    }
}

fn pronoun_upper(gender: Gender) -> &'static str {
    match gender {
        Gender::Hombre => "Ella",
        Gender::Mujer => "Él",
    }
}

/// One fragment of the diagnosis narrative. Each rule is evaluated
/// independently and in order; a rule whose condition finds no match falls
/// back to a generic fragment instead of dropping the section.
struct Rule {
    patterns: &'static [&'static str],
    build: fn(Gender, &str) -> String,
}

/// Who-ended fragments. Matching is substring-based because the persisted
/// answers are the raw Spanish option strings.
fn who_ended_fragment(quiz: &QuizData) -> String {
    let gender = quiz.gender();
    let p = pronoun(gender);
    let p_up = pronoun_upper(gender);
    let who = quiz.who_ended.as_str();
    if who.contains("ELLA TERMINÓ") || who.contains("ÉL TERMINÓ") {
        format!(
            "Basado en que {p_up} decidió terminar la relación, entendemos que hubo un desgaste \
             en los \"interruptores de valor\" que {p} percibía en ti."
        )
    } else if who.contains("YO TERMINÉ") {
        format!(
            "Considerando que fuiste tú quien terminó, el desafío ahora es revertir el sentimiento \
             de rechazo que {p} procesó, transformándolo en una nueva oportunidad."
        )
    } else if who.contains("DECISIÓN MUTUA") {
        "Considerando que la decisión fue mutua, el desafío ahora es identificar si aún existe \
         interés genuino de ambas partes y reconstruir la atracción desde cero."
            .to_string()
    } else {
        "Considerando el contexto de la ruptura, el desafío ahora es comprender las dinámicas \
         emocionales que llevaron a este punto y revertirlas estratégicamente."
            .to_string()
    }
}

fn urgency_fragment(quiz: &QuizData) -> String {
    let p = pronoun(quiz.gender());
    let time = quiz.time_separation.as_str();
    if time.contains("MENOS DE 1 SEMANA") || time.contains("1-4 SEMANAS") {
        format!(
            "Estás en la ventana de tiempo IDEAL. El cerebro de {p} aún tiene rastros químicos \
             de tu presencia, lo que facilita la reconexión si actúas ahora."
        )
    } else if time.contains("1-6 MESES") || time.contains("MÁS DE 6 MESES") {
        format!(
            "Aunque ha pasado tiempo ({time}), la neurociencia explica que las memorias \
             emocionales pueden ser reactivadas mediante los estímulos correctos."
        )
    } else {
        format!(
            "Sea cual sea el tiempo transcurrido, las memorias emocionales de {p} pueden ser \
             reactivadas mediante los estímulos correctos."
        )
    }
}

fn contact_fragment(quiz: &QuizData) -> String {
    let situation = quiz.current_situation.as_str();
    let no_contact = ["CONTACTO CERO", "ME IGNORA", "BLOQUEADO"]
        .iter()
        .any(|marker| situation.contains(marker));
    if no_contact {
        "El hecho de que no haya contacto es, irónicamente, tu mayor ventaja. Estamos en la fase \
         de \"limpieza de picos de cortisol\", preparando el terreno para un regreso impactante."
            .to_string()
    } else {
        "El contacto actual indica que el hilo emocional no se ha cortado, pero debemos tener \
         cuidado de no saturar su sistema de dopamina con desesperación."
            .to_string()
    }
}

fn reason_fragment(quiz: &QuizData) -> Option<String> {
    let reason = quiz.reason.as_deref()?.trim();
    if reason.is_empty() {
        return None;
    }
    let p = pronoun(quiz.gender());
    Some(format!(
        "Al analizar que el motivo principal fue \"{reason}\", el protocolo se enfocará en \
         neutralizar esa objeción específica en el subconsciente de {p}."
    ))
}

/// The multi-paragraph diagnosis narrative: fixed opening line, the three
/// mandatory rule fragments, the optional reason fragment, fixed closing.
pub fn diagnosis_copy(quiz: &QuizData) -> String {
    let p = pronoun(quiz.gender());
    let mut paragraphs = vec![
        "No fue por falta de amor.".to_string(),
        who_ended_fragment(quiz),
        urgency_fragment(quiz),
        contact_fragment(quiz),
    ];
    if let Some(fragment) = reason_fragment(quiz) {
        paragraphs.push(fragment);
    }
    paragraphs.push(format!(
        "La clave no es rogar, sino entender la psicología de {p} y actuar de forma estratégica. \
         En el siguiente paso, voy a revelar EXACTAMENTE el paso a paso científico para que {p} \
         sienta que SÍ eres la persona correcta."
    ));
    paragraphs.join("\n\n")
}

/// Short empathetic line under the diagnosis, keyed on separation time and
/// who ended.
pub fn emotional_validation(quiz: &QuizData) -> String {
    let p = pronoun(quiz.gender());
    let mut validation = if quiz.time_separation.contains("MENOS DE 1 SEMANA") {
        format!(
            "Tu separación es reciente. Eso significa que aún hay una ventana de oportunidad \
             donde {p} piensa en ti constantemente. "
        )
    } else if quiz.time_separation.contains("MÁS DE 6 MESES") {
        "Ha pasado tiempo, pero eso no significa que sea imposible. Hay patrones psicológicos \
         que funcionan incluso después de meses. "
            .to_string()
    } else {
        format!(
            "El tiempo que ha pasado es crucial. Estás en una fase donde {p} aún tiene recuerdos \
             frescos, pero los patrones están cambiando. "
        )
    };
    if quiz.who_ended.contains("ELLA TERMINÓ") || quiz.who_ended.contains("ÉL TERMINÓ") {
        validation.push_str(&format!(
            "Y el hecho de que {p} haya terminado es en realidad una ventaja, porque significa \
             que {p} tuvo que tomar una decisión difícil y eso deja una huella emocional."
        ));
    } else if quiz.who_ended.contains("YO TERMINÉ") {
        validation.push_str(&format!(
            "Y el hecho de que tú hayas terminado cambia la dinámica completamente. {} puede \
             estar esperando que tú des el primer paso.",
            pronoun_upper(quiz.gender())
        ));
    }
    validation
}

pub fn window_copy(gender: Gender) -> String {
    let p = pronoun(gender);
    format!(
        "No importa si se separaron hace 3 días o hace 3 meses.\n\n\
         Aquí está la verdad que los psicólogos comportamentales descubrieron:\n\n\
         El cerebro humano opera en ciclos de 72 horas.\n\n\
         Cada vez que tú tomas una ACCIÓN ESTRATÉGICA, el cerebro de {p} entra en un nuevo ciclo \
         de 72 horas donde todo puede cambiar.\n\n\
         En cada una de estas 3 fases, hay acciones CORRECTAS e INCORRECTAS.\n\n\
         ✅ Si actúas correcto en cada fase, {p} te busca.\n\n\
         ❌ Si actúas incorrecto, su cerebro borra la atracción.\n\n\
         Tu plan personalizado revela EXACTAMENTE qué hacer en cada fase."
    )
}

/// One of the three 72-hour-window phase explanations.
#[derive(Clone, PartialEq, Debug)]
pub struct WindowPhaseCopy {
    pub title: &'static str,
    pub time_range: &'static str,
    pub summary: String,
    pub bullets: Vec<String>,
    pub warning: String,
}

pub fn window_phase(gender: Gender, phase: u8) -> WindowPhaseCopy {
    let p_up = pronoun_upper(gender);
    let p = pronoun(gender);
    let opposite = match gender {
        Gender::Hombre => "él",
        Gender::Mujer => "ella",
    };
    match phase {
        1 => WindowPhaseCopy {
            title: "Activación de Curiosidad",
            time_range: "0-24 HORAS",
            summary: format!(
                "{p_up} recibe la primera señal de que algo cambió en ti y su cerebro activa el \
                 \"modo curiosidad\""
            ),
            bullets: vec![
                format!("✨ {p_up} abandona el \"modo alivio\" post-ruptura"),
                "🧠 Su cerebro detecta cambios en tu comportamiento".to_string(),
                format!("💭 Empieza a preguntarse: \"¿Qué está pasando con {opposite}?\""),
                "🔄 Se activa el circuito de curiosidad neurológica".to_string(),
            ],
            warning: format!(
                "⚠️ Si actúas incorrectamente aquí, confirmas que {p} tomó la decisión correcta"
            ),
        },
        2 => WindowPhaseCopy {
            title: "Restauración de Valor Percibido",
            time_range: "24-48 HORAS",
            summary: format!(
                "{p_up} empieza a reevaluar las memorias archivadas y la oxitocina se reactiva"
            ),
            bullets: vec![
                "🧬 La oxitocina (hormona del apego) vuelve a activarse".to_string(),
                format!("💫 Los buenos momentos que {p} había \"olvidado\" regresan a su mente"),
                "🎭 Su cerebro reconstruye tu imagen de forma más positiva".to_string(),
                "🔓 Las defensas emocionales empiezan a debilitarse".to_string(),
            ],
            warning: format!("⚠️ Si presionas demasiado, {p} cierra el ciclo y te bloquea definitivamente"),
        },
        _ => WindowPhaseCopy {
            title: "Reconexión Estratégica",
            time_range: "48-72 HORAS",
            summary: format!(
                "{p_up} siente la necesidad de \"cerrar el ciclo\" emocionalmente y aquí \
                 reapareces con el Protocolo"
            ),
            bullets: vec![
                format!("🎯 {p_up} busca una resolución emocional definitiva"),
                "💝 El apego latente busca expresión consciente".to_string(),
                "🚪 Aquí es donde tú reapareces de forma estratégica".to_string(),
                "⚡ Momento crítico para aplicar el Protocolo de Reconexión".to_string(),
            ],
            warning: "⚠️ 87% de las personas pierden a su ex en esta fase por no saber qué hacer"
                .to_string(),
        },
    }
}

pub fn offer_title(gender: Gender) -> &'static str {
    match gender {
        Gender::Hombre => "Tu Plan para Reconquistar a Ella",
        Gender::Mujer => "Tu Plan para Reconquistar a Él",
    }
}

pub fn features(gender: Gender) -> Vec<String> {
    let p_up = pronoun_upper(gender);
    let (suffix, another) = match gender {
        Gender::Hombre => ("la", "otro"),
        Gender::Mujer => ("lo", "otra"),
    };
    vec![
        format!("📱 MÓDULO 1: Cómo Hablar Con {p_up} (Días 1-7)"),
        format!("👥 MÓDULO 2: Cómo Encontrarte Con {p_up} (Días 8-14)"),
        format!("❤️ MÓDULO 3: Cómo Reconquistar{suffix} (Días 15-21)"),
        format!(
            "🚨 MÓDULO 4: Protocolo de Emergencia (Si {} está con {another})",
            pronoun(gender)
        ),
        "⚡ Guía especial: Las 3 Fases de 72 Horas".to_string(),
        "🎯 Bonos: Scripts de conversación + Planes de acción".to_string(),
        "✅ Garantía: 30 días o tu dinero de vuelta".to_string(),
    ]
}

pub fn cta_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Hombre => "SÍ, QUIERO MI PLAN PARA RECONQUISTAR A ELLA",
        Gender::Mujer => "SÍ, QUIERO MI PLAN PARA RECONQUISTAR A ÉL",
    }
}

pub fn completion_badge(gender: Gender) -> (&'static str, String) {
    let p = pronoun(gender);
    (
        "¡TU ANÁLISIS ESTÁ LISTO!",
        format!(
            "Descubre exactamente por qué {p} se fue y el paso a paso científico para que {p} \
             QUIERA volver"
        ),
    )
}

/// Labels of the progress bar steps shown once the loading screen ends.
pub fn progress_labels() -> [&'static str; 4] {
    ["Diagnóstico", "Vídeo", "Ventana 72h", "Solución"]
}

/// Plain advance-button label for a source phase number, as reported in the
/// progression analytics. The rendered buttons prefix these with an emoji.
pub fn advance_button_label(phase_from: u8) -> &'static str {
    match phase_from {
        1 => "Desbloquear El Vídeo Secreto",
        2 => "Revelar VENTANA DE 72 HORAS",
        _ => "Revelar Mi Plan Personalizado",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(gender: &str, who: &str, time: &str, situation: &str) -> QuizData {
        QuizData {
            gender: gender.to_string(),
            who_ended: who.to_string(),
            time_separation: time.to_string(),
            current_situation: situation.to_string(),
            ..QuizData::default()
        }
    }

    #[test]
    fn recent_breakup_contact_zero_hits_the_expected_branches() {
        let data = quiz("HOMBRE", "ELLA TERMINÓ", "MENOS DE 1 SEMANA", "CONTACTO CERO");
        let copy = diagnosis_copy(&data);
        assert!(copy.starts_with("No fue por falta de amor."));
        assert!(copy.contains("Ella decidió terminar la relación"));
        assert!(copy.contains("ventana de tiempo IDEAL"));
        assert!(copy.contains("tu mayor ventaja"));
        assert!(copy.ends_with("sienta que SÍ eres la persona correcta."));
        // No other branch's text leaks in.
        assert!(!copy.contains("fuiste tú quien terminó"));
        assert!(!copy.contains("la decisión fue mutua"));
        assert!(!copy.contains("hilo emocional"));
        assert!(!copy.contains("el motivo principal fue"));
    }

    #[test]
    fn unknown_answers_fall_back_to_generic_fragments() {
        let data = quiz("HOMBRE", "", "", "");
        let copy = diagnosis_copy(&data);
        assert!(copy.contains("el contexto de la ruptura"));
        assert!(copy.contains("Sea cual sea el tiempo transcurrido"));
        assert!(copy.contains("hilo emocional"));
    }

    #[test]
    fn reason_fragment_only_present_when_given() {
        let mut data = quiz("HOMBRE", "YO TERMINÉ", "1-6 MESES", "HABLAMOS A VECES");
        assert!(!diagnosis_copy(&data).contains("el motivo principal fue"));
        data.reason = Some("celos".to_string());
        assert!(diagnosis_copy(&data).contains("el motivo principal fue \"celos\""));
        data.reason = Some("   ".to_string());
        assert!(!diagnosis_copy(&data).contains("el motivo principal fue"));
    }

    #[test]
    fn copy_flips_pronouns_for_mujer() {
        let data = quiz("MUJER", "ÉL TERMINÓ", "1-4 SEMANAS", "ME IGNORA");
        let copy = diagnosis_copy(&data);
        assert!(copy.contains("Él decidió terminar la relación"));
        assert!(copy.contains("El cerebro de él"));
        assert_eq!(title(Gender::Mujer), "Por Qué Él Se Fue");
        assert_eq!(offer_title(Gender::Mujer), "Tu Plan para Reconquistar a Él");
    }

    #[test]
    fn window_phases_cover_the_full_72_hours() {
        let ranges: Vec<_> = (1..=3)
            .map(|n| window_phase(Gender::Hombre, n).time_range)
            .collect();
        assert_eq!(ranges, vec!["0-24 HORAS", "24-48 HORAS", "48-72 HORAS"]);
        for n in 1..=3 {
            let copy = window_phase(Gender::Hombre, n);
            assert_eq!(copy.bullets.len(), 4);
            assert!(copy.warning.starts_with("⚠️"));
        }
    }

    #[test]
    fn features_list_is_ordered_and_gendered() {
        let features = features(Gender::Hombre);
        assert_eq!(features.len(), 7);
        assert!(features[0].contains("MÓDULO 1"));
        assert!(features[2].contains("Reconquistarla"));
        assert!(super::features(Gender::Mujer)[2].contains("Reconquistarlo"));
    }
}
