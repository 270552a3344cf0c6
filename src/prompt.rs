//! Builder for the question-generation prompt sent to the model.
//!
//! The prompt pins the response to the template the parser expects and, when
//! history is available, lists recent questions the model should not repeat.

/// Theme used when the caller provides none.
pub const DEFAULT_THEME: &str = "Test general";

/// Difficulty level used when the caller provides none.
pub const DEFAULT_LEVEL: &str = "intermedio";

/// How many recent questions are echoed back as repetition hints.
const RECENT_HINTS: usize = 3;

/// Build the examiner prompt for `theme` at `level`.
///
/// When `previous_questions` is non-empty, its last [`RECENT_HINTS`] entries
/// are included as a "do not repeat" block, oldest first.
pub fn build_prompt(theme: &str, level: &str, previous_questions: &[&str]) -> String {
    let avoid_repetition = if previous_questions.is_empty() {
        String::new()
    } else {
        let recent =
            &previous_questions[previous_questions.len().saturating_sub(RECENT_HINTS)..];
        format!(
            "\n\nPREGUNTAS RECIENTES A EVITAR:\n{}\n",
            recent.join("\n")
        )
    };

    format!(
        "ERES UN EXAMINADOR PROFESIONAL. GENERA EXCLUSIVAMENTE PREGUNTAS TIPO TEST CON 4 OPCIONES (A-D) Y 1 RESPUESTA CORRECTA.

TEMA: {theme}
NIVEL: {level}
{avoid_repetition}

FORMATO OBLIGATORIO (COPIA ESTA ESTRUCTURA):

Pregunta: [Tu pregunta aquí]

A) [Opción A]
B) [Opción B]
C) [Opción C]
D) [Opción D]

Respuesta correcta: [Letra]

REGLAS ABSOLUTAS:
1. ¡NUNCA omitas las opciones A-D!
2. ¡Siempre incluye \"Respuesta correcta:\"!
3. ¡Solo 4 opciones exactamente!
4. ¡No añadas explicaciones adicionales!
5. ¡Mantén el formato línea por línea!"
    )
}
