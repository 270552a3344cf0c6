//! Conversion of free-form model output into a structured question.
//!
//! Generated text is expected to loosely follow the
//! "Pregunta: / A)..D) / Respuesta correcta:" template, but nothing is
//! guaranteed: the answer line may be missing, options may be unlabeled or
//! incomplete, separators vary between `)` and `.`, and markdown emphasis
//! shows up regularly. The parser absorbs all of that. It is a pure
//! function, it never fails, and malformed input degrades to empty or
//! absent fields instead of errors.
//!
//! Extraction runs in fixed order: normalize, pull out the answer label,
//! split question block from options block on the first blank line, scan for
//! labeled option lines, and only if that finds nothing fall back to
//! treating each non-blank line as one option.

use crate::models::{AnswerOption, OptionLabel, ParsedQuestion};

/// Question text used when the model returned nothing at all.
pub const EMPTY_RESPONSE_SENTINEL: &str = "No se recibió respuesta del servidor";

/// Question text used when the response has no question segment.
pub const MISSING_QUESTION_SENTINEL: &str = "Pregunta no encontrada";

/// Answer phrases recognized in a response, tried in order. The first phrase
/// that matches anywhere in the text wins, even if a later phrase would
/// match earlier.
const ANSWER_PHRASES: [&str; 3] = [
    "respuesta correcta:",
    "correcta:",
    "la respuesta correcta es",
];

const QUESTION_LABEL: &str = "pregunta:";

/// Maximum number of options recovered by the positional fallback.
const MAX_OPTIONS: usize = 4;

/// Parse raw model output into a [`ParsedQuestion`].
///
/// Always returns a best-effort result; no input, however malformed, causes
/// an error. Callers that care about degraded parses should check for empty
/// `options` or an absent `correct_answer`. The input is preserved verbatim
/// in `raw_text`.
pub fn parse_question(raw_text: &str) -> ParsedQuestion {
    if raw_text.trim().is_empty() {
        return ParsedQuestion {
            question_text: EMPTY_RESPONSE_SENTINEL.to_string(),
            options: Vec::new(),
            correct_answer: None,
            raw_text: raw_text.to_string(),
        };
    }

    let mut text = normalize(raw_text);

    let correct_answer = find_answer(&text).map(|found| {
        text.replace_range(found.start..found.line_end, "");
        found.label
    });
    let text = text.trim();

    let (question_block, options_block) = split_blocks(text);

    let question_text = match question_block {
        Some(block) => strip_question_label(&block).trim().to_string(),
        None => MISSING_QUESTION_SENTINEL.to_string(),
    };

    let mut options = extract_labeled_options(&options_block);
    if options.is_empty() {
        options = extract_fallback_options(&options_block);
    }

    ParsedQuestion {
        question_text,
        options,
        correct_answer,
        raw_text: raw_text.to_string(),
    }
}

/// Working copy: uniform line endings, no markdown emphasis, trimmed.
fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('*', "").trim().to_string()
}

struct AnswerMatch {
    /// Byte offset of the phrase start.
    start: usize,
    /// Byte offset of the end of the line carrying the label.
    line_end: usize,
    label: OptionLabel,
}

fn find_answer(text: &str) -> Option<AnswerMatch> {
    ANSWER_PHRASES
        .iter()
        .find_map(|phrase| find_answer_phrase(text, phrase))
}

/// First `<phrase> <label>` occurrence, ASCII case-insensitive. Whitespace
/// between phrase and label may span lines; the reported range runs from the
/// phrase start to the end of the label's line, which is exactly what gets
/// stripped from the working text.
fn find_answer_phrase(text: &str, phrase: &str) -> Option<AnswerMatch> {
    let mut from = 0;
    while let Some(start) = find_ascii_ci(text, phrase, from) {
        let after = start + phrase.len();
        let rest = &text[after..];
        let label_text = rest.trim_start();
        if let Some(label) = label_text.chars().next().and_then(OptionLabel::from_char) {
            let label_pos = after + (rest.len() - label_text.len());
            let line_end = text[label_pos..]
                .find('\n')
                .map_or(text.len(), |i| label_pos + i);
            return Some(AnswerMatch {
                start,
                line_end,
                label,
            });
        }
        from = start + 1;
    }
    None
}

/// Byte-wise ASCII case-insensitive substring search. Safe on UTF-8 input
/// because the needles are pure ASCII: a match can only start at a char
/// boundary.
fn find_ascii_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || from > h.len() || h.len() - from < n.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Split the working text on blank-line runs. The first group of non-blank
/// lines is the question block; the remaining groups, rejoined with single
/// newlines, form the options block.
fn split_blocks(text: &str) -> (Option<String>, String) {
    let mut blocks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    let mut blocks = blocks.into_iter();
    let question = blocks.next();
    let options = blocks.collect::<Vec<_>>().join("\n");
    (question, options)
}

fn strip_question_label(block: &str) -> &str {
    let label_len = QUESTION_LABEL.len();
    if block.len() >= label_len
        && block.as_bytes()[..label_len].eq_ignore_ascii_case(QUESTION_LABEL.as_bytes())
    {
        block[label_len..].trim_start()
    } else {
        block
    }
}

fn extract_labeled_options(block: &str) -> Vec<AnswerOption> {
    block.split('\n').filter_map(parse_option_line).collect()
}

/// A labeled option line: `A) text` or `A. text`, label anchored at the line
/// start, at least one character after the separator. Labels are matched
/// case-insensitively and kept in discovery order; duplicates are not
/// rejected, so malformed input can yield two options with the same letter.
fn parse_option_line(line: &str) -> Option<AnswerOption> {
    let mut chars = line.chars();
    let label = chars.next().and_then(OptionLabel::from_char)?;
    if !matches!(chars.next(), Some(')' | '.')) {
        return None;
    }
    let rest = chars.as_str();
    if rest.is_empty() {
        return None;
    }
    Some(AnswerOption {
        label,
        text: rest.trim().to_string(),
    })
}

/// Positional fallback when no labeled option line was found: each non-blank
/// line becomes one option, labels assigned A-D by position, at most
/// [`MAX_OPTIONS`] lines. A leading label the anchored scan missed (leading
/// whitespace, usually) is still stripped from the text.
fn extract_fallback_options(block: &str) -> Vec<AnswerOption> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_OPTIONS)
        .enumerate()
        .filter_map(|(index, line)| {
            let label = OptionLabel::from_index(index)?;
            Some(AnswerOption {
                label,
                text: strip_option_prefix(line).to_string(),
            })
        })
        .collect()
}

fn strip_option_prefix(line: &str) -> &str {
    let mut chars = line.chars();
    if chars.next().and_then(OptionLabel::from_char).is_some()
        && matches!(chars.next(), Some(')' | '.'))
    {
        chars.as_str().trim_start()
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "Pregunta: ¿Qué comando muestra el espacio en disco en Linux?\n\nA) df -h\nB) ls -l\nC) cat /proc/meminfo\nD) netstat -tuln\n\nRespuesta correcta: A";

    fn labels(parsed: &ParsedQuestion) -> Vec<OptionLabel> {
        parsed.options.iter().map(|option| option.label).collect()
    }

    fn texts(parsed: &ParsedQuestion) -> Vec<&str> {
        parsed
            .options
            .iter()
            .map(|option| option.text.as_str())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        for input in ["", "   ", "\n\t\n"] {
            let parsed = parse_question(input);
            assert_eq!(parsed.question_text, EMPTY_RESPONSE_SENTINEL);
            assert!(parsed.options.is_empty());
            assert_eq!(parsed.correct_answer, None);
            assert_eq!(parsed.raw_text, input);
        }
    }

    #[test]
    fn test_well_formed_template() {
        let parsed = parse_question(WELL_FORMED);
        assert_eq!(
            parsed.question_text,
            "¿Qué comando muestra el espacio en disco en Linux?"
        );
        assert_eq!(
            labels(&parsed),
            [
                OptionLabel::A,
                OptionLabel::B,
                OptionLabel::C,
                OptionLabel::D
            ]
        );
        assert_eq!(
            texts(&parsed),
            ["df -h", "ls -l", "cat /proc/meminfo", "netstat -tuln"]
        );
        assert_eq!(parsed.correct_answer, Some(OptionLabel::A));
        assert_eq!(parsed.raw_text, WELL_FORMED);
    }

    #[test]
    fn test_answer_phrase_variants() {
        for answer_line in [
            "Respuesta correcta: B",
            "respuesta correcta: b",
            "Correcta: B",
            "La respuesta correcta es B",
            "la respuesta correcta es b",
        ] {
            let input = format!("¿x?\n\nA) a\nB) b\n\n{}", answer_line);
            let parsed = parse_question(&input);
            assert_eq!(parsed.correct_answer, Some(OptionLabel::B), "{}", answer_line);
            // The matched line is stripped and must not leak into the options.
            assert_eq!(parsed.options.len(), 2, "{}", answer_line);
        }
    }

    #[test]
    fn test_answer_label_uppercased() {
        let parsed = parse_question("¿x?\n\nla respuesta correcta es c");
        assert_eq!(parsed.correct_answer, Some(OptionLabel::C));
    }

    #[test]
    fn test_missing_answer_label() {
        let parsed = parse_question("Pregunta: ¿x?\n\nA) a\nB) b");
        assert_eq!(parsed.correct_answer, None);
        assert_eq!(parsed.options.len(), 2);
    }

    #[test]
    fn test_answer_line_adjacent_to_options() {
        let parsed = parse_question("¿x?\n\nA) a\nB) b\nRespuesta correcta: B");
        assert_eq!(parsed.correct_answer, Some(OptionLabel::B));
        assert_eq!(labels(&parsed), [OptionLabel::A, OptionLabel::B]);
    }

    #[test]
    fn test_answer_only_input() {
        let parsed = parse_question("Respuesta correcta: A");
        assert_eq!(parsed.question_text, MISSING_QUESTION_SENTINEL);
        assert!(parsed.options.is_empty());
        assert_eq!(parsed.correct_answer, Some(OptionLabel::A));
    }

    #[test]
    fn test_fallback_options_by_line() {
        let parsed = parse_question("¿x?\n\nfirst\nsecond");
        assert_eq!(labels(&parsed), [OptionLabel::A, OptionLabel::B]);
        assert_eq!(texts(&parsed), ["first", "second"]);
    }

    #[test]
    fn test_fallback_truncates_at_four_lines() {
        let parsed = parse_question("¿x?\n\nuno\ndos\ntres\ncuatro\ncinco\nseis");
        assert_eq!(
            labels(&parsed),
            [
                OptionLabel::A,
                OptionLabel::B,
                OptionLabel::C,
                OptionLabel::D
            ]
        );
        assert_eq!(texts(&parsed), ["uno", "dos", "tres", "cuatro"]);
    }

    #[test]
    fn test_fallback_strips_missed_label_prefix() {
        // Leading whitespace defeats the anchored scan; the fallback still
        // recognizes the label prefix and removes it.
        let parsed = parse_question("¿x?\n\n  A) uno\n  B) dos");
        assert_eq!(texts(&parsed), ["uno", "dos"]);
        assert_eq!(labels(&parsed), [OptionLabel::A, OptionLabel::B]);
    }

    #[test]
    fn test_markdown_emphasis_stripped() {
        let parsed = parse_question("**Pregunta:** ¿x?");
        assert_eq!(parsed.question_text, "¿x?");
    }

    #[test]
    fn test_dot_separator_and_lowercase_labels() {
        let parsed = parse_question("¿x?\n\na. uno\nb) dos");
        assert_eq!(labels(&parsed), [OptionLabel::A, OptionLabel::B]);
        assert_eq!(texts(&parsed), ["uno", "dos"]);
    }

    #[test]
    fn test_duplicate_labels_kept() {
        let parsed = parse_question("¿x?\n\nA) uno\nA) dos");
        assert_eq!(labels(&parsed), [OptionLabel::A, OptionLabel::A]);
    }

    #[test]
    fn test_degenerate_option_kept() {
        let parsed = parse_question("¿x?\n\nA)  \nB) b");
        assert_eq!(parsed.options[0].text, "");
        assert_eq!(parsed.options[1].text, "b");
    }

    #[test]
    fn test_bare_label_line_skipped_by_labeled_scan() {
        // "A)" with nothing after the separator is not a labeled option line;
        // the fallback turns it into a positional option with empty text.
        let parsed = parse_question("¿x?\n\nA)\nB)");
        assert_eq!(labels(&parsed), [OptionLabel::A, OptionLabel::B]);
        assert_eq!(texts(&parsed), ["", ""]);
    }

    #[test]
    fn test_round_trip_stability() {
        let first = parse_question(WELL_FORMED);

        let mut rebuilt = format!("Pregunta: {}\n\n", first.question_text);
        for option in &first.options {
            rebuilt.push_str(&format!("{}) {}\n", option.label, option.text));
        }
        rebuilt.push_str(&format!(
            "\nRespuesta correcta: {}",
            first.correct_answer.unwrap()
        ));

        let second = parse_question(&rebuilt);
        assert_eq!(second.question_text, first.question_text);
        assert_eq!(second.options, first.options);
        assert_eq!(second.correct_answer, first.correct_answer);
    }

    #[test]
    fn test_raw_text_untouched_by_normalization() {
        let input = "Pregunta: **¿x?**\r\n\r\nA) a\r\n";
        let parsed = parse_question(input);
        assert_eq!(parsed.raw_text, input);
        assert_eq!(parsed.question_text, "¿x?");
        assert_eq!(texts(&parsed), ["a"]);
    }

    #[test]
    fn test_question_label_without_text() {
        // "Pregunta:" alone is a present-but-empty question segment, not a
        // missing one; the sentinel is reserved for the latter.
        let parsed = parse_question("Pregunta:\n\nA) a");
        assert_eq!(parsed.question_text, "");
    }

    #[test]
    fn test_emphasis_only_input() {
        let parsed = parse_question("***");
        assert_eq!(parsed.question_text, MISSING_QUESTION_SENTINEL);
        assert!(parsed.options.is_empty());
        assert_eq!(parsed.correct_answer, None);
    }

    #[test]
    fn test_multiline_question_block() {
        let parsed = parse_question("Pregunta: primera línea\nsegunda línea\n\nA) a");
        assert_eq!(parsed.question_text, "primera línea\nsegunda línea");
    }

    #[test]
    fn test_pathological_inputs_never_fail() {
        let many_options = "A) x\n".repeat(2000);
        let inputs = [
            "\n\n\n\n",
            "Respuesta correcta:",
            "Respuesta correcta: Z",
            many_options.as_str(),
            "a)",
            ")",
            "Correcta:C\n\nCorrecta: C",
        ];
        for input in inputs {
            let parsed = parse_question(input);
            assert_eq!(parsed.raw_text, input);
        }
    }
}
