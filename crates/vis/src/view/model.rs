//! Model-name helpers shared by the prebuilt views.

use crate::data::Data;

const LOG_VIEWER_COLUMN: &str = "log_viewer";

// Families whose display casing differs from plain capitalization.
// GPT keeps its hyphenated version ("GPT-4o"), the others take a
// space ("Claude 3.5 Sonnet").
const FAMILIES: [(&str, &str, bool); 10] = [
    ("gpt", "GPT", true),
    ("claude", "Claude", false),
    ("gemini", "Gemini", false),
    ("llama", "Llama", false),
    ("mistral", "Mistral", false),
    ("mixtral", "Mixtral", false),
    ("qwen", "Qwen", false),
    ("deepseek", "DeepSeek", false),
    ("grok", "Grok", false),
    ("phi", "Phi", true),
];

/// Appends a "Log Viewer" tooltip channel when the data source carries
/// a log viewer URL column.
pub fn log_viewer_channel(data: &Data, channels: &mut Vec<(String, String)>) {
    if data.contains_column(LOG_VIEWER_COLUMN) {
        channels.push(("Log Viewer".to_owned(), LOG_VIEWER_COLUMN.to_owned()));
    }
}

/// A short display name for a raw model identifier.
///
/// Strips the provider prefix and any trailing release date, joins
/// split version digits (`3-5` becomes `3.5`) and applies the casing
/// of known model families, e.g. `openai/gpt-4o-mini-2024-07-18`
/// becomes `GPT-4o Mini`.
pub fn model_display_name(model: &str) -> String {
    let name = model.rsplit('/').next().unwrap_or(model);
    let mut parts: Vec<&str> = name.split('-').filter(|part| !part.is_empty()).collect();
    strip_release_date(&mut parts);

    if parts.is_empty() {
        return name.to_owned();
    }

    let family = FAMILIES
        .iter()
        .find(|(raw, _, _)| parts[0].eq_ignore_ascii_case(raw));

    let mut words: Vec<String> = Vec::with_capacity(parts.len());
    match family {
        Some((_, display, _)) => words.push((*display).to_owned()),
        None => words.push(capitalize(parts[0])),
    }

    let mut index = 1;
    while index < parts.len() {
        // split version digits read as one dotted number
        if is_version_digit(parts[index]) {
            let mut version = parts[index].to_owned();
            while index + 1 < parts.len() && is_version_digit(parts[index + 1]) {
                version.push('.');
                version.push_str(parts[index + 1]);
                index += 1;
            }
            words.push(version);
        } else if parts[index].starts_with(|c: char| c.is_ascii_digit()) {
            words.push(parts[index].to_owned());
        } else {
            words.push(capitalize(parts[index]));
        }
        index += 1;
    }

    if let Some((_, _, hyphenated)) = family
        && *hyphenated
        && words.len() > 1
        && words[1].starts_with(|c: char| c.is_ascii_digit())
    {
        let version = words.remove(1);
        words[0] = format!("{}-{version}", words[0]);
    }

    words.join(" ")
}

fn strip_release_date(parts: &mut Vec<&str>) {
    let digits = |part: &str, count: usize| {
        part.len() == count && part.chars().all(|c| c.is_ascii_digit())
    };

    if let Some(last) = parts.last()
        && digits(last, 8)
        && parts.len() > 1
    {
        parts.pop();
    } else if parts.len() > 3 {
        let tail = &parts[parts.len() - 3..];
        if digits(tail[0], 4) && digits(tail[1], 2) && digits(tail[2], 2) {
            parts.truncate(parts.len() - 3);
        }
    }
}

fn is_version_digit(part: &str) -> bool {
    part.len() == 1 && part.chars().all(|c| c.is_ascii_digit())
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Frame;
    use serde_json::json;

    #[test]
    fn known_families_are_normalized() {
        assert_eq!(
            model_display_name("anthropic/claude-3-5-sonnet-20241022"),
            "Claude 3.5 Sonnet"
        );
        assert_eq!(
            model_display_name("openai/gpt-4o-mini-2024-07-18"),
            "GPT-4o Mini"
        );
        assert_eq!(model_display_name("google/gemini-1.5-pro"), "Gemini 1.5 Pro");
        assert_eq!(model_display_name("meta/llama-3-70b-instruct"), "Llama 3 70b Instruct");
    }

    #[test]
    fn unknown_models_are_title_cased() {
        assert_eq!(model_display_name("acme/foo-bar"), "Foo Bar");
        assert_eq!(model_display_name("solo"), "Solo");
    }

    #[test]
    fn log_viewer_channels_require_the_column() {
        let with = Data::new(
            "evals",
            Frame::from_columns([("log_viewer", vec![json!("https://example.com")])]).unwrap(),
        );
        let without = Data::new(
            "evals",
            Frame::from_columns([("model", vec![json!("m1")])]).unwrap(),
        );

        let mut channels = Vec::new();
        log_viewer_channel(&with, &mut channels);
        log_viewer_channel(&without, &mut channels);

        assert_eq!(
            channels,
            vec![("Log Viewer".to_owned(), "log_viewer".to_owned())]
        );
    }
}
