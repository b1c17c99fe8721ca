use super::interface::{ChatMessage, Script};

fn script_rule(script: Script) -> &'static str {
    match script {
        Script::Latin => "Write the Darija using LATIN letters (Darija latin).",
        Script::Arabic => "Write the Darija using ARABIC script (الحروف العربية).",
    }
}

/// Fixes the task, the output script and strict output-only framing
pub fn system_prompt(script: Script) -> String {
    format!(
        "You are a professional translator. Your job: translate the user text into Moroccan Arabic Darija. {} Output ONLY the translation, no quotes, no explanations, no extra text.",
        script_rule(script)
    )
}

pub fn user_prompt(text: &str) -> String {
    format!(
        "Detect the source language automatically and translate this text to Moroccan Arabic Darija:\n\n{text}"
    )
}

/// System message first, then the user message
pub fn build_messages(text: &str, script: Script) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt(script)),
        ChatMessage::user(user_prompt(text)),
    ]
}
