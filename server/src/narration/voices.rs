//! Narration voice registry

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSpec {
    pub key: &'static str,
    /// Voice name understood by the upstream speech API.
    pub api_voice: &'static str,
    pub label: &'static str,
    pub style: &'static str,
}

/// Voices offered to study-guide pages.
pub const VOICES: &[VoiceSpec] = &[
    VoiceSpec {
        key: "narrator",
        api_voice: "alloy",
        label: "Narrator",
        style: "Neutral, steady study voice",
    },
    VoiceSpec {
        key: "storyteller",
        api_voice: "fable",
        label: "Storyteller",
        style: "Warm voice for timeline stories",
    },
    VoiceSpec {
        key: "examiner",
        api_voice: "onyx",
        label: "Examiner",
        style: "Formal voice for mock questions",
    },
    VoiceSpec {
        key: "guide",
        api_voice: "nova",
        label: "Guide",
        style: "Bright voice for map and place pages",
    },
];

/// Sample sentence used by the voice preview endpoint.
pub const PREVIEW_TEXT: &str =
    "Welcome to the Life in the United Kingdom study guide. Let's begin.";

pub fn find_voice(key: &str) -> Option<&'static VoiceSpec> {
    VOICES.iter().find(|v| v.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_keys_are_unique() {
        for (i, voice) in VOICES.iter().enumerate() {
            assert!(!VOICES[i + 1..].iter().any(|v| v.key == voice.key));
        }
    }

    #[test]
    fn test_find_voice() {
        assert_eq!(find_voice("narrator").unwrap().api_voice, "alloy");
        assert!(find_voice("robot").is_none());
    }
}
