use super::error::NarrationConfigError;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Language used when a code is missing or has no voice
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "en";

/// Polly engine tier a voice runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineTier {
    Standard,
    Neural,
}

impl EngineTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineTier::Standard => "standard",
            EngineTier::Neural => "neural",
        }
    }
}

impl std::fmt::Display for EngineTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Voice identity, engine tier and locale used for one synthesis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfile {
    pub voice_id: &'static str,
    pub engine: EngineTier,
    pub locale: &'static str,
}

const ENGLISH: VoiceProfile = VoiceProfile {
    voice_id: "Joanna",
    engine: EngineTier::Neural,
    locale: "en-US",
};

static VOICE_TABLE: LazyLock<HashMap<&'static str, VoiceProfile>> = LazyLock::new(|| {
    HashMap::from([
        (
            "fr",
            VoiceProfile {
                voice_id: "Lea",
                engine: EngineTier::Neural,
                locale: "fr-FR",
            },
        ),
        ("en", ENGLISH),
        (
            "ar",
            VoiceProfile {
                voice_id: "Zeina",
                engine: EngineTier::Standard,
                locale: "arb",
            },
        ),
        (
            "de",
            VoiceProfile {
                voice_id: "Vicki",
                engine: EngineTier::Neural,
                locale: "de-DE",
            },
        ),
        (
            "it",
            VoiceProfile {
                voice_id: "Bianca",
                engine: EngineTier::Neural,
                locale: "it-IT",
            },
        ),
        (
            "es",
            VoiceProfile {
                voice_id: "Lucia",
                engine: EngineTier::Neural,
                locale: "es-ES",
            },
        ),
    ])
});

/// Language codes that have a dedicated voice
pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = VOICE_TABLE.keys().copied().collect();
    codes.sort_unstable();
    codes
}

/// Maps ISO 639-1 language codes to voice profiles.
///
/// Resolution never fails: unknown or missing codes get the fallback profile.
#[derive(Debug, Clone)]
pub struct VoiceConfigResolver {
    profiles: &'static HashMap<&'static str, VoiceProfile>,
    fallback_language: &'static str,
    fallback: VoiceProfile,
}

impl VoiceConfigResolver {
    /// Build a resolver whose fallback is the voice of `fallback_language`.
    ///
    /// Fails if the table has no entry for that language.
    pub fn with_fallback(fallback_language: &str) -> Result<Self, NarrationConfigError> {
        let code = normalize(fallback_language);
        let (&key, &fallback) = VOICE_TABLE
            .get_key_value(code.as_str())
            .ok_or_else(|| NarrationConfigError::UnknownFallbackLanguage(fallback_language.to_string()))?;

        Ok(Self {
            profiles: &*VOICE_TABLE,
            fallback_language: key,
            fallback,
        })
    }

    pub fn fallback_language(&self) -> &'static str {
        self.fallback_language
    }

    pub fn resolve(&self, language: Option<&str>) -> VoiceProfile {
        let Some(raw) = language else {
            tracing::debug!(
                fallback = self.fallback_language,
                "No language code provided, using fallback voice"
            );
            return self.fallback;
        };

        match self.profiles.get(normalize(raw).as_str()) {
            Some(profile) => *profile,
            None => {
                tracing::info!(
                    language = raw,
                    fallback = self.fallback_language,
                    voice = self.fallback.voice_id,
                    "Unsupported language code, using fallback voice"
                );
                self.fallback
            }
        }
    }
}

impl Default for VoiceConfigResolver {
    fn default() -> Self {
        Self {
            profiles: &*VOICE_TABLE,
            fallback_language: DEFAULT_FALLBACK_LANGUAGE,
            fallback: ENGLISH,
        }
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}
