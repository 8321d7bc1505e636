//! Body of `POST /v2/pre-recorded/`.
//!
//! Every option is omitted from the JSON unless set: `false` flags, `None`
//! configs and empty lists never reach the wire. A flag activates the config
//! object next to it; the service decides whether a combination is valid.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionRequest {
    pub audio_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub detect_language: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub enable_code_switching: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_switching_config: Option<CodeSwitchingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_prompt: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub custom_vocabulary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_vocabulary_config: Option<CustomVocabularyConfig>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub diarization: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diarization_config: Option<DiarizationConfig>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub translation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_config: Option<TranslationConfig>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub subtitles: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitles_config: Option<SubtitlesConfig>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub summarization: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarization_config: Option<SummarizationConfig>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub sentences: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub named_entity_recognition: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub sentiment_analysis: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub callback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_config: Option<CallbackConfig>,

    /// Echoed back untouched in status and result records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<serde_json::Value>,
}

impl TranscriptionRequest {
    pub fn new(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_language_detection(mut self) -> Self {
        self.detect_language = true;
        self
    }

    /// Allow several languages in one file, optionally restricted to `languages`.
    pub fn with_code_switching(mut self, languages: Vec<String>) -> Self {
        self.enable_code_switching = true;
        self.code_switching_config = if languages.is_empty() {
            None
        } else {
            Some(CodeSwitchingConfig { languages })
        };
        self
    }

    pub fn with_context_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.context_prompt = Some(prompt.into());
        self
    }

    pub fn with_custom_vocabulary(mut self, vocabulary: Vec<String>) -> Self {
        self.custom_vocabulary = true;
        self.custom_vocabulary_config = Some(CustomVocabularyConfig { vocabulary });
        self
    }

    pub fn with_diarization(mut self, config: Option<DiarizationConfig>) -> Self {
        self.diarization = true;
        self.diarization_config = config;
        self
    }

    pub fn with_translation(mut self, config: TranslationConfig) -> Self {
        self.translation = true;
        self.translation_config = Some(config);
        self
    }

    pub fn with_subtitles(mut self, formats: Vec<SubtitleFormat>) -> Self {
        self.subtitles = true;
        self.subtitles_config = Some(SubtitlesConfig { formats });
        self
    }

    pub fn with_summarization(mut self, summary_type: Option<SummaryType>) -> Self {
        self.summarization = true;
        self.summarization_config =
            summary_type.map(|summary_type| SummarizationConfig { summary_type });
        self
    }

    pub fn with_sentences(mut self) -> Self {
        self.sentences = true;
        self
    }

    pub fn with_named_entity_recognition(mut self) -> Self {
        self.named_entity_recognition = true;
        self
    }

    pub fn with_sentiment_analysis(mut self) -> Self {
        self.sentiment_analysis = true;
        self
    }

    pub fn with_callback(mut self, config: CallbackConfig) -> Self {
        self.callback = true;
        self.callback_config = Some(config);
        self
    }

    pub fn with_custom_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.custom_metadata = Some(metadata);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeSwitchingConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomVocabularyConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vocabulary: Vec<String>,
}

/// Speaker hints. Leave everything unset to let the service estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiarizationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_speakers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_speakers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speakers: Option<u32>,
}

impl DiarizationConfig {
    pub fn exact(speakers: u32) -> Self {
        Self {
            number_of_speakers: Some(speakers),
            ..Default::default()
        }
    }

    pub fn range(min_speakers: u32, max_speakers: u32) -> Self {
        Self {
            min_speakers: Some(min_speakers),
            max_speakers: Some(max_speakers),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationModel {
    Base,
    Enhanced,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<TranslationModel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_original_utterances: Option<bool>,
}

impl TranslationConfig {
    pub fn to(target_languages: Vec<String>) -> Self {
        Self {
            target_languages,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    Srt,
    Vtt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitlesConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<SubtitleFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryType {
    General,
    BulletPoints,
    Concise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizationConfig {
    #[serde(rename = "type")]
    pub summary_type: SummaryType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CallbackMethod {
    #[default]
    Post,
    Put,
}

/// Where the service notifies completion. The method defaults to POST server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackConfig {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<CallbackMethod>,
}

impl CallbackConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: None,
        }
    }
}
