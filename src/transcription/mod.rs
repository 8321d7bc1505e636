//! Pre-recorded transcription: job submission body and the status/result records.

mod request;
mod response;

pub use request::{
    CallbackConfig, CallbackMethod, CodeSwitchingConfig, CustomVocabularyConfig,
    DiarizationConfig, SubtitleFormat, SubtitlesConfig, SummarizationConfig, SummaryType,
    TranscriptionRequest, TranslationConfig, TranslationModel,
};
pub use response::{
    AddonResult, CompletedTranscription, ErrorInfo, FileInfo, JobStatus, ResultMetadata,
    Subtitle, Transcript, TranscriptionJob, TranscriptionResult, TranscriptionStatus,
    TranslatedTranscript, Utterance, Word,
};
