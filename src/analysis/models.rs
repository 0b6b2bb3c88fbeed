//! # Analysis Wire Types
//!
//! Request and response bodies for `POST /api/process`.
//!
//! ## Request (camelCase, every field required):
//! ```json
//! {
//!   "sessionId": "4f1c...",
//!   "artifactId": "9a2b...",
//!   "artifactUrl": "https://storage/artifacts/9a2b.webm",
//!   "artifactType": "AUDIO_MIXED"
//! }
//! ```
//!
//! ## Response (snake_case inside `metrics` and `transcript`):
//! ```json
//! {
//!   "metrics": { "score": 85.5, "clarity": 8.2, ... },
//!   "summary": "...",
//!   "recommendations": "1. ...\n2. ...",
//!   "transcript": { "full_text": "...", "word_count": 150, ... }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A request to analyse one recorded artifact of an interview session.
///
/// None of the fields are checked beyond being strings: ids are opaque, the URL
/// is never fetched and the type is only used for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub session_id: String,
    pub artifact_id: String,
    pub artifact_url: String,
    pub artifact_type: String,
}

impl ProcessRequest {
    /// Lenient reading of the declared artifact type.
    pub fn artifact_kind(&self) -> ArtifactKind {
        ArtifactKind::from_declared(&self.artifact_type)
    }
}

/// Recording layouts produced by the interview room.
///
/// Anything unrecognised is kept verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Both participants mixed into one track
    AudioMixed,
    /// Left channel, normally the candidate
    AudioLeft,
    /// Right channel, normally the interviewer
    AudioRight,
    /// Raw WebRTC capture
    RawWebrtc,
    Other(String),
}

impl ArtifactKind {
    pub fn from_declared(declared: &str) -> Self {
        match declared.trim().to_ascii_uppercase().as_str() {
            "AUDIO_MIXED" => ArtifactKind::AudioMixed,
            "AUDIO_LEFT" => ArtifactKind::AudioLeft,
            "AUDIO_RIGHT" => ArtifactKind::AudioRight,
            "RAW_WEBRTC" => ArtifactKind::RawWebrtc,
            _ => ArtifactKind::Other(declared.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ArtifactKind::Other(_))
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::AudioMixed => write!(f, "AUDIO_MIXED"),
            ArtifactKind::AudioLeft => write!(f, "AUDIO_LEFT"),
            ArtifactKind::AudioRight => write!(f, "AUDIO_RIGHT"),
            ArtifactKind::RawWebrtc => write!(f, "RAW_WEBRTC"),
            ArtifactKind::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Interview scores.
///
/// `score` is out of 100, every other metric is out of 10. Serialized as a flat
/// JSON object keyed by metric name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterviewMetrics {
    pub score: f64,
    pub clarity: f64,
    pub confidence: f64,
    pub pace: f64,
    pub articulation: f64,
    pub engagement: f64,
    pub professionalism: f64,
    pub technical_accuracy: f64,
}

/// Who was speaking during a transcript segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Speaker {
    Candidate,
    Interviewer,
}

/// One contiguous stretch of speech. Times are seconds from the start of the recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    pub speaker: Speaker,
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

/// Speech-to-text output for the whole artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub full_text: String,
    pub word_count: u32,
    pub duration_seconds: u32,
    pub speaker_segments: Vec<SpeakerSegment>,
}

/// Analysis report returned to the caller.
///
/// `transcript` is always present today but stays optional on the wire; a
/// missing transcript serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub metrics: InterviewMetrics,
    pub summary: String,
    pub recommendations: String,
    pub transcript: Option<Transcript>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_uses_camel_case_keys() {
        let request: ProcessRequest = serde_json::from_value(json!({
            "sessionId": "s-1",
            "artifactId": "a-1",
            "artifactUrl": "not even a url",
            "artifactType": ""
        }))
        .expect("all fields present");

        assert_eq!(request.session_id, "s-1");
        assert_eq!(request.artifact_id, "a-1");
        assert_eq!(request.artifact_url, "not even a url");
        assert_eq!(request.artifact_type, "");
    }

    #[test]
    fn test_request_requires_every_field() {
        let missing_url = json!({
            "sessionId": "s-1",
            "artifactId": "a-1",
            "artifactType": "AUDIO_MIXED"
        });
        assert!(serde_json::from_value::<ProcessRequest>(missing_url).is_err());

        let numeric_id = json!({
            "sessionId": 42,
            "artifactId": "a-1",
            "artifactUrl": "u",
            "artifactType": "t"
        });
        assert!(serde_json::from_value::<ProcessRequest>(numeric_id).is_err());
    }

    #[test]
    fn test_artifact_kind_is_lenient() {
        assert_eq!(ArtifactKind::from_declared("AUDIO_MIXED"), ArtifactKind::AudioMixed);
        assert_eq!(ArtifactKind::from_declared(" audio_left "), ArtifactKind::AudioLeft);
        assert_eq!(ArtifactKind::from_declared("RAW_WEBRTC"), ArtifactKind::RawWebrtc);

        let other = ArtifactKind::from_declared("video/mp4");
        assert!(!other.is_known());
        assert_eq!(other.to_string(), "video/mp4");
    }

    #[test]
    fn test_speaker_labels() {
        assert_eq!(serde_json::to_value(Speaker::Candidate).unwrap(), json!("CANDIDATE"));
        assert_eq!(serde_json::to_value(Speaker::Interviewer).unwrap(), json!("INTERVIEWER"));
    }

    #[test]
    fn test_missing_transcript_serializes_as_null() {
        let response = ProcessResponse {
            metrics: InterviewMetrics {
                score: 1.0,
                clarity: 1.0,
                confidence: 1.0,
                pace: 1.0,
                articulation: 1.0,
                engagement: 1.0,
                professionalism: 1.0,
                technical_accuracy: 1.0,
            },
            summary: String::new(),
            recommendations: String::new(),
            transcript: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["transcript"].is_null());
        assert_eq!(value["metrics"].as_object().unwrap().len(), 8);
    }
}
