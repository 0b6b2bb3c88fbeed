//! # Analysis Pipeline
//!
//! Runs the report-building steps for one artifact:
//! 1. **Retrieve** the artifact from its URL
//! 2. **Score** the recording
//! 3. **Summarize** the scores in prose
//! 4. **Recommend** follow-up practice
//! 5. **Transcribe** the speech
//!
//! Retrieval only logs the URL and every other step returns constant data, so
//! the pipeline does no I/O and holds no state between calls.

use crate::analysis::models::{
    InterviewMetrics, ProcessRequest, ProcessResponse, Speaker, SpeakerSegment, Transcript,
};
use anyhow::{Context, Result};
use std::fmt::Write;
use tracing::{debug, info, warn};

/// Scores reported for every artifact.
pub const FIXED_METRICS: InterviewMetrics = InterviewMetrics {
    score: 85.5,
    clarity: 8.2,
    confidence: 7.8,
    pace: 6.5,
    articulation: 8.0,
    engagement: 7.5,
    professionalism: 8.3,
    technical_accuracy: 7.9,
};

const RECOMMENDATIONS: &[&str] = &[
    "Continue practicing technical explanations to improve clarity",
    "Work on maintaining consistent pace throughout the interview",
    "Consider adding more specific examples to support technical claims",
    "Practice active listening and responding to interviewer questions more directly",
];

const TRANSCRIPT_TEXT: &str = "This is a mock transcript of the interview. In a real implementation, \
this would contain the actual transcribed text from the audio file.";
const TRANSCRIPT_WORD_COUNT: u32 = 150;
const TRANSCRIPT_DURATION_SECONDS: u32 = 300;

/// Stateless report builder. Cheap to construct; one per request is fine.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalysisPipeline;

impl AnalysisPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Build the analysis report for `request`.
    pub fn run(&self, request: &ProcessRequest) -> Result<ProcessResponse> {
        self.retrieve_artifact(request);

        let kind = request.artifact_kind();
        if !kind.is_known() {
            debug!(artifact_type = %request.artifact_type, "Unrecognised artifact type, processing anyway");
        }
        info!(
            "Running processing pipeline for artifact type: {}",
            request.artifact_type
        );

        let metrics = self.score();
        let summary = self.summarize(&metrics).context("failed to write summary")?;
        let recommendations = self.recommend();
        let transcript = self.transcribe();

        info!("Processing completed for session: {}", request.session_id);

        Ok(ProcessResponse {
            metrics,
            summary,
            recommendations,
            transcript: Some(transcript),
        })
    }

    /// Stand-in for downloading the recording. Nothing is fetched.
    fn retrieve_artifact(&self, request: &ProcessRequest) {
        if request.artifact_url.trim().is_empty() {
            warn!(artifact_id = %request.artifact_id, "Artifact URL is empty");
        }
        info!("Downloading audio from: {}", request.artifact_url);
    }

    fn score(&self) -> InterviewMetrics {
        FIXED_METRICS
    }

    fn summarize(&self, metrics: &InterviewMetrics) -> Result<String, std::fmt::Error> {
        let mut summary = String::new();
        write!(
            summary,
            "The candidate demonstrated strong communication skills with a clarity score of {}/10. ",
            metrics.clarity
        )?;
        write!(
            summary,
            "The interview showed good engagement ({}/10) and professional demeanor ({}/10). ",
            metrics.engagement, metrics.professionalism
        )?;
        write!(
            summary,
            "Technical accuracy was solid at {}/10. ",
            metrics.technical_accuracy
        )?;
        write!(summary, "Overall performance score: {}/100.", metrics.score)?;
        Ok(summary)
    }

    fn recommend(&self) -> String {
        RECOMMENDATIONS
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn transcribe(&self) -> Transcript {
        Transcript {
            full_text: TRANSCRIPT_TEXT.to_string(),
            word_count: TRANSCRIPT_WORD_COUNT,
            duration_seconds: TRANSCRIPT_DURATION_SECONDS,
            speaker_segments: vec![
                SpeakerSegment {
                    speaker: Speaker::Candidate,
                    text: "Hello, thank you for this opportunity...".to_string(),
                    start_time: 0.0,
                    end_time: 45.2,
                },
                SpeakerSegment {
                    speaker: Speaker::Interviewer,
                    text: "Can you tell me about your experience with...".to_string(),
                    start_time: 45.2,
                    end_time: 78.5,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(artifact_url: &str, artifact_type: &str) -> ProcessRequest {
        ProcessRequest {
            session_id: "session-1".to_string(),
            artifact_id: "artifact-1".to_string(),
            artifact_url: artifact_url.to_string(),
            artifact_type: artifact_type.to_string(),
        }
    }

    #[test]
    fn test_metrics_are_fixed() {
        let report = AnalysisPipeline::new()
            .run(&request("https://example.com/a.wav", "AUDIO_MIXED"))
            .unwrap();

        assert_eq!(report.metrics, FIXED_METRICS);
        assert_eq!(report.metrics.score, 85.5);
        assert_eq!(report.metrics.technical_accuracy, 7.9);
    }

    #[test]
    fn test_summary_interpolates_scores() {
        let report = AnalysisPipeline::new().run(&request("", "")).unwrap();

        for fragment in ["8.2/10", "7.5/10", "8.3/10", "7.9/10", "85.5/100"] {
            assert!(report.summary.contains(fragment), "summary missing {}", fragment);
        }
        assert_eq!(
            report.summary,
            "The candidate demonstrated strong communication skills with a clarity score of 8.2/10. \
The interview showed good engagement (7.5/10) and professional demeanor (8.3/10). \
Technical accuracy was solid at 7.9/10. Overall performance score: 85.5/100."
        );
    }

    #[test]
    fn test_recommendations_are_numbered_lines() {
        let report = AnalysisPipeline::new().run(&request("u", "t")).unwrap();
        let lines: Vec<&str> = report.recommendations.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "1. Continue practicing technical explanations to improve clarity"
        );
        assert!(lines[3].starts_with("4. Practice active listening"));
        assert!(!report.recommendations.ends_with('\n'));
    }

    #[test]
    fn test_transcript_segments_are_ordered() {
        let report = AnalysisPipeline::new().run(&request("u", "t")).unwrap();
        let transcript = report.transcript.expect("transcript is always produced");

        assert_eq!(transcript.word_count, 150);
        assert_eq!(transcript.duration_seconds, 300);
        assert_eq!(transcript.speaker_segments.len(), 2);
        assert_eq!(transcript.speaker_segments[0].speaker, Speaker::Candidate);
        assert_eq!(transcript.speaker_segments[1].speaker, Speaker::Interviewer);

        let times: Vec<f64> = transcript
            .speaker_segments
            .iter()
            .flat_map(|s| [s.start_time, s.end_time])
            .collect();
        assert_eq!(times, vec![0.0, 45.2, 45.2, 78.5]);
        for segment in &transcript.speaker_segments {
            assert!(segment.start_time < segment.end_time);
        }
    }

    #[test]
    fn test_output_ignores_input() {
        let pipeline = AnalysisPipeline::new();
        let a = pipeline.run(&request("https://a/1.wav", "AUDIO_LEFT")).unwrap();
        let b = pipeline.run(&request("ftp://b", "something else")).unwrap();
        assert_eq!(a, b);
    }
}
