//! External classifier worker client.
//!
//! Spawns one worker process per request, feeds it a JSON request on
//! stdin, and classifies the outcome. The worker is trusted only when it
//! exits zero, writes nothing to stderr, and its stdout parses as a
//! verdict without an error indicator.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::ClassificationResult;

/// Default wall-clock deadline for one worker invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the worker process.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Program to spawn (e.g. `python3`).
    pub program: String,
    /// Arguments, typically the classifier script path.
    pub args: Vec<String>,
    /// Hard deadline for the whole process lifetime.
    pub timeout: Duration,
}

impl WorkerConfig {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Ways a worker invocation can fail.
///
/// Every variant is absorbed by the orchestrator; none of them reaches
/// the caller of the engine.
#[derive(Debug, Error)]
pub enum WorkerFailure {
    /// The worker process could not be started.
    #[error("failed to spawn worker: {0}")]
    Spawn(#[from] io::Error),

    /// The worker exceeded its deadline and was killed.
    #[error("worker timed out")]
    Timeout,

    /// The worker exited with a non-zero status.
    #[error("worker exited with code {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    /// The worker exited zero but wrote to its error stream.
    #[error("worker produced stderr output: {0}")]
    StderrOutput(String),

    /// Stdout was empty or did not parse as a response payload.
    #[error("worker output was malformed: {0}")]
    MalformedOutput(String),

    /// The payload carried an explicit error indicator.
    #[error("worker reported an error: {0}")]
    ErrorPayload(String),
}

/// Request message written to the worker's stdin.
#[derive(Debug, Serialize)]
struct WorkerRequest<'a> {
    content: &'a str,
}

/// Response payload read from the worker's stdout.
///
/// An object with an `error` field is a failure even on a zero exit
/// code; anything else must be a full verdict.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorkerResponse {
    Error { error: String },
    Verdict(ClassificationResult),
}

/// Client for the external worker process.
///
/// One `invoke` call owns exactly one child process for its duration; the
/// child never outlives the call (`kill_on_drop` covers the timeout and
/// cancellation paths).
#[derive(Debug, Clone)]
pub struct ExternalClassifier {
    config: WorkerConfig,
}

impl ExternalClassifier {
    pub fn new(config: WorkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Runs one worker process for the given text and classifies the
    /// outcome.
    pub async fn invoke(&self, text: &str) -> Result<ClassificationResult, WorkerFailure> {
        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let request = serde_json::to_vec(&WorkerRequest { content: text })
            .map_err(|e| WorkerFailure::MalformedOutput(format!("request encoding: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A worker that exits before reading its input breaks the
            // pipe; the exit-status check below classifies that case.
            let _ = stdin.write_all(&request).await;
            let _ = stdin.shutdown().await;
        }

        let output = match tokio::time::timeout(self.config.timeout, child.wait_with_output()).await
        {
            Ok(result) => result?,
            Err(_) => {
                debug!(timeout_ms = self.config.timeout.as_millis() as u64, "worker timed out");
                // Dropping the in-flight wait drops the child handle,
                // which force-kills the process.
                return Err(WorkerFailure::Timeout);
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(WorkerFailure::NonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }
        // Any error-stream output is disqualifying even on a clean exit.
        if !output.stderr.is_empty() {
            return Err(WorkerFailure::StderrOutput(stderr));
        }
        if output.stdout.is_empty() {
            return Err(WorkerFailure::MalformedOutput("empty output".to_string()));
        }

        match serde_json::from_slice::<WorkerResponse>(&output.stdout) {
            Ok(WorkerResponse::Verdict(result)) => Ok(result),
            Ok(WorkerResponse::Error { error }) => Err(WorkerFailure::ErrorPayload(error)),
            Err(e) => Err(WorkerFailure::MalformedOutput(e.to_string())),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::classifier::{Category, Rating};

    const VERDICT_JSON: &str = r#"{"rating":"18+","categories":["violence"],"comment":"Обнаружены сцены насилия","scenes":[]}"#;

    fn sh_worker(script: &str, timeout: Duration) -> ExternalClassifier {
        let config = WorkerConfig::new("/bin/sh", vec!["-c".to_string(), script.to_string()])
            .with_timeout(timeout);
        ExternalClassifier::new(config)
    }

    #[tokio::test]
    async fn valid_payload_is_accepted() {
        let script = format!("cat >/dev/null; printf '%s' '{VERDICT_JSON}'");
        let worker = sh_worker(&script, Duration::from_secs(5));

        let result = worker.invoke("он хотел убить").await.unwrap();
        assert_eq!(result.rating, Rating::EighteenPlus);
        assert_eq!(result.categories, vec![Category::Violence]);
    }

    #[tokio::test]
    async fn worker_receives_request_content() {
        // The worker echoes its stdin back through the comment field by
        // failing loudly if the content marker is missing.
        let script = format!(
            "input=$(cat); case \"$input\" in *маркер*) printf '%s' '{VERDICT_JSON}';; *) exit 7;; esac"
        );
        let worker = sh_worker(&script, Duration::from_secs(5));

        assert!(worker.invoke("сцена с маркер внутри").await.is_ok());
    }

    #[tokio::test]
    async fn non_zero_exit_is_failure() {
        let worker = sh_worker("cat >/dev/null; exit 3", Duration::from_secs(5));

        match worker.invoke("текст").await {
            Err(WorkerFailure::NonZeroExit { code, .. }) => assert_eq!(code, Some(3)),
            other => panic!("expected NonZeroExit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn stderr_output_disqualifies_clean_exit() {
        let script = format!("cat >/dev/null; echo warning >&2; printf '%s' '{VERDICT_JSON}'");
        let worker = sh_worker(&script, Duration::from_secs(5));

        match worker.invoke("текст").await {
            Err(WorkerFailure::StderrOutput(msg)) => assert_eq!(msg, "warning"),
            other => panic!("expected StderrOutput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_output_is_malformed() {
        let worker = sh_worker("cat >/dev/null", Duration::from_secs(5));

        assert!(matches!(
            worker.invoke("текст").await,
            Err(WorkerFailure::MalformedOutput(_))
        ));
    }

    #[tokio::test]
    async fn unparseable_output_is_malformed() {
        let worker = sh_worker(
            "cat >/dev/null; printf 'not json at all'",
            Duration::from_secs(5),
        );

        assert!(matches!(
            worker.invoke("текст").await,
            Err(WorkerFailure::MalformedOutput(_))
        ));
    }

    #[tokio::test]
    async fn error_payload_is_failure_despite_zero_exit() {
        let script = r#"cat >/dev/null; printf '%s' '{"error": "модель недоступна"}'"#;
        let worker = sh_worker(script, Duration::from_secs(5));

        match worker.invoke("текст").await {
            Err(WorkerFailure::ErrorPayload(msg)) => assert_eq!(msg, "модель недоступна"),
            other => panic!("expected ErrorPayload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_spawn_failure() {
        let config = WorkerConfig::new("/nonexistent/classifier-worker", vec![]);
        let worker = ExternalClassifier::new(config);

        assert!(matches!(
            worker.invoke("текст").await,
            Err(WorkerFailure::Spawn(_))
        ));
    }

    #[tokio::test]
    async fn slow_worker_times_out() {
        let worker = sh_worker("sleep 30", Duration::from_millis(200));

        let started = std::time::Instant::now();
        let outcome = worker.invoke("текст").await;
        assert!(matches!(outcome, Err(WorkerFailure::Timeout)));
        // The deadline is hard: no waiting out the sleep.
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn buffered_output_is_discarded_on_timeout() {
        let script = format!("printf '%s' '{VERDICT_JSON}'; sleep 30");
        let worker = sh_worker(&script, Duration::from_millis(200));

        assert!(matches!(
            worker.invoke("текст").await,
            Err(WorkerFailure::Timeout)
        ));
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = WorkerConfig::new("python3", vec!["classifier.py".to_string()]);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
    }
}
