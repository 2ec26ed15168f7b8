//! pdflatex invocation.
//!
//! Each call gets its own scratch directory holding `resume.tex`; the compiler runs a fixed
//! number of passes against it and the PDF is read back if one was produced. The directory is
//! removed when the `TempDir` guard drops, on success and on every error path.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

const TEX_FILE: &str = "resume.tex";
const PDF_FILE: &str = "resume.pdf";

/// How to run the external compiler.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Executable name or path, resolved through `PATH`.
    pub program: String,
    /// Applied to each pass separately.
    pub timeout: Duration,
    pub passes: u32,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "pdflatex".to_string(),
            timeout: Duration::from_secs(120),
            passes: 2,
        }
    }
}

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("LaTeX compilation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Tool not found: {tool}. Please install a LaTeX distribution.")]
    ToolNotFound { tool: String },

    #[error("LaTeX compilation failed: {message}")]
    Failed { message: String },

    #[error("Internal error: {0}")]
    Internal(#[from] std::io::Error),
}

impl CompileError {
    /// Stable category string surfaced to callers.
    pub fn category(&self) -> &'static str {
        match self {
            CompileError::Timeout(_) => "timeout",
            CompileError::ToolNotFound { .. } => "missing-tool",
            CompileError::Failed { .. } => "compile-error",
            CompileError::Internal(_) => "internal",
        }
    }
}

/// Compiles `markup` to PDF bytes.
pub async fn compile(markup: &str, config: &CompilerConfig) -> Result<Vec<u8>, CompileError> {
    let workdir = tempfile::Builder::new().prefix("resume-").tempdir()?;
    let dir = workdir.path();
    let tex_path = dir.join(TEX_FILE);
    tokio::fs::write(&tex_path, markup).await?;

    debug!(
        program = %config.program,
        dir = %dir.display(),
        passes = config.passes,
        "starting LaTeX compilation"
    );

    let mut log = String::new();
    for pass in 1..=config.passes.max(1) {
        let output = run_pass(config, dir, &tex_path).await?;
        log = format!(
            "{}\n{}",
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
        if !output.status.success() {
            debug!(pass, status = %output.status, "LaTeX pass exited with failure");
        }
    }

    let pdf_path = dir.join(PDF_FILE);
    match tokio::fs::read(&pdf_path).await {
        Ok(bytes) if !bytes.is_empty() => {
            info!(bytes = bytes.len(), "LaTeX compilation succeeded");
            Ok(bytes)
        }
        Ok(_) => Err(failure(&log)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(failure(&log)),
        Err(e) => Err(CompileError::Internal(e)),
    }
}

async fn run_pass(
    config: &CompilerConfig,
    dir: &Path,
    tex_path: &Path,
) -> Result<std::process::Output, CompileError> {
    let child = Command::new(&config.program)
        .arg("-interaction=nonstopmode")
        .arg("-output-directory")
        .arg(dir)
        .arg(tex_path)
        .current_dir(dir)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output();

    match tokio::time::timeout(config.timeout, child).await {
        Err(_) => {
            warn!(timeout = ?config.timeout, "LaTeX pass timed out");
            Err(CompileError::Timeout(config.timeout))
        }
        Ok(Err(e)) if e.kind() == ErrorKind::NotFound => Err(CompileError::ToolNotFound {
            tool: config.program.clone(),
        }),
        Ok(Err(e)) => Err(CompileError::Internal(e)),
        Ok(Ok(output)) => Ok(output),
    }
}

fn failure(log: &str) -> CompileError {
    let message = extract_diagnostic(log);
    warn!(%message, "LaTeX compilation produced no PDF");
    CompileError::Failed { message }
}

static LATEX_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"! LaTeX Error: (.+)").unwrap());

/// Well-known failure prefixes and the message reported for each.
const KNOWN_FAILURES: &[(&str, &str)] = &[
    (
        "! Undefined control sequence",
        "Undefined control sequence - check LaTeX syntax",
    ),
    ("! Missing $ inserted", "Missing $ inserted - math mode error"),
    (
        "! Extra alignment tab",
        "Extra alignment tab - table formatting error",
    ),
];

/// Picks the most useful line out of compiler output.
pub fn extract_diagnostic(log: &str) -> String {
    if let Some(caps) = LATEX_ERROR.captures(log) {
        return caps[1].trim().to_string();
    }

    for (needle, message) in KNOWN_FAILURES {
        if log.contains(needle) {
            return message.to_string();
        }
    }

    if log.contains("! Package") && log.contains("Error") {
        return "Package error - missing or incompatible package".to_string();
    }

    log.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && (line.to_lowercase().contains("error") || line.contains('!')))
        .map(str::to_string)
        .unwrap_or_else(|| "Unknown LaTeX compilation error".to_string())
}
