//! Compositor
//!
//! Renders a customer image into a layered template. The worker only
//! drives an external program; the compositing itself happens there.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CompositorError {
    #[error("Failed to start compositor '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Compositor exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Compositor produced no output at {0}")]
    MissingOutput(String),
}

/// Capability that renders `image` into `template`, writing `output`
#[async_trait]
pub trait Compositor: Send + Sync {
    async fn compose(
        &self,
        template: &Path,
        image: &Path,
        output: &Path,
    ) -> Result<(), CompositorError>;
}

/// Runs an operator-configured program once per job
///
/// Each argument has `{template}`, `{image}` and `{output}` replaced with
/// the corresponding paths before the program is spawned.
pub struct CommandCompositor {
    program: String,
    args: Vec<String>,
}

impl CommandCompositor {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    fn render_args(&self, template: &Path, image: &Path, output: &Path) -> Vec<String> {
        let template = template.to_string_lossy();
        let image = image.to_string_lossy();
        let output = output.to_string_lossy();

        self.args
            .iter()
            .map(|arg| {
                arg.replace("{template}", &template)
                    .replace("{image}", &image)
                    .replace("{output}", &output)
            })
            .collect()
    }
}

#[async_trait]
impl Compositor for CommandCompositor {
    async fn compose(
        &self,
        template: &Path,
        image: &Path,
        output: &Path,
    ) -> Result<(), CompositorError> {
        let args = self.render_args(template, image, output);
        debug!("Running {} {:?}", self.program, args);

        let result = tokio::process::Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CompositorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(CompositorError::Failed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        if !tokio::fs::try_exists(output).await.unwrap_or(false) {
            return Err(CompositorError::MissingOutput(
                output.to_string_lossy().into_owned(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_placeholders_are_substituted() {
        let compositor = CommandCompositor::new(
            "render".to_string(),
            vec![
                "--template={template}".to_string(),
                "{image}".to_string(),
                "-o".to_string(),
                "{output}".to_string(),
            ],
        );

        let args = compositor.render_args(
            &PathBuf::from("/m/poster/kids/square.psd"),
            &PathBuf::from("/tmp/temp_1.jpg"),
            &PathBuf::from("/tmp/processed_1.jpg"),
        );

        assert_eq!(
            args,
            [
                "--template=/m/poster/kids/square.psd",
                "/tmp/temp_1.jpg",
                "-o",
                "/tmp/processed_1.jpg"
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_writes_output() {
        let tmp = tempfile::tempdir().unwrap();
        let image = tmp.path().join("in.jpg");
        let output = tmp.path().join("out.jpg");
        std::fs::write(&image, b"pixels").unwrap();

        let compositor = CommandCompositor::new(
            "cp".to_string(),
            vec!["{image}".to_string(), "{output}".to_string()],
        );
        compositor
            .compose(&tmp.path().join("t.psd"), &image, &output)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), b"pixels");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let compositor = CommandCompositor::new("false".to_string(), Vec::new());

        let err = compositor
            .compose(
                &tmp.path().join("t.psd"),
                &tmp.path().join("i.jpg"),
                &tmp.path().join("o.jpg"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CompositorError::Failed { .. }));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let tmp = tempfile::tempdir().unwrap();
        let compositor = CommandCompositor::new("easel-no-such-program".to_string(), Vec::new());

        let err = compositor
            .compose(
                &tmp.path().join("t.psd"),
                &tmp.path().join("i.jpg"),
                &tmp.path().join("o.jpg"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CompositorError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_without_output_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let compositor = CommandCompositor::new("true".to_string(), Vec::new());

        let err = compositor
            .compose(
                &tmp.path().join("t.psd"),
                &tmp.path().join("i.jpg"),
                &tmp.path().join("o.jpg"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CompositorError::MissingOutput(_)));
    }
}
