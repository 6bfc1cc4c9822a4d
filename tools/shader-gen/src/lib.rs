//! shader-gen library
//!
//! Embeds shader files into generated source code as byte arrays. The shader
//! bytes are rendered as `0xHH` literals and substituted into a template at
//! the `@SHADER_NAME@` and `@SHADER_SRC@` placeholders.

pub mod error;
pub mod literal;
pub mod template;

use std::fs;
use std::path::PathBuf;

pub use error::GenerateError;
pub use literal::{format_byte_array, parse_byte_array, BYTES_PER_LINE};
pub use template::{count_placeholders, substitute, SHADER_NAME_TOKEN, SHADER_SRC_TOKEN};

/// One shader to embed: where to read it, what to call it, and where to write it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderJob {
    /// Shader file, read as raw bytes
    pub input: PathBuf,
    /// Substituted for `@SHADER_NAME@` without escaping
    pub name: String,
    /// Template file, read as UTF-8 text
    pub template: PathBuf,
    /// Generated file, created or truncated
    pub output: PathBuf,
}

impl ShaderJob {
    pub fn new(
        input: impl Into<PathBuf>,
        name: impl Into<String>,
        template: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            name: name.into(),
            template: template.into(),
            output: output.into(),
        }
    }

    /// Check that the input and template are existing regular files.
    ///
    /// The input is checked first. Nothing is read or written.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !self.input.is_file() {
            return Err(GenerateError::MissingInput(self.input.clone()));
        }
        if !self.template.is_file() {
            return Err(GenerateError::MissingTemplate(self.template.clone()));
        }
        Ok(())
    }
}

/// Render a shader into a template entirely in memory
///
/// # Arguments
/// * `shader` - Raw shader bytes
/// * `name` - Shader name substituted for `@SHADER_NAME@`
/// * `template` - Template text
pub fn render_shader_source(shader: &[u8], name: &str, template: &str) -> String {
    let block = format_byte_array(shader);
    substitute(template, name, &block)
}

/// Generate the output file for a job.
///
/// Fails before touching the output if the input or template is missing.
/// Read and write failures are returned as-is; a failed write may leave a
/// truncated output behind.
pub fn generate(job: &ShaderJob) -> Result<(), GenerateError> {
    job.validate()?;

    let shader = fs::read(&job.input).map_err(|source| GenerateError::Read {
        path: job.input.clone(),
        source,
    })?;

    let template = fs::read_to_string(&job.template).map_err(|source| GenerateError::Read {
        path: job.template.clone(),
        source,
    })?;

    let counts = count_placeholders(&template);
    if counts.name == 0 {
        tracing::warn!("Template {:?} has no {} placeholder", job.template, SHADER_NAME_TOKEN);
    }
    if counts.src == 0 {
        tracing::warn!("Template {:?} has no {} placeholder", job.template, SHADER_SRC_TOKEN);
    }

    let output = render_shader_source(&shader, &job.name, &template);

    tracing::debug!(
        "Embedding {:?} as '{}': {} bytes, {} lines, {} name / {} src placeholders",
        job.input,
        job.name,
        shader.len(),
        shader.len().div_ceil(BYTES_PER_LINE),
        counts.name,
        counts.src
    );

    fs::write(&job.output, output).map_err(|source| GenerateError::Write {
        path: job.output.clone(),
        source,
    })?;

    Ok(())
}
