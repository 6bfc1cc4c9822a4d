//! shader-gen - shader embedding tool
//!
//! Converts a shader file into a source fragment holding its bytes as an
//! array initializer, so compilers with a string literal length limit
//! (4095 chars in C99/C17) can still embed large shaders.
//!
//! # Usage
//!
//! ```bash
//! shader-gen shaders/blit.frag blit_frag templates/shader.h.in build/blit_frag.h
//! ```
//!
//! with a template such as:
//!
//! ```c
//! static const char @SHADER_NAME@[] = {
//! @SHADER_SRC@
//! };
//! ```

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use shader_gen::ShaderJob;

/// Exit status for bad arguments and missing input files
const FAILURE_EXIT: u8 = 1;

/// Embed a shader file into a template as a byte array
///
/// Every argument is a value, including ones that look like flags, so there
/// is no `--help` or `--version`.
#[derive(Parser)]
#[command(name = "shader-gen")]
#[command(about = "Embed a shader file into a template as a byte array")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Shader file to embed (read as raw bytes)
    #[arg(value_name = "input_shader", allow_hyphen_values = true)]
    input: PathBuf,

    /// Name substituted for @SHADER_NAME@
    #[arg(value_name = "shader_name", allow_hyphen_values = true)]
    name: String,

    /// Template containing @SHADER_NAME@ and @SHADER_SRC@
    #[arg(value_name = "template", allow_hyphen_values = true)]
    template: PathBuf,

    /// Generated file (created or overwritten)
    #[arg(value_name = "output", allow_hyphen_values = true)]
    output: PathBuf,
}

/// Process arguments with a `--` escape after the binary name, so clap never
/// reads a user value (such as a `--` shader name) as option syntax.
fn positional_args() -> impl Iterator<Item = OsString> {
    let mut args = std::env::args_os();
    let bin = args.next().unwrap_or_else(|| OsString::from("shader-gen"));
    [bin, OsString::from("--")].into_iter().chain(args)
}

fn main() -> ExitCode {
    // Initialize logging. stdout is reserved for the confirmation line.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = match Cli::try_parse_from(positional_args()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(FAILURE_EXIT);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(FAILURE_EXIT)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let job = ShaderJob::new(cli.input, cli.name, cli.template, cli.output);

    tracing::info!("Converting {:?} -> {:?}", job.input, job.output);
    shader_gen::generate(&job)?;

    println!(
        "Generated {} from {}",
        job.output.display(),
        job.input.display()
    );
    Ok(())
}
