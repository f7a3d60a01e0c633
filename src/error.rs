use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Fatal setup failures. Nothing is retried; the binary prints the message
/// and exits with -1.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to create window: {0}")]
    Window(#[from] glutin::CreationError),
    #[error("Failed to create window: {0}")]
    Context(#[from] glutin::ContextError),
    /// The display line is fixed; the missing symbol is only logged.
    #[error("Failed to initialize GLAD")]
    Loader { missing: &'static str },
    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("failed to link shaders: {log}")]
    ShaderLink { log: String },
}

pub type Result<T> = std::result::Result<T, Error>;
