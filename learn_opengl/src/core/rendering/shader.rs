use std::fmt;
use std::path::PathBuf;

/// Possible data types for vertex attributes and uniforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderDataType {
    None,
    Float,
    Float2,
    Float3,
    Float4,
    Mat3,
    Mat4,
    Int,
    Int2,
    Int3,
    Int4,
    Bool,
}

impl ShaderDataType {
    /// Size in bytes for this data type
    pub fn get_size(&self) -> u32 {
        match self {
            ShaderDataType::None => 0,
            ShaderDataType::Float | ShaderDataType::Int => 4,
            ShaderDataType::Float2 | ShaderDataType::Int2 => 2 * 4,
            ShaderDataType::Float3 | ShaderDataType::Int3 => 3 * 4,
            ShaderDataType::Float4 | ShaderDataType::Int4 => 4 * 4,
            ShaderDataType::Mat3 => 3 * 3 * 4,
            ShaderDataType::Mat4 => 4 * 4 * 4,
            ShaderDataType::Bool => 1,
        }
    }

    /// Amount of scalar components in this data type
    pub fn get_component_count(&self) -> u32 {
        match self {
            ShaderDataType::None => 0,
            ShaderDataType::Float | ShaderDataType::Int | ShaderDataType::Bool => 1,
            ShaderDataType::Float2 | ShaderDataType::Int2 => 2,
            ShaderDataType::Float3 | ShaderDataType::Int3 => 3,
            ShaderDataType::Float4 | ShaderDataType::Int4 => 4,
            ShaderDataType::Mat3 => 3 * 3,
            ShaderDataType::Mat4 => 4 * 4,
        }
    }

    #[inline(always)]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ShaderDataType::Int
                | ShaderDataType::Int2
                | ShaderDataType::Int3
                | ShaderDataType::Int4
                | ShaderDataType::Bool
        )
    }
}

/// Pipeline stage a shader object belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "VERTEX"),
            ShaderStage::Fragment => write!(f, "FRAGMENT"),
        }
    }
}

/// Where to get the source code of a shader stage from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderSrc {
    Code(String),
    File(PathBuf),
}

impl ShaderSrc {
    /// Source text for this stage, reading it from disk if needed
    pub fn load(&self) -> Result<String, ShaderError> {
        match self {
            ShaderSrc::Code(code) => Ok(code.clone()),
            ShaderSrc::File(path) => {
                std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

impl From<&str> for ShaderSrc {
    fn from(code: &str) -> Self {
        ShaderSrc::Code(code.to_owned())
    }
}

#[derive(Debug)]
pub enum ShaderError {
    /// Could not compile one of the shader stages
    CompilationError { stage: ShaderStage, log: String },
    /// Stages compiled fine but the program could not be linked
    LinkError(String),
    /// The driver refused to create a shader or program object
    CreationError(String),
    /// Could not read a shader file
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No active uniform with this name in the program
    UniformNotFound {
        shader_name: String,
        uniform_name: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::CompilationError { stage, log } => {
                write!(f, "ERROR::SHADER::{stage}::COMPILATION_FAILED\n{log}")
            }
            ShaderError::LinkError(log) => {
                write!(f, "ERROR::SHADER::PROGRAM::LINKING_FAILED\n{log}")
            }
            ShaderError::CreationError(reason) => {
                write!(f, "Could not create OpenGL shader object: {reason}")
            }
            ShaderError::Io { path, source } => {
                write!(f, "Could not read shader file '{}': {source}", path.display())
            }
            ShaderError::UniformNotFound {
                shader_name,
                uniform_name,
            } => write!(
                f,
                "Could not find uniform '{uniform_name}' in shader '{shader_name}'. Did you forget to USE the uniform in that shader?"
            ),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
