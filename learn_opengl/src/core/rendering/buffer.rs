use crate::core::rendering::shader::ShaderDataType;
use std::fmt;
use std::slice::Iter;

/// Describes how the vertices inside a vertex buffer are laid out.
/// Element `i` feeds the attribute at `layout (location = i)`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BufferLayout {
    elements: Vec<BufferElement>,
    stride: u32,
}

impl BufferLayout {
    pub fn from_elements(elements: Vec<BufferElement>) -> Self {
        let mut layout = BufferLayout {
            elements,
            stride: 0,
        };

        layout.compute_offset_and_stride();

        layout
    }

    fn compute_offset_and_stride(&mut self) {
        let mut offset = 0;
        for element in self.elements.iter_mut() {
            element.offset = offset;
            offset += element.size;
        }

        self.stride = offset;
    }

    #[inline(always)]
    pub fn get_buffer_elements(&self) -> &[BufferElement] {
        &self.elements
    }

    #[inline(always)]
    pub fn get_stride(&self) -> u32 {
        self.stride
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, BufferElement> {
        self.elements.iter()
    }

    /// How many whole vertices fit in `byte_len` bytes of vertex data
    pub fn vertex_count(&self, byte_len: usize) -> Result<usize, BufferError> {
        if self.stride == 0 {
            return Err(BufferError::EmptyLayout);
        }

        let stride = self.stride as usize;
        if byte_len % stride != 0 {
            return Err(BufferError::MisalignedVertexData { byte_len, stride });
        }

        Ok(byte_len / stride)
    }

    /// Check that every element can be fed to a vertex attribute.
    /// Vertex data is uploaded as `f32`, so integer and bool attributes are rejected.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.elements.is_empty() {
            return Err(BufferError::EmptyLayout);
        }

        for element in self.elements.iter() {
            let data_type = element.data_type;
            let unsupported = data_type.is_integer()
                || matches!(
                    data_type,
                    ShaderDataType::None | ShaderDataType::Mat3 | ShaderDataType::Mat4
                );
            if unsupported {
                return Err(BufferError::UnsupportedAttributeType {
                    name: element.name.clone(),
                    data_type,
                });
            }
        }

        Ok(())
    }
}

/// Describes a buffer element, part of the vertex data to send to a shader
#[derive(Debug, Clone, PartialEq)]
pub struct BufferElement {
    name: String,
    data_type: ShaderDataType,
    size: u32,
    offset: u32,
    normalized: bool,
}

impl BufferElement {
    pub fn new(name: &str, data_type: ShaderDataType, normalized: bool) -> Self {
        BufferElement {
            size: data_type.get_size(),
            name: name.to_owned(),
            data_type,
            normalized,
            offset: 0,
        }
    }

    #[inline(always)]
    pub fn get_component_count(&self) -> u32 {
        self.data_type.get_component_count()
    }

    #[inline(always)]
    pub fn get_data_type(&self) -> ShaderDataType {
        self.data_type
    }

    #[inline(always)]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    #[inline(always)]
    pub fn get_offset(&self) -> u32 {
        self.offset
    }

    #[inline(always)]
    pub fn get_size(&self) -> u32 {
        self.size
    }

    #[inline(always)]
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// The layout has no elements, so vertices have no size
    EmptyLayout,
    /// Vertex data does not hold a whole number of vertices
    MisalignedVertexData { byte_len: usize, stride: usize },
    /// This data type can't be used as a single vertex attribute
    UnsupportedAttributeType {
        name: String,
        data_type: ShaderDataType,
    },
    /// The driver refused to create a buffer or vertex array
    CreationError(String),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::EmptyLayout => write!(f, "Buffer layout has no elements"),
            BufferError::MisalignedVertexData { byte_len, stride } => write!(
                f,
                "Vertex data of {byte_len} bytes is not a multiple of the layout stride ({stride} bytes)"
            ),
            BufferError::UnsupportedAttributeType { name, data_type } => write!(
                f,
                "Attribute '{name}' has type {data_type:?}, which can't be a vertex attribute"
            ),
            BufferError::CreationError(reason) => {
                write!(f, "Could not create OpenGL buffer object: {reason}")
            }
        }
    }
}

impl std::error::Error for BufferError {}
