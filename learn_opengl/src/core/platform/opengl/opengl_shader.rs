use glow::{Context, HasContext, NativeProgram, NativeShader, NativeUniformLocation};
use std::collections::HashMap;

use crate::core::rendering::shader::{ShaderError, ShaderStage};

/// A linked shader program plus the uniform locations looked up so far
pub struct OpenGLShader {
    pub(super) name: String,
    pub(super) native_program: NativeProgram,
    uniforms: HashMap<String, NativeUniformLocation>,
}

impl OpenGLShader {
    /// Compile and link a vertex + fragment program
    pub(super) fn create(
        gl: &Context,
        name: &str,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        let stages = [
            (ShaderStage::Vertex, vertex_src),
            (ShaderStage::Fragment, fragment_src),
        ];
        let native_program = compile_shaders(gl, &stages)?;

        Ok(OpenGLShader {
            name: name.to_owned(),
            native_program,
            uniforms: HashMap::new(),
        })
    }

    /// Location of an active uniform, cached after the first lookup
    pub(super) fn uniform_location(
        &mut self,
        gl: &Context,
        uniform_name: &str,
    ) -> Result<NativeUniformLocation, ShaderError> {
        if let Some(location) = self.uniforms.get(uniform_name) {
            return Ok(location.clone());
        }

        let location = unsafe { gl.get_uniform_location(self.native_program, uniform_name) }
            .ok_or_else(|| ShaderError::UniformNotFound {
                shader_name: self.name.clone(),
                uniform_name: uniform_name.to_owned(),
            })?;
        self.uniforms.insert(uniform_name.to_owned(), location.clone());
        Ok(location)
    }
}

#[inline(always)]
fn gl_shader_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

/// Compile shaders into a program. Each pair is (stage, source code).
///
/// On failure every object created so far is deleted and the driver's info log
/// is returned inside the error.
pub(super) fn compile_shaders(
    gl: &Context,
    shaders: &[(ShaderStage, &str)],
) -> Result<NativeProgram, ShaderError> {
    unsafe {
        let program = gl.create_program().map_err(ShaderError::CreationError)?;
        let mut created_shaders: Vec<NativeShader> = vec![];

        for (stage, source) in shaders.iter() {
            let shader = match gl.create_shader(gl_shader_type(*stage)) {
                Ok(shader) => shader,
                Err(reason) => {
                    delete_all(gl, program, created_shaders);
                    return Err(ShaderError::CreationError(reason));
                }
            };
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            // Check if compilation for this shader went ok
            if !gl.get_shader_compile_status(shader) {
                let info_log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                delete_all(gl, program, created_shaders);

                let err = ShaderError::CompilationError {
                    stage: *stage,
                    log: info_log,
                };
                log::error!("{err}");
                return Err(err);
            }

            // Compilation ok, attach this shader to the program we are creating
            gl.attach_shader(program, shader);
            created_shaders.push(shader);
        }

        // Now that all shaders are compiled and attached to the program, link it
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            let info_log = gl.get_program_info_log(program);
            delete_all(gl, program, created_shaders);

            let err = ShaderError::LinkError(info_log);
            log::error!("{err}");
            return Err(err);
        }

        // The program keeps the linked binary, the shader objects are no longer needed
        for shader in created_shaders.into_iter() {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }

        Ok(program)
    }
}

unsafe fn delete_all(gl: &Context, program: NativeProgram, shaders: Vec<NativeShader>) {
    for shader in shaders.into_iter() {
        gl.delete_shader(shader);
    }
    gl.delete_program(program);
}
