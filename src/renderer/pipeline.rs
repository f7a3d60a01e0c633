use crate::error::{Error, Result, ShaderStage};
use gl::types::{GLchar, GLenum, GLint, GLuint};

/// A linked vertex + fragment program.
pub struct Pipeline {
    program: GLuint,
}

impl Pipeline {
    pub fn new(vertex: &str, fragment: &str) -> Result<Self> {
        let vs = compile(ShaderStage::Vertex, vertex)?;
        let fs = match compile(ShaderStage::Fragment, fragment) {
            Ok(fs) => fs,
            Err(err) => {
                unsafe { gl::DeleteShader(vs) };
                return Err(err);
            }
        };

        let program = unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vs);
            gl::AttachShader(program, fs);
            gl::LinkProgram(program);

            // the program keeps what it needs from the stages
            gl::DeleteShader(vs);
            gl::DeleteShader(fs);
            program
        };

        let mut success = 0;
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut success) };
        if success == 0 {
            let log = program_info_log(program);
            unsafe { gl::DeleteProgram(program) };
            return Err(Error::ShaderLink { log });
        }

        log::info!("linked shader program {}", program);
        Ok(Pipeline { program })
    }

    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.program) }
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program) }
    }
}

fn compile(stage: ShaderStage, source: &str) -> Result<GLuint> {
    let kind: GLenum = match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    };

    let shader = unsafe {
        let shader = gl::CreateShader(kind);
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;
        gl::ShaderSource(shader, 1, &ptr, &len);
        gl::CompileShader(shader);
        shader
    };

    let mut success = 0;
    unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success) };
    if success == 0 {
        let log = shader_info_log(shader);
        unsafe { gl::DeleteShader(shader) };
        return Err(Error::ShaderCompile { stage, log });
    }

    log::debug!("compiled {} shader {}", stage, shader);
    Ok(shader)
}

fn shader_info_log(shader: GLuint) -> String {
    let mut len = 0;
    unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len) };
    let mut buf = vec![0u8; len.max(1) as usize];
    let mut written = 0;
    unsafe {
        gl::GetShaderInfoLog(
            shader,
            buf.len() as GLint,
            &mut written,
            buf.as_mut_ptr().cast(),
        )
    };
    trim_log(buf, written)
}

fn program_info_log(program: GLuint) -> String {
    let mut len = 0;
    unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len) };
    let mut buf = vec![0u8; len.max(1) as usize];
    let mut written = 0;
    unsafe {
        gl::GetProgramInfoLog(
            program,
            buf.len() as GLint,
            &mut written,
            buf.as_mut_ptr().cast(),
        )
    };
    trim_log(buf, written)
}

/// Drivers count the terminating nul in some places and not in others.
fn trim_log(mut buf: Vec<u8>, written: GLint) -> String {
    buf.truncate(written.max(0) as usize);
    let end = buf.iter().position(|c| *c == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).trim_end().to_owned()
}
