use crate::error::{Error, Result};
use crate::variant::Variant;
use glutin::{Api, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use std::ffi::{c_void, CStr};
use winit::event_loop::EventLoop;

pub type Context = WindowedContext<PossiblyCurrent>;

/// Entry points the renderer calls. Resolution of all of them is required
/// before anything is drawn.
const REQUIRED: &[(&str, fn() -> bool)] = &[
    ("glViewport", gl::Viewport::is_loaded),
    ("glClearColor", gl::ClearColor::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glGetString", gl::GetString::is_loaded),
    ("glCreateShader", gl::CreateShader::is_loaded),
    ("glShaderSource", gl::ShaderSource::is_loaded),
    ("glCompileShader", gl::CompileShader::is_loaded),
    ("glGetShaderiv", gl::GetShaderiv::is_loaded),
    ("glGetShaderInfoLog", gl::GetShaderInfoLog::is_loaded),
    ("glDeleteShader", gl::DeleteShader::is_loaded),
    ("glCreateProgram", gl::CreateProgram::is_loaded),
    ("glAttachShader", gl::AttachShader::is_loaded),
    ("glLinkProgram", gl::LinkProgram::is_loaded),
    ("glGetProgramiv", gl::GetProgramiv::is_loaded),
    ("glGetProgramInfoLog", gl::GetProgramInfoLog::is_loaded),
    ("glUseProgram", gl::UseProgram::is_loaded),
    ("glDeleteProgram", gl::DeleteProgram::is_loaded),
    ("glGenVertexArrays", gl::GenVertexArrays::is_loaded),
    ("glBindVertexArray", gl::BindVertexArray::is_loaded),
    ("glDeleteVertexArrays", gl::DeleteVertexArrays::is_loaded),
    ("glGenBuffers", gl::GenBuffers::is_loaded),
    ("glBindBuffer", gl::BindBuffer::is_loaded),
    ("glBufferData", gl::BufferData::is_loaded),
    ("glDeleteBuffers", gl::DeleteBuffers::is_loaded),
    ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded),
    (
        "glEnableVertexAttribArray",
        gl::EnableVertexAttribArray::is_loaded,
    ),
    ("glDrawArrays", gl::DrawArrays::is_loaded),
];

/// Opens the variant's window with a 3.3 core context and makes it current
/// on this thread.
pub fn create(variant: &Variant, event_loop: &EventLoop<()>) -> Result<Context> {
    let wb = winit::window::WindowBuilder::new()
        .with_title(variant.title)
        .with_inner_size(winit::dpi::Size::Physical(winit::dpi::PhysicalSize::new(
            variant.dims.width,
            variant.dims.height,
        )))
        .with_min_inner_size(winit::dpi::Size::Logical(winit::dpi::LogicalSize::new(
            variant.min_dims.width as f64,
            variant.min_dims.height as f64,
        )));

    let context = glutin::ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
        .with_gl_profile(GlProfile::Core)
        .build_windowed(wb, event_loop)?;

    if let Some(message) = variant.creation_message() {
        println!("{}", message);
    }

    let context = unsafe { context.make_current() }.map_err(|(_, err)| err)?;
    log::info!(
        "created {:?} context for window {:?}",
        context.get_api(),
        variant.title
    );
    Ok(context)
}

/// Resolves the GL entry points through `loader` and checks that every one
/// the renderer needs was found.
pub fn load_gl<F>(loader: F) -> Result<()>
where
    F: FnMut(&'static str) -> *const c_void,
{
    gl::load_with(loader);

    if let Some(&(missing, _)) = REQUIRED.iter().find(|(_, is_loaded)| !is_loaded()) {
        log::error!("unresolved GL entry point {}", missing);
        return Err(Error::Loader { missing });
    }

    log::info!("GL version: {}", gl_string(gl::VERSION));
    Ok(())
}

pub fn load_gl_from(context: &Context) -> Result<()> {
    load_gl(|symbol| context.get_proc_address(symbol) as *const _)
}

fn gl_string(name: gl::types::GLenum) -> String {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            return String::from("unknown");
        }
        CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn unresolvable_loader_is_fatal() {
        let err = load_gl(|_| ptr::null()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to initialize GLAD");
        match err {
            Error::Loader { missing } => assert_eq!(missing, "glViewport"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn required_entry_points_are_unique() {
        for (i, (name, _)) in REQUIRED.iter().enumerate() {
            assert!(name.starts_with("gl"));
            assert!(REQUIRED[i + 1..].iter().all(|(other, _)| other != name));
        }
    }
}
