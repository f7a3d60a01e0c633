use crate::error::Result;
use crate::variant::{Scene, Variant};

mod buffer;
mod pipeline;
pub mod star;
mod vertex;

use buffer::Buffer;
use pipeline::Pipeline;
pub use vertex::{AttributeDesc, Vertex, VertexLayout};

pub const STAR_VERT: &str = include_str!("data/star.vert");
pub const STAR_FRAG: &str = include_str!("data/star.frag");

struct StarPass {
    pipeline: Pipeline,
    buffer: Buffer<Vertex>,
}

impl StarPass {
    fn new() -> Result<Self> {
        let pipeline = Pipeline::new(STAR_VERT, STAR_FRAG)?;
        let buffer = Buffer::new(&star::vertices());
        Ok(StarPass { pipeline, buffer })
    }

    fn draw(&self) {
        self.pipeline.bind();
        self.buffer.bind();
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, self.buffer.count()) }
    }
}

/// Owns every GL object of a variant. Must be created and dropped while the
/// context is current.
pub struct Renderer {
    frame: usize,
    fps_counter: fps_counter::FPSCounter,
    clear_color: [f32; 4],
    star: Option<StarPass>,
}

impl Renderer {
    pub fn new(variant: &Variant) -> Result<Self> {
        let star = match variant.scene {
            Scene::Clear => None,
            Scene::Star => Some(StarPass::new()?),
        };

        Ok(Renderer {
            frame: 0,
            fps_counter: fps_counter::FPSCounter::new(),
            clear_color: variant.clear_color,
            star,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport {}x{}", width, height);
        unsafe { gl::Viewport(0, 0, width as i32, height as i32) }
    }

    pub fn render(&mut self) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        if let Some(star) = &self.star {
            star.draw();
        }

        self.frame += 1;
        log::trace!("frame {} ({} fps)", self.frame, self.fps_counter.tick());
    }
}
