use std::mem;

/// One float vertex attribute inside an interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDesc {
    pub location: u32,
    pub components: i32,
    pub offset: usize,
}

/// Vertex types that know how they are laid out in a buffer.
pub trait VertexLayout: Copy {
    const ATTRIBUTES: &'static [AttributeDesc];

    fn stride() -> i32 {
        mem::size_of::<Self>() as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[allow(non_snake_case)]
pub struct Vertex {
    pub a_Pos: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Vertex { a_Pos: [x, y] }
    }
}

impl VertexLayout for Vertex {
    const ATTRIBUTES: &'static [AttributeDesc] = &[AttributeDesc {
        location: 0,
        components: 2,
        offset: 0,
    }];
}
