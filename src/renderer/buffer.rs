use super::vertex::VertexLayout;
use gl::types::{GLsizei, GLsizeiptr, GLuint};
use std::marker::PhantomData;
use std::mem;

/// A vertex array object plus the single static buffer it reads from.
/// The contents are uploaded once in `new` and never touched again.
pub struct Buffer<T> {
    vao: GLuint,
    vbo: GLuint,
    len: GLsizei,
    _vertex: PhantomData<T>,
}

impl<T: VertexLayout> Buffer<T> {
    pub fn new(content: &[T]) -> Self {
        assert_ne!(content.len(), 0);
        let buffer_len = (content.len() * mem::size_of::<T>()) as GLsizeiptr;

        let mut vao = 0;
        let mut vbo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                buffer_len,
                content.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            for attribute in T::ATTRIBUTES {
                gl::VertexAttribPointer(
                    attribute.location,
                    attribute.components,
                    gl::FLOAT,
                    gl::FALSE,
                    T::stride(),
                    attribute.offset as *const _,
                );
                gl::EnableVertexAttribArray(attribute.location);
            }

            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
        log::debug!(
            "uploaded {} vertices ({} bytes) to buffer {}",
            content.len(),
            buffer_len,
            vbo
        );

        Buffer {
            vao,
            vbo,
            len: content.len() as GLsizei,
            _vertex: PhantomData,
        }
    }
}

impl<T> Buffer<T> {
    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.vao) }
    }

    pub fn count(&self) -> GLsizei {
        self.len
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
