use std::fs;
use std::path::Path;
use std::rc::Rc;

use sandbox_shader::ShaderSource;

use crate::error::{Error, ShaderFileError};
use crate::gl::{GlContext, GraphicsApi};

use super::compile::{compile_stage, delete_stages, link};
use super::uniform::UniformCache;

/// A linked shader program with a per-program uniform location cache.
///
/// Uniform setters look the name up through the cache; names the program does
/// not have are silently skipped. Each setter binds the program right before
/// uploading, so it does not depend on an earlier [`bind`](Self::bind).
pub struct Shader<G: GraphicsApi> {
    gl: Rc<GlContext<G>>,
    program: G::Program,
    uniforms: UniformCache<G::UniformLocation>,
    label: String,
}

impl<G: GraphicsApi> Shader<G> {
    /// Loads, compiles and links a `#shader` file.
    pub fn from_file(gl: &Rc<GlContext<G>>, path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file_error = |source| Error::ShaderFile {
            path: path.to_path_buf(),
            source,
        };

        let text = fs::read_to_string(path).map_err(|e| file_error(ShaderFileError::Io(e)))?;
        let source =
            sandbox_shader::parse_str(&text).map_err(|e| file_error(ShaderFileError::Parse(e)))?;

        Self::build(gl, &source, path.display().to_string())
    }

    /// Compiles and links already split sources (e.g. built from `include_str!`).
    pub fn from_source(gl: &Rc<GlContext<G>>, source: &ShaderSource) -> Result<Self, Error> {
        Self::build(gl, source, "<inline>".to_string())
    }

    fn build(gl: &Rc<GlContext<G>>, source: &ShaderSource, label: String) -> Result<Self, Error> {
        let mut stages = Vec::with_capacity(source.len());
        for (stage, text) in source.iter() {
            match compile_stage(gl, stage, text) {
                Ok(shader) => stages.push(shader),
                Err(e) => {
                    delete_stages(gl, &stages);
                    return Err(e);
                }
            }
        }

        let program = link(gl, &stages)?;
        log::info!("shader `{label}` linked ({} stages)", stages.len());

        Ok(Self {
            gl: Rc::clone(gl),
            program,
            uniforms: UniformCache::new(),
            label,
        })
    }

    pub fn bind(&self) {
        self.gl
            .call("use_program", |api| api.use_program(Some(self.program)));
    }

    pub fn unbind(&self) {
        self.gl.call("use_program", |api| api.use_program(None));
    }

    pub fn handle(&self) -> G::Program {
        self.program
    }

    /// File path the program was loaded from, or `<inline>`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Location of `name`, or `None` when the program has no such active uniform.
    pub fn uniform_location(&self, name: &str) -> Option<G::UniformLocation> {
        self.uniforms.resolve(name, || {
            self.gl.call("get_uniform_location", |api| {
                api.get_uniform_location(self.program, name)
            })
        })
    }

    pub fn set_uniform_1f(&self, name: &str, x: f32) {
        self.upload(name, "uniform_1_f32", |api, loc| api.uniform_1_f32(loc, x));
    }

    pub fn set_uniform_4f(&self, name: &str, x: f32, y: f32, z: f32, w: f32) {
        self.upload(name, "uniform_4_f32", |api, loc| api.uniform_4_f32(loc, x, y, z, w));
    }

    /// Uploads a `float[N]` array uniform.
    pub fn set_uniform_1fv(&self, name: &str, values: &[f32]) {
        self.upload(name, "uniform_1_f32_slice", |api, loc| {
            api.uniform_1_f32_slice(loc, values)
        });
    }

    pub fn set_uniform_1i(&self, name: &str, x: i32) {
        self.upload(name, "uniform_1_i32", |api, loc| api.uniform_1_i32(loc, x));
    }

    /// Uploads a column-major `mat4`.
    pub fn set_uniform_mat4(&self, name: &str, matrix: &[f32; 16]) {
        self.upload(name, "uniform_matrix_4_f32_slice", |api, loc| {
            api.uniform_matrix_4_f32_slice(loc, false, matrix)
        });
    }

    fn upload(&self, name: &str, call: &'static str, f: impl FnOnce(&G, &G::UniformLocation)) {
        let Some(location) = self.uniform_location(name) else { return };
        self.bind();
        self.gl.call(call, |api| f(api, &location));
    }
}

impl<G: GraphicsApi> Drop for Shader<G> {
    fn drop(&mut self) {
        log::debug!("deleting shader program `{}`", self.label);
        self.gl.call("delete_program", |api| api.delete_program(self.program));
    }
}
