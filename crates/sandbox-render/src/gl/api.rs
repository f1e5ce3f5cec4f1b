use std::fmt::Debug;

/// The slice of OpenGL this crate drives.
///
/// Method names and argument order follow `glow::HasContext`, so the native
/// implementation forwards one-to-one. Unlike glow, methods are safe: the
/// "context is current on this thread" obligation is discharged once, when the
/// implementing value is constructed (see [`GlowApi::new`](super::GlowApi::new)).
///
/// Enum arguments (`kind`, `target`, `mode`, ...) are raw GL constants from
/// [`glow`].
pub trait GraphicsApi {
    type Shader: Copy + Eq + Debug;
    type Program: Copy + Eq + Debug;
    type Buffer: Copy + Eq + Debug;
    type VertexArray: Copy + Eq + Debug;
    type UniformLocation: Clone + Debug;

    fn get_error(&self) -> u32;
    fn version(&self) -> String;

    // ── frame ─────────────────────────────────────────────────────────────

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);

    // ── shaders & programs ────────────────────────────────────────────────

    fn create_shader(&self, kind: u32) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn get_shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn get_program_link_status(&self, program: Self::Program) -> bool;
    fn validate_program(&self, program: Self::Program);
    fn get_program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // ── uniforms ──────────────────────────────────────────────────────────

    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn uniform_1_f32(&self, location: &Self::UniformLocation, x: f32);
    fn uniform_4_f32(&self, location: &Self::UniformLocation, x: f32, y: f32, z: f32, w: f32);
    fn uniform_1_f32_slice(&self, location: &Self::UniformLocation, v: &[f32]);
    fn uniform_1_i32(&self, location: &Self::UniformLocation, x: i32);
    fn uniform_matrix_4_f32_slice(
        &self,
        location: &Self::UniformLocation,
        transpose: bool,
        v: &[f32],
    );

    // ── buffers & vertex arrays ───────────────────────────────────────────

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    /// Integer attribute (`glVertexAttribIPointer`): values reach the shader
    /// as `int`/`uint` without conversion.
    fn vertex_attrib_pointer_i32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        stride: i32,
        offset: i32,
    );
}
