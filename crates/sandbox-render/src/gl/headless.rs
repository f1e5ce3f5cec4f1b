//! Recording [`GraphicsApi`] used by the unit tests.
//!
//! Objects are plain integer names. Binding state, the error queue, compile
//! and link outcomes and uniform locations are simulated closely enough to
//! catch missing binds and misattributed errors; nothing is rasterized.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use super::{ErrorPolicy, GlConfig, GlContext, GraphicsApi};

#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    F32(f32),
    Vec4([f32; 4]),
    F32Slice(Vec<f32>),
    I32(i32),
    Mat4 { transpose: bool, data: Vec<f32> },
}

/// State-changing calls, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ClearColor([f32; 4]),
    Clear(u32),
    UseProgram(Option<u32>),
    ValidateProgram(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, len: usize, usage: u32 },
    BindVertexArray(Option<u32>),
    EnableAttrib(u32),
    AttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    AttribIPointer {
        index: u32,
        size: i32,
        data_type: u32,
        stride: i32,
        offset: i32,
    },
    Uniform { location: u32, value: UniformValue },
    DrawArrays { mode: u32, first: i32, count: i32 },
    DrawElements { mode: u32, count: i32, element_type: u32, offset: i32 },
    DeleteShader(u32),
    DeleteProgram(u32),
    DeleteBuffer(u32),
    DeleteVertexArray(u32),
}

#[derive(Debug, Default)]
struct ShaderObject {
    kind: u32,
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Debug, Default)]
struct ProgramObject {
    attached: Vec<u32>,
    linked: bool,
    log: String,
    uniforms: Vec<String>,
}

#[derive(Debug, Default)]
struct State {
    next_name: u32,
    fail_creates: bool,
    errors: VecDeque<u32>,
    calls: Vec<Call>,
    uniform_queries: usize,

    shaders: HashMap<u32, ShaderObject>,
    programs: HashMap<u32, ProgramObject>,
    buffers: HashSet<u32>,
    vertex_arrays: HashSet<u32>,

    program: Option<u32>,
    vertex_array: Option<u32>,
    bound_buffers: HashMap<u32, u32>,
}

impl State {
    fn alloc(&mut self) -> Result<u32, String> {
        if self.fail_creates {
            return Err("headless: object creation disabled".to_string());
        }
        self.next_name += 1;
        Ok(self.next_name)
    }

    fn raise(&mut self, code: u32) {
        self.errors.push_back(code);
    }
}

#[derive(Debug, Default)]
pub struct HeadlessApi {
    state: RefCell<State>,
}

impl HeadlessApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an error flag as if an earlier call had raised it.
    pub fn push_error(&self, code: u32) {
        self.state.borrow_mut().raise(code);
    }

    /// Makes every following `create_*` fail.
    pub fn fail_creates(&self, fail: bool) {
        self.state.borrow_mut().fail_creates = fail;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Number of `get_uniform_location` queries that reached the API.
    pub fn uniform_queries(&self) -> usize {
        self.state.borrow().uniform_queries
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().buffers.len()
    }

    pub fn live_vertex_arrays(&self) -> usize {
        self.state.borrow().vertex_arrays.len()
    }

    pub fn bound_program(&self) -> Option<u32> {
        self.state.borrow().program
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn uniform(&self, location: u32, value: UniformValue) {
        let mut st = self.state.borrow_mut();
        if st.program.is_none() {
            st.raise(glow::INVALID_OPERATION);
        }
        st.calls.push(Call::Uniform { location, value });
    }
}

/// Context over a fresh headless API that panics on any GL error.
pub fn headless_context() -> Rc<GlContext<HeadlessApi>> {
    GlContext::new(
        HeadlessApi::new(),
        GlConfig {
            error_policy: ErrorPolicy::Abort,
            ..GlConfig::default()
        },
    )
}

// ── fake compiler ─────────────────────────────────────────────────────────

/// Accepts sources that define `main` and close every statement before `}`.
fn check_source(source: &str) -> Result<(), String> {
    let mut depth = 0i32;
    let mut last = None;
    for (line_idx, line) in source.lines().enumerate() {
        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    if !matches!(last, None | Some(';' | '{' | '}')) {
                        return Err(format!(
                            "0:{}(1): error: syntax error, unexpected '}}', expecting ',' or ';'",
                            line_idx + 1
                        ));
                    }
                    depth -= 1;
                }
                _ => {}
            }
            if !ch.is_whitespace() {
                last = Some(ch);
            }
        }
    }
    if depth != 0 {
        return Err("0:0(0): error: syntax error, unexpected end of file".to_string());
    }
    if !source.contains("main(") {
        return Err("error: main function not found".to_string());
    }
    Ok(())
}

/// Names declared as `uniform <type> <name>[N];`, in declaration order.
fn declared_uniforms(source: &str) -> impl Iterator<Item = String> + '_ {
    source.lines().filter_map(|line| {
        let mut words = line.split_whitespace();
        if words.next()? != "uniform" {
            return None;
        }
        let _ty = words.next()?;
        let name = words.next()?;
        let end = name.find(['[', ';']).unwrap_or(name.len());
        Some(name[..end].to_string())
    })
}

impl GraphicsApi for HeadlessApi {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = u32;

    fn get_error(&self) -> u32 {
        self.state
            .borrow_mut()
            .errors
            .pop_front()
            .unwrap_or(glow::NO_ERROR)
    }

    fn version(&self) -> String {
        "3.3 (headless)".to_string()
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor([red, green, blue, alpha]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        let mut st = self.state.borrow_mut();
        if st.program.is_none() || st.vertex_array.is_none() {
            st.raise(glow::INVALID_OPERATION);
        }
        st.calls.push(Call::DrawArrays { mode, first, count });
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        let mut st = self.state.borrow_mut();
        if st.program.is_none()
            || st.vertex_array.is_none()
            || !st.bound_buffers.contains_key(&glow::ELEMENT_ARRAY_BUFFER)
        {
            st.raise(glow::INVALID_OPERATION);
        }
        st.calls.push(Call::DrawElements { mode, count, element_type, offset });
    }

    fn create_shader(&self, kind: u32) -> Result<u32, String> {
        let mut st = self.state.borrow_mut();
        let name = st.alloc()?;
        st.shaders.insert(name, ShaderObject { kind, ..ShaderObject::default() });
        Ok(name)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        let mut st = self.state.borrow_mut();
        match st.shaders.get_mut(&shader) {
            Some(obj) => obj.source = source.to_string(),
            None => st.raise(glow::INVALID_VALUE),
        }
    }

    fn compile_shader(&self, shader: u32) {
        let mut st = self.state.borrow_mut();
        match st.shaders.get_mut(&shader) {
            Some(obj) => match check_source(&obj.source) {
                Ok(()) => obj.compiled = true,
                Err(log) => {
                    obj.compiled = false;
                    obj.log = log;
                }
            },
            None => st.raise(glow::INVALID_VALUE),
        }
    }

    fn get_shader_compile_status(&self, shader: u32) -> bool {
        self.state.borrow().shaders.get(&shader).is_some_and(|s| s.compiled)
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        let mut st = self.state.borrow_mut();
        st.shaders.remove(&shader);
        st.calls.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut st = self.state.borrow_mut();
        let name = st.alloc()?;
        st.programs.insert(name, ProgramObject::default());
        Ok(name)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut st = self.state.borrow_mut();
        if !st.shaders.contains_key(&shader) {
            st.raise(glow::INVALID_VALUE);
            return;
        }
        match st.programs.get_mut(&program) {
            Some(obj) => obj.attached.push(shader),
            None => st.raise(glow::INVALID_VALUE),
        }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut st = self.state.borrow_mut();
        match st.programs.get_mut(&program) {
            Some(obj) => obj.attached.retain(|s| *s != shader),
            None => st.raise(glow::INVALID_VALUE),
        }
    }

    fn link_program(&self, program: u32) {
        let mut guard = self.state.borrow_mut();
        let st = &mut *guard;
        if !st.programs.contains_key(&program) {
            st.raise(glow::INVALID_VALUE);
            return;
        }

        let stages: Vec<&ShaderObject> = st.programs[&program]
            .attached
            .iter()
            .filter_map(|s| st.shaders.get(s))
            .collect();
        let has = |kind: u32| stages.iter().any(|s| s.kind == kind);

        let result = if stages.iter().any(|s| !s.compiled) {
            Err("error: linking with uncompiled/unspecialized shader".to_string())
        } else if !has(glow::VERTEX_SHADER) {
            Err("error: program lacks a vertex shader".to_string())
        } else if !has(glow::FRAGMENT_SHADER) {
            Err("error: program lacks a fragment shader".to_string())
        } else {
            let mut uniforms: Vec<String> = Vec::new();
            for name in stages.iter().flat_map(|s| declared_uniforms(&s.source)) {
                if !uniforms.contains(&name) {
                    uniforms.push(name);
                }
            }
            Ok(uniforms)
        };

        let Some(obj) = st.programs.get_mut(&program) else { return };
        match result {
            Ok(uniforms) => {
                obj.linked = true;
                obj.uniforms = uniforms;
            }
            Err(log) => {
                obj.linked = false;
                obj.log = log;
            }
        }
    }

    fn get_program_link_status(&self, program: u32) -> bool {
        self.state.borrow().programs.get(&program).is_some_and(|p| p.linked)
    }

    fn validate_program(&self, program: u32) {
        let mut st = self.state.borrow_mut();
        if !st.programs.contains_key(&program) {
            st.raise(glow::INVALID_VALUE);
        }
        st.calls.push(Call::ValidateProgram(program));
    }

    fn get_program_info_log(&self, program: u32) -> String {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.log.clone())
            .unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        let mut st = self.state.borrow_mut();
        let linked = program.is_none_or(|p| st.programs.get(&p).is_some_and(|p| p.linked));
        if linked {
            st.program = program;
        } else {
            st.raise(glow::INVALID_OPERATION);
        }
        st.calls.push(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        let mut st = self.state.borrow_mut();
        st.programs.remove(&program);
        if st.program == Some(program) {
            st.program = None;
        }
        st.calls.push(Call::DeleteProgram(program));
    }

    fn get_uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        let mut st = self.state.borrow_mut();
        st.uniform_queries += 1;
        let found = st
            .programs
            .get(&program)
            .filter(|p| p.linked)
            .map(|p| p.uniforms.iter().position(|u| u == name));
        match found {
            Some(location) => location.map(|i| i as u32),
            None => {
                st.raise(glow::INVALID_OPERATION);
                None
            }
        }
    }

    fn uniform_1_f32(&self, location: &u32, x: f32) {
        self.uniform(*location, UniformValue::F32(x));
    }

    fn uniform_4_f32(&self, location: &u32, x: f32, y: f32, z: f32, w: f32) {
        self.uniform(*location, UniformValue::Vec4([x, y, z, w]));
    }

    fn uniform_1_f32_slice(&self, location: &u32, v: &[f32]) {
        self.uniform(*location, UniformValue::F32Slice(v.to_vec()));
    }

    fn uniform_1_i32(&self, location: &u32, x: i32) {
        self.uniform(*location, UniformValue::I32(x));
    }

    fn uniform_matrix_4_f32_slice(&self, location: &u32, transpose: bool, v: &[f32]) {
        if v.len() % 16 != 0 {
            self.push_error(glow::INVALID_VALUE);
        }
        self.uniform(*location, UniformValue::Mat4 { transpose, data: v.to_vec() });
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut st = self.state.borrow_mut();
        let name = st.alloc()?;
        st.buffers.insert(name);
        Ok(name)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        let mut st = self.state.borrow_mut();
        match buffer {
            Some(b) if !st.buffers.contains(&b) => st.raise(glow::INVALID_VALUE),
            Some(b) => {
                st.bound_buffers.insert(target, b);
            }
            None => {
                st.bound_buffers.remove(&target);
            }
        }
        st.calls.push(Call::BindBuffer { target, buffer });
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        let mut st = self.state.borrow_mut();
        if !st.bound_buffers.contains_key(&target) {
            st.raise(glow::INVALID_OPERATION);
        }
        st.calls.push(Call::BufferData { target, len: data.len(), usage });
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut st = self.state.borrow_mut();
        st.buffers.remove(&buffer);
        st.bound_buffers.retain(|_, b| *b != buffer);
        st.calls.push(Call::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut st = self.state.borrow_mut();
        let name = st.alloc()?;
        st.vertex_arrays.insert(name);
        Ok(name)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        let mut st = self.state.borrow_mut();
        match vertex_array {
            Some(v) if !st.vertex_arrays.contains(&v) => st.raise(glow::INVALID_OPERATION),
            _ => st.vertex_array = vertex_array,
        }
        st.calls.push(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        let mut st = self.state.borrow_mut();
        st.vertex_arrays.remove(&vertex_array);
        if st.vertex_array == Some(vertex_array) {
            st.vertex_array = None;
        }
        st.calls.push(Call::DeleteVertexArray(vertex_array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        let mut st = self.state.borrow_mut();
        if st.vertex_array.is_none() {
            st.raise(glow::INVALID_OPERATION);
        }
        st.calls.push(Call::EnableAttrib(index));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        let mut st = self.state.borrow_mut();
        if st.vertex_array.is_none() || !st.bound_buffers.contains_key(&glow::ARRAY_BUFFER) {
            st.raise(glow::INVALID_OPERATION);
        }
        st.calls.push(Call::AttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn vertex_attrib_pointer_i32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        stride: i32,
        offset: i32,
    ) {
        let mut st = self.state.borrow_mut();
        if st.vertex_array.is_none() || !st.bound_buffers.contains_key(&glow::ARRAY_BUFFER) {
            st.raise(glow::INVALID_OPERATION);
        } else if data_type == glow::FLOAT {
            st.raise(glow::INVALID_ENUM);
        }
        st.calls.push(Call::AttribIPointer {
            index,
            size,
            data_type,
            stride,
            offset,
        });
    }
}
