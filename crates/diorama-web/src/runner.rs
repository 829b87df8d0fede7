use diorama_engine::systems::render::build_render_buffer;
use diorama_engine::{
    FrameClock, InputEvent, InputQueue, ProtocolLayout, RenderBuffer, Scene, SceneConfig,
    SceneContext,
};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete scene crate creates a `thread_local!` SceneRunner and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct SceneRunner<S: Scene> {
    scene: S,
    ctx: SceneContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    config: SceneConfig,
    layout: ProtocolLayout,
    /// Manifest JSON, cached at init so the page can fetch it any time.
    manifest_json: String,
    initialized: bool,
}

impl<S: Scene> SceneRunner<S> {
    /// A seed of zero means "seed from the wall clock".
    pub fn new(scene: S, seed: u64) -> Self {
        let seed = if seed == 0 {
            js_sys::Date::now() as u64
        } else {
            seed
        };
        let config = scene.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            scene,
            ctx: SceneContext::new(seed),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            clock: FrameClock::new(),
            config,
            layout,
            manifest_json: String::new(),
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.scene.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.manifest_json = self.scene.manifest().to_json();
        self.scene.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update the scene, advance effects and overlays,
    /// rebuild the outgoing buffers. `now_ms` is the page's
    /// `performance.now()` timestamp; the elapsed time is derived here.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        let dt = self.clock.feed(now_ms);

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.scene.update(&mut self.ctx, &self.input, dt);
        self.ctx.effects.tick(dt);
        self.ctx.overlays.tick(dt);

        // Drain input after update
        self.input.drain();

        // Build render buffer from entities
        build_render_buffer(self.ctx.stage.iter(), &mut self.render_buffer);

        // Rebuild effects buffer
        self.ctx.effects.rebuild_effects_buffer();
    }

    // ---- JSON views read by the page ----

    pub fn manifest_json(&self) -> String {
        self.manifest_json.clone()
    }

    pub fn overlays_json(&self) -> String {
        self.ctx.overlays.to_json()
    }

    pub fn panel_json(&self) -> String {
        self.ctx.panel_json()
    }

    /// Scene-specific view, empty string when the scene has none for `kind`.
    pub fn view_json(&self, kind: u32) -> String {
        self.scene.view(kind).unwrap_or_default()
    }

    // ---- Pointer accessors for WASM memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn effects_ptr(&self) -> *const f32 {
        self.ctx.effects.effects_buffer_ptr()
    }

    pub fn effects_vertex_count(&self) -> u32 {
        self.ctx.effects.effects_vertex_count() as u32
    }

    pub fn scene_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn scene_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by the page via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_effects_vertices(&self) -> u32 {
        self.layout.max_effects_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
