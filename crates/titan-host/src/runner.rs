use titan_engine::{
    EngineContext, FixedTimestep, Game, GameConfig, GameEvent, InputEvent, InputQueue,
    RenderBuffer, RenderInstance, SoundEvent,
};

/// Generic game runner that wires up the engine loop.
///
/// The host pushes input and calls `tick` once per displayed frame with the
/// measured frame time; the runner turns that into fixed simulation steps.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
    /// Total fixed steps run since init.
    steps: u64,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            render_buffer,
            timestep,
            config,
            initialized: false,
            steps: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fold input into the keyboard snapshot, run the fixed
    /// steps covered by `dt`, then rebuild the draw list.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.ctx.keys.apply(self.input.iter());

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            self.ctx.step(self.timestep.dt());
            self.game.update(&mut self.ctx, &self.input);
            self.steps += 1;
            // Queued events are one-shot: only the first step of a frame sees them.
            if step == 0 {
                self.input.drain();
            }
        }

        // No step ran: key state is already folded in, but custom events
        // wait for the next step that can act on them.
        if steps == 0 {
            self.input.retain(|e| matches!(e, InputEvent::Custom { .. }));
        }

        self.render_buffer.clear();
        self.game.render(&mut self.render_buffer);
        self.render_buffer.sort_by_layer();
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    /// Game events as a flat float buffer (4 floats per event).
    pub fn events_as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.ctx.events)
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.render_buffer.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}
