//! One play session: entities, background, score and the per-tick order
//! they are updated in.

use glam::Vec2;
use titan_engine::{FrameRef, ParallaxBackground, RenderBuffer, RenderInstance, RenderLayer, Rng};

use crate::assets::GameAssets;
use crate::combat::{resolve_player_attack, Damageable};
use crate::enemy::{Bird, Hostile, Lifecycle, PlayerView, Skeleton};
use crate::player::{Controls, Player};
use crate::settings::WINDOW_WIDTH;
use crate::sounds::Cue;
use crate::spawn::SpawnController;
use crate::state::Tool;

/// Everything one tick produced for the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub cues: Vec<Cue>,
    /// Points of every despawn this tick, already added to the score.
    pub score_events: Vec<u32>,
}

/// HUD snapshot for the host to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub tool: Tool,
    pub health: i32,
    pub score: u32,
    pub high_score: u32,
    /// A tool or weapon was just switched.
    pub switching: bool,
}

pub struct Scene {
    player: Player,
    skeletons: Vec<Skeleton>,
    birds: Vec<Bird>,
    spawner: SpawnController,
    background: ParallaxBackground,
    score: u32,
    high_score: u32,
}

impl Scene {
    pub fn new(assets: &GameAssets, high_score: u32) -> Self {
        Self {
            player: Player::new(),
            skeletons: Vec::new(),
            birds: Vec::new(),
            spawner: SpawnController::new(WINDOW_WIDTH),
            background: assets.background(),
            score: 0,
            high_score,
        }
    }

    /// Advance the whole scene by one step.
    ///
    /// Order: background, skeletons (move, contact), birds (move, contact),
    /// spawning, player, the player's swing, score, high score.
    pub fn tick(
        &mut self,
        controls: &Controls,
        dt: f32,
        now_ms: f64,
        rng: &mut Rng,
        assets: &GameAssets,
    ) -> TickReport {
        let mut report = TickReport::default();

        self.background.scroll(self.player.scroll_delta(dt));

        let view = PlayerView::of(&self.player);
        update_enemies(&mut self.skeletons, &mut self.player, &view, dt, now_ms, assets, &mut report);
        update_enemies(&mut self.birds, &mut self.player, &view, dt, now_ms, assets, &mut report);

        self.spawner
            .update(now_ms, rng, &mut self.skeletons, &mut self.birds, assets);

        self.player
            .update(controls, dt, now_ms, rng, assets, &mut report.cues);

        let struck = resolve_player_attack(&self.player, self.skeletons.iter_mut(), now_ms)
            + resolve_player_attack(&self.player, self.birds.iter_mut(), now_ms);
        report.cues.extend(std::iter::repeat(Cue::Hit).take(struck));

        for points in &report.score_events {
            self.score += points;
        }
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        report
    }

    /// Background tiles, then enemies, then the player.
    pub fn render(&self, assets: &GameAssets, buffer: &mut RenderBuffer) {
        for (layer, &sheet) in self.background.layers().iter().zip(&assets.background_sheets) {
            let (w, h) = assets.frame_size(sheet);
            let scale = assets.scale(sheet);
            for (tile, left) in layer.tile_positions().into_iter().enumerate() {
                let frame = FrameRef { sheet, index: 0, flip_x: layer.mirrored && tile == 1 };
                let center = Vec2::new(left + w / 2.0, layer.y + h / 2.0);
                buffer.push(RenderInstance::sprite(frame, center, scale, RenderLayer::Background));
            }
        }

        let enemies = self
            .skeletons
            .iter()
            .map(|s| (s.frame(), s.world_position()))
            .chain(self.birds.iter().map(|b| (b.frame(), b.world_position())));
        for (frame, center) in enemies {
            if let Some(frame) = frame {
                buffer.push(RenderInstance::sprite(
                    frame,
                    center,
                    assets.scale(frame.sheet),
                    RenderLayer::Enemies,
                ));
            }
        }

        if let Some(frame) = self.player.frame() {
            buffer.push(RenderInstance::sprite(
                frame,
                self.player.center(),
                assets.scale(frame.sheet),
                RenderLayer::Player,
            ));
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            tool: self.player.selected_tool(),
            health: self.player.health,
            score: self.score,
            high_score: self.high_score,
            switching: self.player.switching(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn skeletons(&self) -> &[Skeleton] {
        &self.skeletons
    }

    pub fn skeletons_mut(&mut self) -> &mut Vec<Skeleton> {
        &mut self.skeletons
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn birds_mut(&mut self) -> &mut Vec<Bird> {
        &mut self.birds
    }

    pub fn background(&self) -> &ParallaxBackground {
        &self.background
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }
}

/// Update one enemy collection in order, letting each survivor touch the
/// player. Despawned enemies leave the collection and post their points.
fn update_enemies<E: Hostile>(
    enemies: &mut Vec<E>,
    player: &mut Player,
    view: &PlayerView,
    dt: f32,
    now_ms: f64,
    assets: &GameAssets,
    report: &mut TickReport,
) {
    enemies.retain_mut(|enemy| match enemy.update(view, dt, now_ms, assets) {
        Lifecycle::Alive => {
            if enemy.damage_if_close(&mut *player, now_ms) {
                report.cues.push(Cue::Hurt);
            }
            true
        }
        Lifecycle::Despawn => {
            log::debug!("despawn at x {:.0}, +{}", enemy.world_position().x, E::POINTS);
            report.score_events.push(E::POINTS);
            false
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_assets;
    use crate::state::Facing;

    const DT: f32 = 1.0 / 60.0;

    struct Rig {
        scene: Scene,
        assets: GameAssets,
        rng: Rng,
        now: f64,
    }

    impl Rig {
        fn new(high_score: u32) -> Self {
            let assets = test_assets();
            Self {
                scene: Scene::new(&assets, high_score),
                assets,
                rng: Rng::new(21),
                now: 0.0,
            }
        }

        fn tick(&mut self, controls: Controls) -> TickReport {
            self.now += DT as f64 * 1000.0;
            self.scene
                .tick(&controls, DT, self.now, &mut self.rng, &self.assets)
        }
    }

    #[test]
    fn first_tick_spawns_one_of_each() {
        let mut rig = Rig::new(0);
        rig.tick(Controls::default());
        assert_eq!(rig.scene.skeletons().len(), 1);
        assert_eq!(rig.scene.birds().len(), 1);
    }

    #[test]
    fn killing_a_skeleton_scores_once() {
        let mut rig = Rig::new(0);
        rig.tick(Controls::default());
        rig.scene.birds_mut().clear();

        let at = rig.scene.player().center();
        let skeleton = Skeleton::new(at + Vec2::new(40.0, 0.0), 50.0, &rig.assets);
        *rig.scene.skeletons_mut() = vec![skeleton];

        let report = rig.tick(Controls { use_weapon: true, ..Controls::default() });
        assert!(report.cues.contains(&Cue::Sword));
        assert!(report.cues.contains(&Cue::Hit));
        assert_eq!(rig.scene.skeletons()[0].health(), 40);

        let mut total = 0;
        let mut events = Vec::new();
        for _ in 0..240 {
            let report = rig.tick(Controls { use_weapon: true, ..Controls::default() });
            events.extend(report.score_events);
            total = rig.scene.score();
            if rig.scene.skeletons().is_empty() {
                break;
            }
        }
        assert!(rig.scene.skeletons().is_empty());
        assert_eq!(events, vec![10]);
        assert_eq!(total, 10);
        assert_eq!(rig.scene.high_score(), 10);
    }

    #[test]
    fn high_score_is_running_max() {
        let mut rig = Rig::new(25);
        rig.tick(Controls::default());
        assert_eq!(rig.scene.hud().high_score, 25);
        assert_eq!(rig.scene.hud().score, 0);
    }

    #[test]
    fn contact_hurts_player() {
        let mut rig = Rig::new(0);
        rig.tick(Controls::default());
        rig.scene.skeletons_mut().clear();
        let at = rig.scene.player().center();
        let bird = Bird::new(at + Vec2::new(20.0, 0.0), 90.0, &rig.assets);
        *rig.scene.birds_mut() = vec![bird];

        let report = rig.tick(Controls::default());
        assert_eq!(report.cues, vec![Cue::Hurt]);
        assert_eq!(rig.scene.hud().health, 95);
        assert!(rig.scene.player().is_shaking());
    }

    #[test]
    fn background_scrolls_against_movement() {
        let mut rig = Rig::new(0);
        rig.tick(Controls { right: true, ..Controls::default() });
        // Scroll uses the direction from the previous tick.
        assert!(rig.scene.background().offsets().iter().all(|&o| o == 0.0));
        rig.tick(Controls { right: true, ..Controls::default() });
        let offsets = rig.scene.background().offsets();
        assert!(offsets[0] < 0.0);
        assert!(offsets[3] < offsets[0]);
    }

    #[test]
    fn render_orders_layers() {
        let mut rig = Rig::new(0);
        rig.tick(Controls::default());
        let mut buffer = RenderBuffer::new();
        rig.scene.render(&rig.assets, &mut buffer);
        // 4 layers × 2 tiles, one skeleton, one bird, the player.
        assert_eq!(buffer.instance_count(), 11);
        let layers: Vec<f32> = buffer.instances.iter().map(|i| i.layer).collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(buffer.instances[1].flip_x, 1.0);
        assert_eq!(buffer.instances[3].flip_x, 0.0);
        let player = buffer.instances.last().unwrap();
        assert_eq!((player.x, player.y), (300.0, 500.0));
    }

    #[test]
    fn hud_tracks_player() {
        let mut rig = Rig::new(0);
        rig.tick(Controls { tool_slot: Some(2), ..Controls::default() });
        let hud = rig.scene.hud();
        assert_eq!(hud.tool, Tool::Shovel);
        assert!(hud.switching);
        assert_eq!(hud.health, 100);
        assert_eq!(rig.scene.player().facing(), Facing::Right);
    }
}
