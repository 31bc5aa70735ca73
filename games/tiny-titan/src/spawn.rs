//! Enemy population control.

use glam::Vec2;
use titan_engine::{Rng, Timer};

use crate::assets::GameAssets;
use crate::enemy::bird::BIRD_SPEEDS;
use crate::enemy::skeleton::SKELETON_SPEEDS;
use crate::enemy::{Bird, Skeleton};
use crate::settings::{
    BIRD_ALTITUDE, GROUND_LEVEL, MAX_BIRDS, MAX_SKELETONS, SPAWN_INTERVAL_MS, SPAWN_MARGIN,
};

/// Spawns one skeleton and one bird per interval while under their caps.
#[derive(Debug, Clone)]
pub struct SpawnController {
    timer: Timer,
    screen_width: f32,
    max_skeletons: usize,
    max_birds: usize,
}

impl SpawnController {
    pub fn new(screen_width: f32) -> Self {
        Self {
            // Starts idle, so the first update spawns.
            timer: Timer::new(SPAWN_INTERVAL_MS),
            screen_width,
            max_skeletons: MAX_SKELETONS,
            max_birds: MAX_BIRDS,
        }
    }

    /// Poll the shared timer; on expiry re-arm it and try both spawns.
    pub fn update(
        &mut self,
        now_ms: f64,
        rng: &mut Rng,
        skeletons: &mut Vec<Skeleton>,
        birds: &mut Vec<Bird>,
        assets: &GameAssets,
    ) {
        self.timer.update(now_ms);
        if self.timer.is_active() {
            return;
        }
        self.timer.activate(now_ms);
        self.try_spawn_skeleton(rng, skeletons, None, assets);
        self.try_spawn_bird(rng, birds, None, assets);
        log::debug!("population: {} skeletons, {} birds", skeletons.len(), birds.len());
    }

    /// Add a skeleton just past the right edge unless at the cap. A
    /// `speed` of `None` draws one of the skeleton speeds.
    pub fn try_spawn_skeleton(
        &self,
        rng: &mut Rng,
        skeletons: &mut Vec<Skeleton>,
        speed: Option<f32>,
        assets: &GameAssets,
    ) -> bool {
        if skeletons.len() >= self.max_skeletons {
            return false;
        }
        let x = self.spawn_x(rng);
        let speed = speed.unwrap_or_else(|| draw_speed(rng, &SKELETON_SPEEDS));
        skeletons.push(Skeleton::new(Vec2::new(x, GROUND_LEVEL), speed, assets));
        true
    }

    /// Add a bird above the ground just past the right edge unless at the cap.
    pub fn try_spawn_bird(
        &self,
        rng: &mut Rng,
        birds: &mut Vec<Bird>,
        speed: Option<f32>,
        assets: &GameAssets,
    ) -> bool {
        if birds.len() >= self.max_birds {
            return false;
        }
        let x = self.spawn_x(rng);
        let speed = speed.unwrap_or_else(|| draw_speed(rng, &BIRD_SPEEDS));
        birds.push(Bird::new(Vec2::new(x, GROUND_LEVEL - BIRD_ALTITUDE), speed, assets));
        true
    }

    fn spawn_x(&self, rng: &mut Rng) -> f32 {
        let edge = self.screen_width as i32;
        rng.range_inclusive(edge + SPAWN_MARGIN.0, edge + SPAWN_MARGIN.1) as f32
    }
}

fn draw_speed(rng: &mut Rng, candidates: &[f32]) -> f32 {
    rng.pick(candidates).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_assets;
    use crate::enemy::Hostile;
    use crate::settings::WINDOW_WIDTH;

    #[test]
    fn skeleton_cap_holds() {
        let assets = test_assets();
        let spawner = SpawnController::new(WINDOW_WIDTH);
        let mut rng = Rng::new(3);
        let mut skeletons = Vec::new();
        let spawned: Vec<bool> = (0..5)
            .map(|_| spawner.try_spawn_skeleton(&mut rng, &mut skeletons, None, &assets))
            .collect();
        assert_eq!(spawned, vec![true, true, true, true, false]);
        assert_eq!(skeletons.len(), 4);

        skeletons.pop();
        assert!(spawner.try_spawn_skeleton(&mut rng, &mut skeletons, None, &assets));
        assert_eq!(skeletons.len(), 4);
    }

    #[test]
    fn spawn_band_and_speeds() {
        let assets = test_assets();
        let spawner = SpawnController::new(WINDOW_WIDTH);
        let mut rng = Rng::new(11);
        for _ in 0..50 {
            let mut skeletons = Vec::new();
            let mut birds = Vec::new();
            spawner.try_spawn_skeleton(&mut rng, &mut skeletons, None, &assets);
            spawner.try_spawn_bird(&mut rng, &mut birds, None, &assets);

            let s = &skeletons[0];
            assert!((1416.0..=1516.0).contains(&s.world_position().x));
            assert_eq!(s.world_position().y, GROUND_LEVEL);
            assert!(SKELETON_SPEEDS.contains(&s.core().speed));

            let b = &birds[0];
            assert!((1416.0..=1516.0).contains(&b.world_position().x));
            assert_eq!(b.world_position().y, 400.0);
            assert!(BIRD_SPEEDS.contains(&b.core().speed));
        }
    }

    #[test]
    fn explicit_speed_wins() {
        let assets = test_assets();
        let spawner = SpawnController::new(WINDOW_WIDTH);
        let mut rng = Rng::new(5);
        let mut birds = Vec::new();
        spawner.try_spawn_bird(&mut rng, &mut birds, Some(42.0), &assets);
        assert_eq!(birds[0].core().speed, 42.0);
    }

    #[test]
    fn first_update_spawns_then_waits_for_interval() {
        let assets = test_assets();
        let mut spawner = SpawnController::new(WINDOW_WIDTH);
        let mut rng = Rng::new(9);
        let mut skeletons = Vec::new();
        let mut birds = Vec::new();

        spawner.update(16.0, &mut rng, &mut skeletons, &mut birds, &assets);
        assert_eq!((skeletons.len(), birds.len()), (1, 1));

        spawner.update(3000.0, &mut rng, &mut skeletons, &mut birds, &assets);
        assert_eq!((skeletons.len(), birds.len()), (1, 1));

        spawner.update(4016.0, &mut rng, &mut skeletons, &mut birds, &assets);
        assert_eq!((skeletons.len(), birds.len()), (2, 2));

        // Birds stop at two, skeletons keep coming.
        spawner.update(8016.0, &mut rng, &mut skeletons, &mut birds, &assets);
        assert_eq!((skeletons.len(), birds.len()), (3, 2));
    }
}
