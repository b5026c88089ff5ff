//! Random source for monster spawns.

use bevy_ecs::prelude::Resource;

/// Seedable generator so a `--seed` run spawns the same rooms every time.
#[derive(Resource, Debug, Clone)]
pub struct SpawnRng(pub fastrand::Rng);

impl SpawnRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SpawnRng(fastrand::Rng::with_seed(seed)),
            None => SpawnRng(fastrand::Rng::new()),
        }
    }
}
