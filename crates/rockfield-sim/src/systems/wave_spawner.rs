//! Wave spawning system: creates one escalating batch of obstacles.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rockfield_core::config::{ResolvedCatalog, SessionConfig};

use crate::world_setup;

/// Spawn `count` obstacles for a new wave.
///
/// The spawn-point set is shuffled once (uniform permutation), then
/// consumed round-robin: positions are drawn without replacement until
/// the set is exhausted, then cycle. Each obstacle picks its template
/// uniformly at random from the wave pool and gets a uniform random
/// heading. All spawns carry the wave-member marker.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &SessionConfig,
    catalog: &ResolvedCatalog,
    count: u32,
) -> Vec<hecs::Entity> {
    let mut spawn_points = session.spawn_points.clone();
    spawn_points.shuffle(rng);

    let mut spawned = Vec::with_capacity(count as usize);
    for i in 0..count as usize {
        let template_index = catalog.wave_pool[rng.gen_range(0..catalog.wave_pool.len())];
        let position = spawn_points[i % spawn_points.len()];
        spawned.push(world_setup::spawn_obstacle(
            world,
            rng,
            session,
            catalog,
            template_index,
            position,
            true,
        ));
    }

    spawned
}
