//! Entity types and the fixed-capacity slot pool
//!
//! An entity's identity is its pool index; liveness is the per-slot `active`
//! flag. Nothing is ever removed or compacted — a dead slot is simply reused
//! by the next acquire.

use glam::Vec2;

/// Cosmetic RGB color carried by projectiles for the renderer.
pub type Rgb = [u8; 3];

/// Player shots render yellow.
pub const PLAYER_SHOT_COLOR: Rgb = [255, 255, 0];
/// Enemy shots render red.
pub const ENEMY_SHOT_COLOR: Rgb = [255, 50, 50];

/// The player's ship. Exactly one, owned by the world.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Player {
    pub pos: Vec2,
    /// Collision radius, fixed at reset.
    pub radius: i32,
    /// Remaining lives. Hits decrement without clamping; the game-over check
    /// tests `<= 0`.
    pub lives: i32,
}

/// A projectile fired by either side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: i32,
    pub active: bool,
    /// Ownership discriminator: enemy shots hurt the player, player shots
    /// kill enemies. No friendly fire within a side.
    pub is_enemy: bool,
    pub color: Rgb,
}

/// An enemy ship chasing the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: i32,
    pub active: bool,
    /// Absolute clock deadline (ms) after which the enemy may fire.
    pub next_fire_at: u64,
    /// Absolute clock deadline (ms) after which the enemy re-aims at the
    /// player.
    pub next_retarget_at: u64,
}

/// Liveness hook for pool slots.
pub trait Slot {
    fn is_active(&self) -> bool;
    /// Lazy free: the slot stays in place and a later acquire reuses it.
    fn deactivate(&mut self);
}

impl Slot for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Slot for Enemy {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Fixed-capacity entity pool with linear-scan allocation.
///
/// `acquire` hands out the first inactive slot, or `None` when every slot is
/// live. Exhaustion is soft degradation — callers drop the spawn on the
/// floor rather than erroring or queuing. O(capacity) scans are fine at
/// these pool sizes (50–200).
#[derive(Debug, Clone, PartialEq)]
pub struct Pool<T> {
    slots: Box<[T]>,
}

impl<T: Slot + Default + Clone> Pool<T> {
    /// Allocate the pool once, up front. The hot path never allocates.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First inactive slot, if any. The caller initializes it and flips its
    /// `active` flag; the pool never mutates liveness on acquire.
    pub fn acquire(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|slot| !slot.is_active())
    }

    /// Reset every slot to its default (inactive) state.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = T::default();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }

    /// Active slots only, in index order.
    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| slot.is_active())
    }

    pub fn active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|slot| slot.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_active()).count()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_returns_first_inactive_slot() {
        let mut pool: Pool<Projectile> = Pool::new(4);

        pool.acquire().unwrap().active = true;
        pool.acquire().unwrap().active = true;

        assert!(pool.get(0).unwrap().active);
        assert!(pool.get(1).unwrap().active);
        assert!(!pool.get(2).unwrap().active);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_deactivated_slot_is_reused() {
        let mut pool: Pool<Enemy> = Pool::new(3);
        for _ in 0..3 {
            pool.acquire().unwrap().active = true;
        }
        assert!(pool.acquire().is_none());

        pool.get_mut(1).unwrap().deactivate();

        // Index 1 is the first free slot again.
        let slot = pool.acquire().unwrap();
        assert!(!slot.is_active());
        slot.active = true;
        assert!(pool.get(1).unwrap().active);
    }

    #[test]
    fn test_exhausted_pool_yields_none() {
        let mut pool: Pool<Projectile> = Pool::new(2);
        pool.acquire().unwrap().active = true;
        pool.acquire().unwrap().active = true;
        assert!(pool.acquire().is_none());
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_clear_resets_all_slots() {
        let mut pool: Pool<Projectile> = Pool::new(8);
        for _ in 0..8 {
            let p = pool.acquire().unwrap();
            p.active = true;
            p.is_enemy = true;
        }

        pool.clear();

        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.capacity(), 8);
        assert!(pool.iter().all(|p| *p == Projectile::default()));
    }

    #[test]
    fn test_active_iteration_preserves_index_order() {
        let mut pool: Pool<Enemy> = Pool::new(5);
        for i in [0usize, 2, 4] {
            let e = pool.get_mut(i).unwrap();
            e.active = true;
            e.radius = i as i32;
        }

        let radii: Vec<i32> = pool.active().map(|e| e.radius).collect();
        assert_eq!(radii, vec![0, 2, 4]);
    }
}
