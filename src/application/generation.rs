use std::mem;

use crate::domain::GridField;

/// Generation orchestrates the transition from one field to the next.
/// It owns two buffers: the published `current` field and the `next`
/// field being written during a sweep.
pub struct Generation {
    current: GridField,
    next: GridField,
    generation: u64,
}

impl Generation {
    /// Start from a seeded field as generation 0
    pub fn new(seed: GridField) -> Self {
        let next = seed.blank_copy();
        Self {
            current: seed,
            next,
            generation: 0,
        }
    }

    /// The last fully computed generation
    pub fn current(&self) -> &GridField {
        &self.current
    }

    /// Number of completed advances
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute every cell of the next generation against the current one,
    /// then publish it.
    pub fn advance(&mut self) {
        self.current.evolve_into(&mut self.next);
        self.publish();
    }

    /// Same as [`Generation::advance`] with the sweep spread over rayon's pool
    pub fn advance_parallel(&mut self) {
        self.current.evolve_into_parallel(&mut self.next);
        self.publish();
    }

    /// Swap buffers after a full sweep; the retired field becomes the next
    /// write target and starts all-dead.
    fn publish(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
        self.next.clear();
        self.generation += 1;
    }

    /// Consume the controller, returning the current field
    pub fn into_current(self) -> GridField {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldConfig, presets};
    use rand::{SeedableRng, rngs::StdRng};

    fn field(width: usize, height: usize) -> GridField {
        GridField::new(FieldConfig::new(width, height).unwrap()).unwrap()
    }

    #[test]
    fn test_block_is_still_life() {
        let mut seed = field(8, 8);
        presets::block().place_on(&mut seed, 3, 3);
        let expected = seed.clone();

        let mut generation = Generation::new(seed);
        for _ in 0..10 {
            generation.advance();
            assert_eq!(generation.current(), &expected);
        }
        assert_eq!(generation.generation(), 10);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut seed = field(10, 10);
        presets::glider().place_on(&mut seed, 2, 2);

        let mut expected = field(10, 10);
        presets::glider().place_on(&mut expected, 3, 3);

        let mut generation = Generation::new(seed);
        for _ in 0..4 {
            generation.advance();
        }
        assert_eq!(generation.current(), &expected);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        let mut seed = field(6, 6);
        presets::glider().place_on(&mut seed, 4, 4);

        let mut expected = field(6, 6);
        presets::glider().place_on(&mut expected, 5, 5);

        let mut generation = Generation::new(seed);
        for _ in 0..4 {
            generation.advance();
        }
        assert_eq!(generation.current(), &expected);
        assert_eq!(generation.current().population(), 5);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut seed = field(5, 5);
        presets::blinker().place_on(&mut seed, 1, 1);
        let original = seed.clone();

        let mut generation = Generation::new(seed);
        generation.advance();
        assert_ne!(generation.current(), &original);
        assert!(generation.current().is_alive(2, 1));
        assert!(generation.current().is_alive(2, 3));

        generation.advance();
        assert_eq!(generation.current(), &original);
    }

    #[test]
    fn test_empty_field_stays_empty() {
        let mut generation = Generation::new(field(4, 4));
        generation.advance();
        assert_eq!(generation.current().population(), 0);
        assert_eq!(generation.generation(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut seed = field(20, 15);
        seed.randomize_with(&mut StdRng::seed_from_u64(2024), 0.35);

        let mut sequential = Generation::new(seed.clone());
        let mut parallel = Generation::new(seed);
        for _ in 0..12 {
            sequential.advance();
            parallel.advance_parallel();
            assert_eq!(sequential.current(), parallel.current());
        }
        assert_eq!(sequential.generation(), parallel.generation());
    }

    #[test]
    fn test_next_buffer_is_dead_after_publish() {
        let mut seed = field(6, 6);
        presets::block().place_on(&mut seed, 1, 1);

        let mut generation = Generation::new(seed);
        generation.advance();
        assert_eq!(generation.next.population(), 0);
        assert_eq!(generation.into_current().population(), 4);
    }
}
