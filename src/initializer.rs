use crate::marker::{Marker, MarkerId};
use crate::store::MarkerStore;
use egui::Pos2;
use rand::Rng;

pub const DEFAULT_SEED_COUNT: usize = 23;

/// Generates `count` untagged dots scattered uniformly over [0, 100).
pub fn generate_markers<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Marker> {
    (0..count)
        .map(|index| {
            let position = Pos2::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            Marker::new(MarkerId::new(index as u64 + 1), position, None)
        })
        .collect()
}

/// One-shot seeding that runs after the first frame has been drawn.
#[derive(Debug)]
pub struct Initializer {
    count: usize,
    done: bool,
}

impl Initializer {
    pub fn new(count: usize) -> Self {
        Self { count, done: false }
    }

    pub fn has_run(&self) -> bool {
        self.done
    }

    /// Seeds the store the first time it is called. Returns whether seeding happened.
    pub fn run_once<R: Rng + ?Sized>(&mut self, store: &mut MarkerStore, rng: &mut R) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        store.seed(generate_markers(self.count, rng));
        true
    }
}
