//! Data-generating model
//!
//! The stub draws scaled uniform noise. A real engine replaces it behind
//! `SimModel` without touching the emission loop.

use rand::Rng;

/// Produces one data value per period from the run's generator
pub trait SimModel {
    fn next_value<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64;
}

/// Uniform `[0, 1)` draw scaled by a constant factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplicativeNoise {
    pub factor: f64,
}

impl MultiplicativeNoise {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl SimModel for MultiplicativeNoise {
    fn next_value<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        rng.gen::<f64>() * self.factor
    }
}
