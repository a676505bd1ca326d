//! Decorative floating particles.
//!
//! # Design
//! - Each particle's visual parameters are sampled independently from a
//!   [`RandomSource`] so tests can script the draws.
//! - A particle is removed once its animation has run out: the removal
//!   delay is rounded up to whole milliseconds, never down.

/// Containers that receive particles.
pub const DEFAULT_CONTAINERS: [&str; 4] = [
    "particles-container",
    "particles-container-features",
    "particles-container-about",
    "particles-container-cta",
];

/// Class applied to every particle element.
pub const PARTICLE_CLASS: &str = "particle";

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Next sample.
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[min, min + span)`.
    fn next_in(&mut self, min: f64, span: f64) -> f64 {
        self.next_unit().mul_add(span, min)
    }
}

/// Visual parameters of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position, percent of container width (0 to 100).
    pub left_pct: f64,
    /// Starting vertical position, percent of container height (10 to 130).
    pub top_pct: f64,
    /// Animation length in seconds (8 to 14).
    pub duration_s: f64,
    /// Animation start delay in seconds (0 to 5).
    pub delay_s: f64,
    /// Edge length in pixels (6 to 10).
    pub size_px: f64,
}

impl ParticleSpec {
    /// Draw a particle. Samples are taken in a fixed order: left, top,
    /// duration, delay, size.
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.next_in(0.0, 100.0),
            top_pct: rng.next_in(10.0, 120.0),
            duration_s: rng.next_in(8.0, 6.0),
            delay_s: rng.next_in(0.0, 5.0),
            size_px: rng.next_in(6.0, 4.0),
        }
    }

    /// Seconds from insertion until the animation has completed.
    #[must_use]
    pub fn lifetime_s(&self) -> f64 {
        self.duration_s + self.delay_s
    }

    /// Milliseconds to wait before removing the particle.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn removal_delay_ms(&self) -> u32 {
        let ms = (self.lifetime_s() * 1000.0).ceil();
        if ms.is_finite() && ms > 0.0 {
            ms.min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    }

    /// Inline style declarations as `(property, value)` pairs.
    #[must_use]
    pub fn style_declarations(&self) -> [(&'static str, String); 6] {
        [
            ("left", css_number(self.left_pct, "%")),
            ("top", css_number(self.top_pct, "%")),
            ("animation-duration", css_number(self.duration_s, "s")),
            ("animation-delay", css_number(self.delay_s, "s")),
            ("width", css_number(self.size_px, "px")),
            ("height", css_number(self.size_px, "px")),
        ]
    }
}

fn css_number(value: f64, unit: &str) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{unit}")
}

/// Spawn cadence for one container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnPlan {
    /// Particles created right after start.
    pub initial_burst: u32,
    /// Gap between burst particles.
    pub burst_stagger_ms: u32,
    /// Period of the continuous spawner.
    pub interval_ms: u32,
}

impl Default for SpawnPlan {
    fn default() -> Self {
        Self {
            initial_burst: 15,
            burst_stagger_ms: 400,
            interval_ms: 800,
        }
    }
}

impl SpawnPlan {
    /// Start offsets of the initial burst.
    pub fn burst_offsets(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.initial_burst).map(|i| i.saturating_mul(self.burst_stagger_ms))
    }
}
