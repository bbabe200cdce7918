use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

/// Spawn and update tuning for a [`ParticleField`].
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub count: usize,
    /// Half-extent of the spawn cube per axis, world units.
    pub half_extent: f32,
    /// Position updates run once per this many ticks; the field is still
    /// read for rendering on every tick.
    pub update_stride: u32,
    /// Oscillation frequency, radians per second of elapsed time.
    pub frequency: f32,
    /// Oscillation amplitude, world units.
    pub amplitude: f32,
    pub scale_min: f32,
    pub scale_max: f32,
}

/// One floating decoration: a fixed spawn origin, the current oscillated
/// position, and a rotation/scale sampled once at spawn.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub origin: Vec3,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

/// Fixed-size field of independently drifting particles.
///
/// Displacement is always computed relative to each particle's spawn
/// origin, never accumulated, so the field stays within `amplitude` of
/// where it spawned no matter how long the page is left open.
pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    ticks: u32,
}

impl ParticleField {
    /// Spawn `params.count` particles. Spawn values are random per run;
    /// callers that need repeatability seed the generator.
    pub fn new(params: FieldParams, rng: &mut impl Rng) -> Self {
        let h = params.half_extent;
        let particles = (0..params.count)
            .map(|_| {
                let origin = Vec3::new(
                    rng.gen_range(-h..h),
                    rng.gen_range(-h..h),
                    rng.gen_range(-h..h),
                );
                Particle {
                    origin,
                    position: origin,
                    rotation: Vec3::new(
                        rng.gen_range(0.0..PI),
                        rng.gen_range(0.0..PI),
                        rng.gen_range(0.0..PI),
                    ),
                    scale: rng.gen_range(params.scale_min..params.scale_max),
                }
            })
            .collect();
        Self {
            params,
            particles,
            ticks: 0,
        }
    }

    /// Advance one frame tick at `elapsed` seconds since the field
    /// started. Positions move only on stride ticks; returns whether they
    /// did, so callers can skip redundant writes.
    pub fn tick(&mut self, elapsed: f32) -> bool {
        let stride = self.params.update_stride.max(1);
        let run = self.ticks % stride == 0;
        self.ticks = self.ticks.wrapping_add(1);
        if !run {
            return false;
        }
        let w = self.params.frequency;
        let a = self.params.amplitude;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let phase = elapsed * w + i as f32;
            p.position = p.origin + Vec3::new(phase.cos() * a, phase.sin() * a, 0.0);
        }
        true
    }

    /// Per-particle transform (translation, rotation, uniform scale) for
    /// the presentation layer, one per particle in spawn order.
    pub fn transforms(&self) -> impl Iterator<Item = Mat4> + '_ {
        self.particles.iter().map(|p| {
            let rot = Quat::from_euler(EulerRot::XYZ, p.rotation.x, p.rotation.y, p.rotation.z);
            Mat4::from_scale_rotation_translation(Vec3::splat(p.scale), rot, p.position)
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
