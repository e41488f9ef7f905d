use super::axis::{AnimatedAxis, AxisId, SmoothingFactor};
use crate::constants::{
    DOT_SMOOTHING, RING_SMOOTHING, TILT_MAX_ROTATE_X_DEG, TILT_MAX_ROTATE_Y_DEG,
    TILT_PARALLAX_SCALE, TILT_SMOOTHING,
};

/// Tuning for the pointer-driven motion.
#[derive(Clone, Debug)]
pub struct AnimatorConfig {
    pub dot_smoothing: f32,
    pub ring_smoothing: f32,
    pub tilt_smoothing: f32,
    pub max_rotate_x_deg: f32,
    pub max_rotate_y_deg: f32,
    pub parallax_scale: f32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            dot_smoothing: DOT_SMOOTHING,
            ring_smoothing: RING_SMOOTHING,
            tilt_smoothing: TILT_SMOOTHING,
            max_rotate_x_deg: TILT_MAX_ROTATE_X_DEG,
            max_rotate_y_deg: TILT_MAX_ROTATE_Y_DEG,
            parallax_scale: TILT_PARALLAX_SCALE,
        }
    }
}

fn factor(name: &str, value: f32) -> anyhow::Result<SmoothingFactor> {
    match SmoothingFactor::new(value) {
        Some(f) => Ok(f),
        None => anyhow::bail!("{} must be in (0, 1], got {}", name, value),
    }
}

/// Owns every animated axis of the page.
///
/// Input handlers only call `set_target`/`reset`; the frame loops only call
/// `step`. Shared as `Rc<RefCell<Animator>>` on the single UI thread.
#[derive(Clone, Debug)]
pub struct Animator {
    axes: [AnimatedAxis; AxisId::COUNT],
    pub max_rotate_x_deg: f32,
    pub max_rotate_y_deg: f32,
    pub parallax_scale: f32,
}

impl Animator {
    pub fn new(config: AnimatorConfig) -> anyhow::Result<Self> {
        let dot = factor("dot_smoothing", config.dot_smoothing)?;
        let ring = factor("ring_smoothing", config.ring_smoothing)?;
        let tilt = factor("tilt_smoothing", config.tilt_smoothing)?;
        for (name, v) in [
            ("max_rotate_x_deg", config.max_rotate_x_deg),
            ("max_rotate_y_deg", config.max_rotate_y_deg),
            ("parallax_scale", config.parallax_scale),
        ] {
            if !v.is_finite() {
                anyhow::bail!("{} must be finite, got {}", name, v);
            }
        }

        Ok(Self::with_factors(dot, ring, tilt, &config))
    }

    fn with_factors(
        dot: SmoothingFactor,
        ring: SmoothingFactor,
        tilt: SmoothingFactor,
        config: &AnimatorConfig,
    ) -> Self {
        let axes = AxisId::ALL.map(|id| match id {
            AxisId::DotX | AxisId::DotY => AnimatedAxis::new(dot),
            AxisId::RingX | AxisId::RingY => AnimatedAxis::new(ring),
            AxisId::TiltX | AxisId::TiltY => AnimatedAxis::new(tilt),
        });
        Self {
            axes,
            max_rotate_x_deg: config.max_rotate_x_deg,
            max_rotate_y_deg: config.max_rotate_y_deg,
            parallax_scale: config.parallax_scale,
        }
    }

    #[inline]
    pub fn axis(&self, id: AxisId) -> &AnimatedAxis {
        &self.axes[id.index()]
    }

    #[inline]
    pub fn current(&self, id: AxisId) -> f32 {
        self.axis(id).current()
    }

    #[inline]
    pub fn target(&self, id: AxisId) -> f32 {
        self.axis(id).target()
    }

    pub fn set_target(&mut self, id: AxisId, value: f32) {
        self.axes[id.index()].set_target(value);
    }

    pub fn step(&mut self, id: AxisId) -> f32 {
        self.axes[id.index()].step()
    }

    pub fn reset(&mut self, id: AxisId) {
        self.axes[id.index()].reset();
    }
}

impl Default for Animator {
    fn default() -> Self {
        let c = AnimatorConfig::default();
        let f = |v| SmoothingFactor::new(v).unwrap_or(SmoothingFactor::SNAP);
        Self::with_factors(f(c.dot_smoothing), f(c.ring_smoothing), f(c.tilt_smoothing), &c)
    }
}
