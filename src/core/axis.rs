/// Fraction of the remaining gap an axis closes per frame.
///
/// Always in (0, 1]. A factor of 1 snaps to the target in a single step;
/// smaller factors give heavier, more lagged motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingFactor(f32);

impl SmoothingFactor {
    pub const SNAP: SmoothingFactor = SmoothingFactor(1.0);

    pub fn new(value: f32) -> Option<Self> {
        (value > 0.0 && value <= 1.0).then_some(Self(value))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

/// Identifies one animated scalar quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisId {
    DotX,
    DotY,
    RingX,
    RingY,
    TiltX,
    TiltY,
}

impl AxisId {
    pub const COUNT: usize = 6;
    pub const ALL: [AxisId; AxisId::COUNT] = [
        AxisId::DotX,
        AxisId::DotY,
        AxisId::RingX,
        AxisId::RingY,
        AxisId::TiltX,
        AxisId::TiltY,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A (current, target) pair smoothed toward each other one step at a time.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedAxis {
    current: f32,
    target: f32,
    neutral: f32,
    factor: SmoothingFactor,
}

impl AnimatedAxis {
    pub fn new(factor: SmoothingFactor) -> Self {
        Self::with_neutral(factor, 0.0)
    }

    pub fn with_neutral(factor: SmoothingFactor, neutral: f32) -> Self {
        Self {
            current: neutral,
            target: neutral,
            neutral,
            factor,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn factor(&self) -> SmoothingFactor {
        self.factor
    }

    /// Non-finite values are dropped so `current` can never become NaN.
    pub fn set_target(&mut self, value: f32) {
        if value.is_finite() {
            self.target = value;
        }
    }

    /// Target goes back to neutral; `current` coasts there through `step`.
    pub fn reset(&mut self) {
        self.target = self.neutral;
    }

    /// Close `factor` of the gap to the target and return the new current.
    pub fn step(&mut self) -> f32 {
        self.current += (self.target - self.current) * self.factor.get();
        self.current
    }
}
