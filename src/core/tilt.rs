use super::animator::Animator;
use super::axis::AxisId;
use super::host::{PointerSample, PointerSource};
use super::schedule::{drive_forever, FrameScheduler};
use crate::constants::{GLOW_CENTER_PERCENT, GLOW_SPAN_PERCENT};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Rendered 3D pose of the product container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate: Vec2,
}

impl TiltPose {
    pub fn css(&self) -> String {
        format!(
            "rotateX({:.3}deg) rotateY({:.3}deg) translateX({:.3}px) translateY({:.3}px)",
            self.rotate_x_deg, self.rotate_y_deg, self.translate.x, self.translate.y
        )
    }
}

/// Pointer offset from the viewport centre, each axis clamped to [-1, 1].
///
/// Normalised against the whole viewport rather than the scene element, so
/// the entire page acts as the control surface.
#[inline]
pub fn normalized_offset(sample: &PointerSample) -> Vec2 {
    let half = sample.viewport.center();
    let d = sample.client - half;
    let nx = if half.x > 0.0 { (d.x / half.x).clamp(-1.0, 1.0) } else { 0.0 };
    let ny = if half.y > 0.0 { (d.y / half.y).clamp(-1.0, 1.0) } else { 0.0 };
    Vec2::new(nx, ny)
}

/// Hero glow position as (left %, top %).
#[inline]
pub fn glow_position(offset: Vec2) -> Vec2 {
    Vec2::splat(GLOW_CENTER_PERCENT) + offset * GLOW_SPAN_PERCENT
}

/// Pointer right turns the container right (rotateY); pointer down tips it
/// back (negative rotateX).
pub fn aim(animator: &mut Animator, sample: &PointerSample) {
    let n = normalized_offset(sample);
    let ry = n.x * animator.max_rotate_y_deg;
    let rx = -n.y * animator.max_rotate_x_deg;
    animator.set_target(AxisId::TiltY, ry);
    animator.set_target(AxisId::TiltX, rx);
}

pub fn release(animator: &mut Animator) {
    animator.reset(AxisId::TiltX);
    animator.reset(AxisId::TiltY);
}

/// Step both rotations; parallax follows the smoothed rotation, not the target.
pub fn advance(animator: &mut Animator) -> TiltPose {
    let rx = animator.step(AxisId::TiltX);
    let ry = animator.step(AxisId::TiltY);
    let k = animator.parallax_scale;
    TiltPose {
        rotate_x_deg: rx,
        rotate_y_deg: ry,
        translate: Vec2::new(ry * k, -rx * k),
    }
}

pub fn wire<P, S>(
    animator: Rc<RefCell<Animator>>,
    pointer: &P,
    scheduler: Rc<S>,
    mut present: impl FnMut(TiltPose) + 'static,
) where
    P: PointerSource + ?Sized,
    S: FrameScheduler + ?Sized + 'static,
{
    let anim_move = animator.clone();
    pointer.on_pointer_move(Box::new(move |sample| {
        aim(&mut anim_move.borrow_mut(), &sample);
    }));
    let anim_leave = animator.clone();
    pointer.on_pointer_leave(Box::new(move || {
        release(&mut anim_leave.borrow_mut());
    }));

    drive_forever(scheduler, move |_ts| {
        let pose = advance(&mut animator.borrow_mut());
        present(pose);
    });
}
