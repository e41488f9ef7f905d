use super::animator::Animator;
use super::axis::AxisId;
use super::host::{PointerSample, PointerSource};
use super::schedule::{drive_forever, FrameScheduler};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Smoothed positions of the two cursor layers, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub ring: Vec2,
}

/// Both layers chase the same raw pointer position; only their factors differ.
pub fn aim(animator: &mut Animator, sample: &PointerSample) {
    let p = sample.client;
    animator.set_target(AxisId::DotX, p.x);
    animator.set_target(AxisId::DotY, p.y);
    animator.set_target(AxisId::RingX, p.x);
    animator.set_target(AxisId::RingY, p.y);
}

pub fn advance(animator: &mut Animator) -> CursorFrame {
    CursorFrame {
        dot: Vec2::new(animator.step(AxisId::DotX), animator.step(AxisId::DotY)),
        ring: Vec2::new(animator.step(AxisId::RingX), animator.step(AxisId::RingY)),
    }
}

/// Feed pointer moves into the cursor targets and start the cursor loop.
pub fn wire<P, S>(
    animator: Rc<RefCell<Animator>>,
    pointer: &P,
    scheduler: Rc<S>,
    mut present: impl FnMut(CursorFrame) + 'static,
) where
    P: PointerSource + ?Sized,
    S: FrameScheduler + ?Sized + 'static,
{
    let anim_input = animator.clone();
    pointer.on_pointer_move(Box::new(move |sample| {
        aim(&mut anim_input.borrow_mut(), &sample);
    }));

    drive_forever(scheduler, move |_ts| {
        let frame = advance(&mut animator.borrow_mut());
        present(frame);
    });
}
