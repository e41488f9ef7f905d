use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

/// Per-frame scheduling primitive provided by the host.
///
/// `callback` runs once, on the next display refresh, with the host frame
/// timestamp in milliseconds.
pub trait FrameScheduler {
    fn request_next_frame(&self, callback: Box<dyn FnOnce(f64)>);
}

type Tick = Rc<RefCell<Box<dyn FnMut(f64) -> ControlFlow<()>>>>;

/// Run `tick` once per frame, rescheduling after every call until it
/// returns `ControlFlow::Break`.
pub fn drive<S>(scheduler: Rc<S>, tick: impl FnMut(f64) -> ControlFlow<()> + 'static)
where
    S: FrameScheduler + ?Sized + 'static,
{
    let boxed: Box<dyn FnMut(f64) -> ControlFlow<()>> = Box::new(tick);
    let tick: Tick = Rc::new(RefCell::new(boxed));
    schedule(scheduler, tick);
}

fn schedule<S>(scheduler: Rc<S>, tick: Tick)
where
    S: FrameScheduler + ?Sized + 'static,
{
    let next = scheduler.clone();
    scheduler.request_next_frame(Box::new(move |timestamp| {
        let flow = (&mut *tick.borrow_mut())(timestamp);
        if flow.is_continue() {
            schedule(next, tick);
        }
    }));
}

/// Same as `drive`, for loops that run for the lifetime of the page.
pub fn drive_forever<S>(scheduler: Rc<S>, mut tick: impl FnMut(f64) + 'static)
where
    S: FrameScheduler + ?Sized + 'static,
{
    drive(scheduler, move |ts| {
        tick(ts);
        ControlFlow::Continue(())
    });
}
