//! Frame scheduler
//!
//! Batches style application into display-refresh ticks. Components enqueue
//! themselves through a [`SchedulerHandle`]; the first enqueue after a flush
//! requests a frame from the host, and the host calls
//! [`FrameScheduler::flush`] from its refresh callback. Every queued
//! component is applied in that one pass, in enqueue order.
//!
//! Single-threaded: the scheduler and its handles are `!Send`.
//!
//! ```ignore
//! let scheduler = FrameScheduler::new();
//! scheduler.set_frame_callback(move || window.request_animation_frame(&tick));
//!
//! component.borrow_mut().animate(&scheduler.handle());
//!
//! // inside the tick callback
//! let report = scheduler.flush(&mut document);
//! ```

use crate::error::AnimationError;
use motif_core::Document;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Something the scheduler can apply on a tick
pub trait FrameTarget {
    /// Write this target's styles into the document
    ///
    /// Returns the number of rule blocks written.
    fn apply_frame(&mut self, document: &mut Document) -> Result<usize, AnimationError>;

    /// Tag used to identify the target in logs and reports
    fn frame_key(&self) -> String;
}

/// Weak reference to a queued target
pub type TargetRef = Weak<RefCell<dyn FrameTarget>>;

/// Callback invoked when the scheduler needs a frame
pub type FrameCallback = Rc<dyn Fn()>;

/// Outcome of one flush
#[derive(Debug, Default)]
pub struct FlushReport {
    /// Targets whose styles were applied
    pub applied: usize,
    /// Rule blocks written across all targets
    pub rule_blocks: usize,
    /// Targets dropped before the tick
    pub skipped: usize,
    /// Targets borrowed during the tick, queued again for the next one
    pub requeued: usize,
    /// Targets that failed, by frame key
    pub errors: Vec<(String, AnimationError)>,
}

impl FlushReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

struct SchedulerInner {
    queue: Vec<TargetRef>,
    frame_requested: bool,
    frame_callback: Option<FrameCallback>,
}

/// Owns the pending queue for one document
pub struct FrameScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                queue: Vec::new(),
                frame_requested: false,
                frame_callback: None,
            })),
        }
    }

    /// Set the host hook that requests the next display-refresh callback
    pub fn set_frame_callback<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.inner.borrow_mut().frame_callback = Some(Rc::new(callback));
    }

    /// Get a handle for components to enqueue themselves with
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Queue a target for the next tick
    ///
    /// Deduplication is the target's job (see `AnimatedComponent::animate`).
    pub fn enqueue(&self, target: TargetRef) {
        enqueue_inner(&self.inner, target);
    }

    /// Whether a frame has been requested and not yet flushed
    pub fn has_pending_frame(&self) -> bool {
        self.inner.borrow().frame_requested
    }

    /// Check and clear the frame request, for hosts that poll instead of
    /// installing a frame callback
    ///
    /// The queue is left alone; the next `enqueue` after this requests a
    /// new frame even if the queue was not flushed.
    pub fn take_frame_request(&self) -> bool {
        std::mem::take(&mut self.inner.borrow_mut().frame_requested)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().queue.is_empty()
    }

    /// Apply every queued target
    ///
    /// The queue is taken in one step before any target runs, so a target
    /// that re-enqueues during the flush lands in the next frame. A target
    /// that is already borrowed is queued again and applied next frame.
    pub fn flush(&self, document: &mut Document) -> FlushReport {
        let queue = {
            let mut inner = self.inner.borrow_mut();
            inner.frame_requested = false;
            std::mem::take(&mut inner.queue)
        };

        let mut report = FlushReport::default();
        let mut busy = Vec::new();
        for weak in queue {
            let Some(target) = weak.upgrade() else {
                report.skipped += 1;
                continue;
            };
            let Ok(mut target) = target.try_borrow_mut() else {
                tracing::warn!("frame target is borrowed during flush, deferring to next frame");
                busy.push(weak);
                continue;
            };

            match target.apply_frame(document) {
                Ok(blocks) => {
                    report.applied += 1;
                    report.rule_blocks += blocks;
                }
                Err(err) => {
                    let key = target.frame_key();
                    tracing::error!(target_key = %key, error = %err, "failed to apply animation frame");
                    report.errors.push((key, err));
                }
            }
        }

        report.requeued = busy.len();
        for weak in busy {
            enqueue_inner(&self.inner, weak);
        }

        tracing::debug!(
            applied = report.applied,
            rule_blocks = report.rule_blocks,
            skipped = report.skipped,
            requeued = report.requeued,
            errors = report.errors.len(),
            "flushed animation frame"
        );
        report
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to a [`FrameScheduler`]
///
/// Components hold this instead of the scheduler. Once the scheduler is
/// dropped, enqueueing is a no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Queue a target; returns false if the scheduler is gone
    pub fn enqueue(&self, target: TargetRef) -> bool {
        match self.inner.upgrade() {
            Some(inner) => {
                enqueue_inner(&inner, target);
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

fn enqueue_inner(inner: &Rc<RefCell<SchedulerInner>>, target: TargetRef) {
    let request = {
        let mut guard = inner.borrow_mut();
        guard.queue.push(target);
        if guard.frame_requested {
            None
        } else {
            guard.frame_requested = true;
            Some(guard.frame_callback.clone())
        }
    };

    // The callback runs without holding the borrow; it may call back in
    if let Some(callback) = request {
        tracing::debug!("requesting animation frame");
        if let Some(callback) = callback {
            callback();
        }
    }
}
