//! Cue channel between the audio trigger and the beak engine
//!
//! The audio side usually runs in its own task or interrupt handler. It
//! posts a [`Cue`] here when a track starts; the controller takes the newest
//! cue at the beginning of every tick. Synchronized with `critical-section`,
//! backed by a fixed-size `heapless::Deque`. When the queue is full the
//! oldest cue is displaced, since only the newest one is ever played.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

use crate::clock::Timestamp;

/// Request to animate a track, starting at a given time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    /// Animation id (audio track number)
    pub track: u8,
    /// When the motion should start
    pub start: Timestamp,
}

impl Cue {
    pub const fn new(track: u8, start: Timestamp) -> Self {
        Self { track, start }
    }

    /// Cue starting `sync_delay` after `now`
    pub const fn after_sync(track: u8, now: Timestamp, sync_delay: Duration) -> Self {
        Self::new(track, now.wrapping_add(sync_delay))
    }
}

/// Bounded cue queue, safe to share between tasks and interrupt handlers
pub struct CueChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Cue, SIZE>>>,
}

impl<const SIZE: usize> CueChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the audio side
    pub const fn sender(&self) -> CueSender<'_, SIZE> {
        CueSender { channel: self }
    }

    /// Handle for the controller
    pub const fn receiver(&self) -> CueReceiver<'_, SIZE> {
        CueReceiver { channel: self }
    }

    /// Post a cue
    ///
    /// Returns the oldest cue if it had to be displaced to make room.
    pub fn post(&self, cue: Cue) -> Option<Cue> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let displaced = if queue.is_full() { queue.pop_front() } else { None };
            // Cannot fail: a slot was freed above if the queue was full
            let _ = queue.push_back(cue);
            displaced
        })
    }

    /// Remove every queued cue and return the newest one
    pub fn take_latest(&self) -> Option<Cue> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let latest = queue.pop_back();
            queue.clear();
            latest
        })
    }

    /// Number of cues waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CueChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting half of a [`CueChannel`]
#[derive(Clone, Copy)]
pub struct CueSender<'a, const SIZE: usize> {
    channel: &'a CueChannel<SIZE>,
}

impl<const SIZE: usize> CueSender<'_, SIZE> {
    pub fn post(&self, cue: Cue) -> Option<Cue> {
        self.channel.post(cue)
    }
}

/// Consuming half of a [`CueChannel`]
#[derive(Clone, Copy)]
pub struct CueReceiver<'a, const SIZE: usize> {
    channel: &'a CueChannel<SIZE>,
}

impl<const SIZE: usize> CueReceiver<'_, SIZE> {
    pub fn take_latest(&self) -> Option<Cue> {
        self.channel.take_latest()
    }
}
