use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use recycler::Boundary;

/// Intersection ratio a sentinel has to exceed before its boundary fires.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// A sentinel crossed into the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryEvent {
    pub boundary: Boundary,
    /// Fraction of the sentinel inside the viewport, in `[0, 1]`.
    pub ratio: f64,
}

/// Host side of a boundary channel. Cloneable, so each sentinel observer can own one.
#[derive(Clone, Debug)]
pub struct BoundarySender {
    tx: Sender<BoundaryEvent>,
    threshold: f64,
}

impl BoundarySender {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Reports an intersection observed for `boundary`.
    ///
    /// Ratios at or below the threshold are dropped. Returns whether the event was forwarded;
    /// `false` also means the receiving side is gone.
    pub fn report(&self, boundary: Boundary, ratio: f64) -> bool {
        if !(ratio > self.threshold) {
            return false;
        }
        self.tx.send(BoundaryEvent { boundary, ratio }).is_ok()
    }
}

/// Controller side of a boundary channel.
#[derive(Debug)]
pub struct BoundaryReceiver {
    rx: Receiver<BoundaryEvent>,
}

impl BoundaryReceiver {
    /// Drains every pending event and returns the boundaries that fired, each at most once, in
    /// the order they first fired.
    ///
    /// Bursts of intersections for the same sentinel collapse into a single crossing.
    pub fn drain(&self) -> Vec<Boundary> {
        let mut fired = Vec::with_capacity(2);
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    if !fired.contains(&event.boundary) {
                        fired.push(event.boundary);
                    }
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        fired
    }
}

/// Creates a boundary channel forwarding only intersections above `threshold`.
pub fn boundary_channel(threshold: f64) -> (BoundarySender, BoundaryReceiver) {
    let (tx, rx) = mpsc::channel();
    (BoundarySender { tx, threshold }, BoundaryReceiver { rx })
}
