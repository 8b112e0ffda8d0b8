use std::collections::VecDeque;

use crate::geo::GeoCoordinate;
use crate::geolocation::GeoFix;

/// Input gathered between frames, applied at the start of the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Fly the camera over a coordinate (2D map click).
    Focus(GeoCoordinate),
    /// Select the first country whose name contains the text.
    Search(String),
    /// Select a country by catalog index.
    Select(usize),
    /// Pointer click in viewport pixels.
    Pick {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Pointer drag in pixels.
    Drag { dx: f64, dy: f64 },
    /// Multiply camera distance.
    Zoom(f64),
    /// New device position; moves the user marker.
    UserLocated(GeoFix),
}

/// FIFO of pending commands. Nothing is coalesced here; navigation commands
/// resolve last-write-wins when applied.
#[derive(Debug, Default, Clone)]
pub struct CommandQueue {
    pending: VecDeque<SceneCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: SceneCommand) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes everything queued so far, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = SceneCommand> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_is_fifo_and_empties() {
        let mut queue = CommandQueue::new();
        queue.push(SceneCommand::Select(2));
        queue.push(SceneCommand::Zoom(0.5));
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![SceneCommand::Select(2), SceneCommand::Zoom(0.5)]);
        assert!(queue.is_empty());
    }
}
