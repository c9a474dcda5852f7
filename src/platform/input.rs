//! Input delivery
//!
//! Hosts push events through an [`InputSender`] whenever they arrive; the
//! controller drains the queue once at the start of each tick, so the paddle
//! target is only ever replaced as a whole value between ticks.

use std::sync::mpsc::{self, Receiver, Sender};

/// An input event from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to an arena-space x coordinate
    PointerMoved { x: f32 },
    /// Primary button click
    Click,
}

/// Cloneable handle for pushing input from the host
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

impl InputSender {
    pub fn send(&self, event: InputEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("Input dropped, game is gone: {:?}", event);
        }
    }

    pub fn pointer_moved(&self, x: f32) {
        self.send(InputEvent::PointerMoved { x });
    }

    pub fn click(&self) {
        self.send(InputEvent::Click);
    }
}

/// Everything that arrived since the last drain
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrainedInput {
    /// Most recent pointer position
    pub pointer_x: Option<f32>,
    pub clicks: u32,
}

/// Receiving end of the input channel
#[derive(Debug)]
pub struct InputQueue {
    tx: Sender<InputEvent>,
    rx: Receiver<InputEvent>,
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl InputQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> InputSender {
        InputSender {
            tx: self.tx.clone(),
        }
    }

    /// Collapse pending events; later pointer moves replace earlier ones
    pub fn drain(&self) -> DrainedInput {
        let mut drained = DrainedInput::default();
        for event in self.rx.try_iter() {
            match event {
                InputEvent::PointerMoved { x } => drained.pointer_x = Some(x),
                InputEvent::Click => drained.clicks += 1,
            }
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_pointer_wins() {
        let queue = InputQueue::new();
        let sender = queue.sender();
        sender.pointer_moved(10.0);
        sender.pointer_moved(300.0);
        sender.click();

        let drained = queue.drain();
        assert_eq!(drained.pointer_x, Some(300.0));
        assert_eq!(drained.clicks, 1);
        assert_eq!(queue.drain(), DrainedInput::default());
    }

    #[test]
    fn test_send_from_other_thread() {
        let queue = InputQueue::new();
        let sender = queue.sender();
        std::thread::spawn(move || sender.pointer_moved(42.0))
            .join()
            .unwrap();
        assert_eq!(queue.drain().pointer_x, Some(42.0));
    }
}
