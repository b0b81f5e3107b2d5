use crate::domains::render::RenderSink;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Frame sink that retains the most recent frames in memory, oldest
/// dropped first once `capacity` is reached. Lets the simulation run
/// headless while the frames stay inspectable.
pub struct BufferedRenderer {
    capacity: usize,
    frames: Mutex<VecDeque<String>>,
}

impl BufferedRenderer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            capacity,
            frames: Mutex::new(VecDeque::new()),
        })
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> Vec<String> {
        self.frames
            .lock()
            .expect("frame buffer lock")
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().expect("frame buffer lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RenderSink for BufferedRenderer {
    fn draw_frame(&self, frame: &str) {
        let mut frames = self.frames.lock().expect("frame buffer lock");
        if frames.len() >= self.capacity {
            frames.pop_front();
        }
        frames.push_back(frame.to_string());
    }
}
