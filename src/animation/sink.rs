//! Frame sinks
//!
//! The sequencer pushes every captured frame into a sink. Recording sinks
//! keep the snapshots; the rendering sink turns them into bitmaps.

use std::rc::Rc;

use crate::core::Frame;
use crate::renderer::{Bitmap, FrameRenderer};

/// Receiver of captured frames
pub trait FrameSink {
    /// Take one captured frame
    fn capture(&mut self, frame: Frame);

    /// Number of frames captured so far
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FrameSink for Vec<Frame> {
    fn capture(&mut self, frame: Frame) {
        self.push(frame);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Renders every captured frame to a bitmap
///
/// Consecutive equal frames share one bitmap. Rendering is deterministic,
/// so the shared bitmap is exactly what a second render would produce.
pub struct RenderingSink {
    renderer: FrameRenderer,
    bitmaps: Vec<Rc<Bitmap>>,
    last: Option<Frame>,
    rendered: usize,
}

impl RenderingSink {
    pub fn new(renderer: FrameRenderer) -> Self {
        Self {
            renderer,
            bitmaps: Vec::new(),
            last: None,
            rendered: 0,
        }
    }

    /// Captured bitmaps in order
    pub fn bitmaps(&self) -> &[Rc<Bitmap>] {
        &self.bitmaps
    }

    /// Number of distinct renders performed
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Take ownership of the captured bitmaps
    pub fn into_bitmaps(self) -> Vec<Rc<Bitmap>> {
        self.bitmaps
    }
}

impl FrameSink for RenderingSink {
    fn capture(&mut self, frame: Frame) {
        let repeat = match (&self.last, self.bitmaps.last()) {
            (Some(last), Some(bitmap)) if *last == frame => Some(Rc::clone(bitmap)),
            _ => None,
        };
        if let Some(shared) = repeat {
            self.bitmaps.push(shared);
            return;
        }

        let bitmap = Rc::new(self.renderer.render(&frame));
        self.rendered += 1;
        self.bitmaps.push(bitmap);
        self.last = Some(frame);
    }

    fn len(&self) -> usize {
        self.bitmaps.len()
    }
}
