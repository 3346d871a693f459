//! Fakes for the controller ports, shared by the controller tests.

use std::path::{Path, PathBuf};
use std::sync::{Condvar, Mutex};

use crate::controllers::interactive::data::frame_params::FrameParams;
use crate::controllers::interactive::errors::graphics::GraphicsError;
use crate::controllers::interactive::errors::snapshot::SnapshotError;
use crate::controllers::interactive::ports::{GraphicsPort, SnapshotReport, SnapshotSinkPort};
use crate::core::data::extent::Extent;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum GraphicsCall {
    Capture(FrameParams),
    Present(FrameParams),
}

/// Records every call; each capture is filled with its own sequence number.
pub(crate) struct FakeGraphics {
    extent: Extent,
    pub calls: Vec<GraphicsCall>,
    pub fail_captures: bool,
    pub fail_presents: bool,
    captures: u8,
}

impl FakeGraphics {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            extent: Extent::new(width, height).unwrap(),
            calls: Vec::new(),
            fail_captures: false,
            fail_presents: false,
            captures: 0,
        }
    }

    pub fn captured_frames(&self) -> Vec<FrameParams> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                GraphicsCall::Capture(frame) => Some(*frame),
                GraphicsCall::Present(_) => None,
            })
            .collect()
    }

    pub fn presented_frames(&self) -> Vec<FrameParams> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                GraphicsCall::Present(frame) => Some(*frame),
                GraphicsCall::Capture(_) => None,
            })
            .collect()
    }
}

impl GraphicsPort for FakeGraphics {
    fn capture_extent(&self) -> Extent {
        self.extent
    }

    fn capture(&mut self, frame: &FrameParams) -> Result<PixelBuffer, GraphicsError> {
        self.calls.push(GraphicsCall::Capture(*frame));

        if self.fail_captures {
            return Err(GraphicsError::Readback("device lost".to_string()));
        }

        self.captures = self.captures.wrapping_add(1);
        let mut buffer = PixelBuffer::new(self.extent);
        buffer.buffer_mut().fill(self.captures);

        Ok(buffer)
    }

    fn present(&mut self, frame: &FrameParams) -> Result<(), GraphicsError> {
        self.calls.push(GraphicsCall::Present(*frame));

        if self.fail_presents {
            return Err(GraphicsError::Present("surface lost".to_string()));
        }

        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    written: Mutex<Vec<(PathBuf, PixelBuffer)>>,
}

impl RecordingSink {
    pub fn written(&self) -> Vec<(PathBuf, PixelBuffer)> {
        self.written.lock().unwrap().clone()
    }
}

impl SnapshotSinkPort for RecordingSink {
    fn write(&self, path: &Path, frame: PixelBuffer) -> Result<SnapshotReport, SnapshotError> {
        let report = SnapshotReport {
            path: path.to_path_buf(),
            extent: frame.extent(),
        };
        self.written.lock().unwrap().push((path.to_path_buf(), frame));

        Ok(report)
    }
}

/// Holds every write until [`GatedSink::open`] is called.
#[derive(Default)]
pub(crate) struct GatedSink {
    open: Mutex<bool>,
    opened: Condvar,
    pub inner: RecordingSink,
}

impl GatedSink {
    pub fn open(&self) {
        *self.open.lock().unwrap() = true;
        self.opened.notify_all();
    }
}

impl SnapshotSinkPort for GatedSink {
    fn write(&self, path: &Path, frame: PixelBuffer) -> Result<SnapshotReport, SnapshotError> {
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.opened.wait(open).unwrap();
        }
        drop(open);

        self.inner.write(path, frame)
    }
}

pub(crate) struct FailingSink;

impl SnapshotSinkPort for FailingSink {
    fn write(&self, _path: &Path, frame: PixelBuffer) -> Result<SnapshotReport, SnapshotError> {
        Err(SnapshotError::Buffer(PixelBufferError::BoundsMismatch {
            width: frame.extent().width(),
            height: frame.extent().height(),
            expected_size: 0,
            buffer_size: frame.buffer_size(),
        }))
    }
}
