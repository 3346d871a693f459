use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::controllers::interactive::data::frame_params::FrameParams;
use crate::controllers::interactive::errors::graphics::GraphicsError;
use crate::controllers::interactive::ports::{GraphicsPort, SnapshotSinkPort};
use crate::controllers::interactive::snapshot::pending::PendingEncode;
use crate::controllers::interactive::snapshot::worker::EncodeWorker;

/// Renders a high resolution copy of the current frame and hands it to an
/// encode worker.
///
/// Everything up to and including readback runs synchronously on the
/// calling thread; the file encode runs on the worker and never blocks the
/// caller.
pub struct SnapshotPipeline {
    sink: Arc<dyn SnapshotSinkPort>,
    worker: EncodeWorker,
    destination: PathBuf,
}

impl SnapshotPipeline {
    pub fn new(
        sink: Arc<dyn SnapshotSinkPort>,
        worker: EncodeWorker,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sink,
            worker,
            destination: destination.into(),
        }
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Captures `frame` at the capture target's resolution and aspect ratio.
    ///
    /// Encode failures are logged by the job and only surface through the
    /// returned handle; they never reach the caller as an error.
    pub fn request_snapshot<G: GraphicsPort>(
        &mut self,
        graphics: &mut G,
        frame: &FrameParams,
    ) -> Result<PendingEncode, GraphicsError> {
        info!("Rendering snapshot");

        let capture_frame = FrameParams {
            aspect_ratio: graphics.capture_extent().aspect_ratio(),
            ..*frame
        };
        let pixels = graphics.capture(&capture_frame)?;

        info!("c = {}", frame.parameter);

        let sink = Arc::clone(&self.sink);
        let path = self.destination.clone();

        Ok(self.worker.submit(move || {
            let outcome = sink.write(&path, pixels);

            match &outcome {
                Ok(report) => info!(
                    "Taken snapshot '{}' {}x{}",
                    report.path.display(),
                    report.extent.width(),
                    report.extent.height()
                ),
                Err(e) => error!("Failed to take snapshot: {e}"),
            }

            outcome
        }))
    }
}
