use crate::hands::Landmarks;

/// an opaque captured frame. the core never inspects pixels; it only
/// ferries them from the camera to the detector.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// frame source boundary. supplies one raw frame per feed tick.
pub trait Camera: Send {
    fn frame(&mut self) -> Frame;
}

/// hand-landmark model boundary. implementations may be model-backed,
/// hardware-backed, or remote, hence async. more than one detected hand
/// is allowed; the feed keeps the first and drops the rest.
#[async_trait::async_trait]
pub trait Detector: Send {
    async fn detect(&mut self, frame: &Frame) -> Vec<Landmarks>;
}

/// visualization boundary. the feed draws every detected hand and never
/// depends on drawing having any effect.
pub trait Sink: Send {
    fn draw(&mut self, hand: &Landmarks);
}
