//! Error types for driftfield.
//!
//! One enum per concern: presenting to a window, capturing frames to disk,
//! and running the windowed demo loop. Optional capabilities degrade rather
//! than fail; a missing adapter surfaces as [`PresentError::NoAdapter`] and
//! the runner keeps the engine alive without visuals.

use std::fmt;

/// Errors that can occur while setting up the windowed presenter.
#[derive(Debug)]
pub enum PresentError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible graphics adapter found, even after retries.
    NoAdapter,
    /// Failed to create the graphics device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::SurfaceCreation(e) => write!(f, "Failed to create surface: {}", e),
            PresentError::NoAdapter => write!(
                f,
                "No compatible graphics adapter found. Ensure your system supports Vulkan/Metal/DX12/GL."
            ),
            PresentError::DeviceCreation(e) => write!(f, "Failed to create device: {}", e),
        }
    }
}

impl std::error::Error for PresentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresentError::SurfaceCreation(e) => Some(e),
            PresentError::DeviceCreation(e) => Some(e),
            PresentError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for PresentError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        PresentError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for PresentError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        PresentError::DeviceCreation(e)
    }
}

/// Errors that can occur while saving a captured frame.
#[derive(Debug)]
pub enum CaptureError {
    /// Failed to encode the image.
    Image(image::ImageError),
    /// Failed to write the file to disk.
    Io(std::io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Image(e) => write!(f, "Failed to encode frame: {}", e),
            CaptureError::Io(e) => write!(f, "Failed to write frame: {}", e),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Image(e) => Some(e),
            CaptureError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(e: image::ImageError) -> Self {
        CaptureError::Image(e)
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(e: std::io::Error) -> Self {
        CaptureError::Io(e)
    }
}

/// Errors that can occur when running the windowed demo.
#[derive(Debug)]
pub enum EngineError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Os(winit::error::OsError),
    /// Presenter setup failed.
    Present(PresentError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            EngineError::Os(e) => write!(f, "Failed to create window: {}", e),
            EngineError::Present(e) => write!(f, "Presenter error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::EventLoop(e) => Some(e),
            EngineError::Os(e) => Some(e),
            EngineError::Present(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for EngineError {
    fn from(e: winit::error::EventLoopError) -> Self {
        EngineError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for EngineError {
    fn from(e: winit::error::OsError) -> Self {
        EngineError::Os(e)
    }
}

impl From<PresentError> for EngineError {
    fn from(e: PresentError) -> Self {
        EngineError::Present(e)
    }
}
