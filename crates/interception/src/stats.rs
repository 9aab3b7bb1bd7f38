use std::ffi::CStr;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::extensions::GlExtensions;
use crate::ffi::*;
use crate::session::RenderPipeline;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummary {
    pub frames: usize,
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl FrameSummary {
    pub fn fps(&self) -> f64 {
        let seconds = self.average.as_secs_f64();
        if seconds > 0.0 {
            1.0 / seconds
        } else {
            0.0
        }
    }
}

/// Longest window a summary can average over.
pub const MAX_INTERVAL: u64 = u32::MAX as u64;

/// `None` for an empty window or one longer than [`MAX_INTERVAL`] frames.
pub fn summarize(frame_times: &[Duration]) -> Option<FrameSummary> {
    let count = u32::try_from(frame_times.len()).ok()?;
    let min = *frame_times.iter().min()?;
    let max = *frame_times.iter().max()?;
    let total: Duration = frame_times.iter().sum();

    Some(FrameSummary {
        frames: frame_times.len(),
        average: total.checked_div(count)?,
        min,
        max,
    })
}

/// Built-in pipeline: logs the driver identity on start and a frame-time
/// summary every `interval` presented frames.
pub struct FrameStats {
    interval: u64,
    last_present: Option<Instant>,
    frame_times: Vec<Duration>,
}

impl FrameStats {
    pub fn new(interval: u64) -> Self {
        if interval > MAX_INTERVAL {
            warn!("Stats interval {} clamped to {}", interval, MAX_INTERVAL);
        }

        Self {
            interval: interval.min(MAX_INTERVAL),
            last_present: None,
            frame_times: Vec::new(),
        }
    }

    /// Records one present at `now` and returns a summary when the interval
    /// is complete.
    pub fn record(&mut self, now: Instant) -> Option<FrameSummary> {
        if self.interval == 0 {
            return None;
        }

        if let Some(previous) = self.last_present.replace(now) {
            self.frame_times.push(now.saturating_duration_since(previous));
        }

        if (self.frame_times.len() as u64) < self.interval {
            return None;
        }

        let summary = summarize(&self.frame_times);
        self.frame_times.clear();
        summary
    }
}

fn gl_string(gl: &GlExtensions, name: GLenum) -> String {
    let Some(get_string) = gl.glGetString else {
        return String::from("unknown");
    };

    let value = unsafe { get_string(name) };
    if value.is_null() {
        return String::from("unknown");
    }

    unsafe { CStr::from_ptr(value as *const _) }
        .to_string_lossy()
        .into_owned()
}

impl RenderPipeline for FrameStats {
    fn start(&mut self, gl: &GlExtensions) {
        info!("GL_VENDOR:   {}", gl_string(gl, gl::VENDOR));
        info!("GL_RENDERER: {}", gl_string(gl, gl::RENDERER));
        info!("GL_VERSION:  {}", gl_string(gl, gl::VERSION));

        self.last_present = None;
        self.frame_times.clear();
    }

    fn end_frame(&mut self, frame: u64) {
        if let Some(summary) = self.record(Instant::now()) {
            info!(
                "Frame {}: avg {:.2} ms ({:.1} fps), min {:.2} ms, max {:.2} ms",
                frame,
                summary.average.as_secs_f64() * 1000.0,
                summary.fps(),
                summary.min.as_secs_f64() * 1000.0,
                summary.max.as_secs_f64() * 1000.0
            );
        }
    }
}
