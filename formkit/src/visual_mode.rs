use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::context::RenderContext;

/// Which generation of the visual language components draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualMode {
    #[default]
    Classic,
    /// The refreshed look: heavier control borders.
    Refresh,
}

/// Shared, host-owned visual mode flag.
///
/// Cloning shares the flag, so a host can flip the mode while components
/// read it on their next render.
#[derive(Debug, Clone, Default)]
pub struct VisualModeSignal {
    refresh: Arc<AtomicBool>,
}

impl VisualModeSignal {
    pub fn new(mode: VisualMode) -> Self {
        let signal = Self::default();
        signal.set(mode);
        signal
    }

    pub fn get(&self) -> VisualMode {
        if self.is_refresh() {
            VisualMode::Refresh
        } else {
            VisualMode::Classic
        }
    }

    pub fn set(&self, mode: VisualMode) {
        self.refresh
            .store(mode == VisualMode::Refresh, Ordering::SeqCst);
    }

    /// Switch to the other mode and return the new one.
    pub fn toggle(&self) -> VisualMode {
        let was_refresh = self.refresh.fetch_xor(true, Ordering::SeqCst);
        let mode = if was_refresh {
            VisualMode::Classic
        } else {
            VisualMode::Refresh
        };
        log::debug!("visual mode switched to {mode:?}");
        mode
    }

    pub fn is_refresh(&self) -> bool {
        self.refresh.load(Ordering::SeqCst)
    }
}

/// Whether the component rendering in `cx` should use the refreshed visuals.
pub fn use_visual_refresh(cx: &RenderContext) -> bool {
    cx.visual_mode().is_refresh()
}
