use formdom::HandlerRegistry;

use crate::config::FormConfig;
use crate::visual_mode::VisualModeSignal;

/// Everything a component needs while rendering one frame.
///
/// Handlers registered during the frame go into a fresh registry that the
/// host hands to [`formdom::Document::commit`] together with the tree.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    registry: HandlerRegistry,
    visual_mode: VisualModeSignal,
    config: FormConfig,
}

impl RenderContext {
    pub fn new(visual_mode: VisualModeSignal, config: FormConfig) -> Self {
        Self {
            registry: HandlerRegistry::new(),
            visual_mode,
            config,
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn visual_mode(&self) -> &VisualModeSignal {
        &self.visual_mode
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Give up the frame's handlers for commit.
    pub fn finish(self) -> HandlerRegistry {
        self.registry
    }
}
