// License: MIT

use crate::core::page::NodeId;
use crate::overlay::OverlayModel;

/// DOM writes the engine requests of the host's debug sink.
///
/// Only emitted when debug mode is on; a plain session produces none.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Clear the inline highlight from every tracked node.
    ClearHighlights,

    /// Apply the debug highlight to the currently visible nodes.
    Highlight {
        ids: Vec<NodeId>,
    },

    /// Create the overlay element if missing, then update it in place.
    RenderOverlay {
        model: OverlayModel,
    },
}
