// License: MIT

/// Opaque per-node identity.
///
/// Assigned by the host on first observation of a DOM node and stable for
/// the node's lifetime. Accounting identity hangs off this handle; the
/// node's text content is a display label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Viewport-relative bounding rectangle edges, in pixels.
///
/// `top` may be negative (node scrolled partially above the viewport);
/// `bottom` may exceed the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRect {
    pub top: f64,
    pub bottom: f64,
}

/// One tracked node as the host saw it when the snapshot was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct PageNode {
    pub id: NodeId,
    pub text: String,
    pub rect: NodeRect,
}

impl PageNode {
    pub fn new(id: NodeId, text: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id,
            text: text.into(),
            rect: NodeRect { top, bottom },
        }
    }
}

/// A single read of the page surface.
///
/// `nodes` holds only the nodes matching the configured selectors, in
/// document order; selector matching is the host's duty. A DOM node that
/// was detached simply stops appearing here.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
    pub nodes: Vec<PageNode>,
}

impl PageSnapshot {
    /// A page with no matching nodes; a valid steady state, not an error.
    pub fn empty(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_y: 0.0,
            document_height: viewport_height,
            nodes: Vec::new(),
        }
    }
}
