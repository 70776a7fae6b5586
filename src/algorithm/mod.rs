/// Two-phase knot rendering: tile stamping then connector stitching
pub mod compositor;
/// Hilbert curve path generation by turtle traversal
pub mod hilbert;
/// Connector patches joining neighbouring tiles along the path
pub mod stitching;
/// Motif tiling with parity-alternating orientation
pub mod tiling;

pub use compositor::{KnotCompositor, RenderParams, RenderSession, Rendering};
pub use hilbert::{Depth, HilbertPath};
