//! Frame compositor: the detached scene that gets rasterized for export.
//!
//! A [`Frame`] is built from the current poem, the current presentation
//! settings, and the rendered size of the live poem card. It owns copies of
//! everything it needs, so later edits in the editor never reach a frame that
//! was already composed.
//!
//! Layers are stored back to front:
//!
//! 1. woodland background, covering the whole frame
//! 2. black overlay at the dim opacity, covering the whole frame
//! 3. poem card snapshot, inset by the padding

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::config::ExportConfig;
use crate::doc::{PoemDocument, PresentationSettings};
use crate::geom::{Rect, Size};

/// One layer of a composed frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Background image stretched to cover `rect`.
    Background { src: String, rect: Rect },
    /// Solid black fill at `opacity`.
    Overlay { rect: Rect, opacity: f64 },
    /// Frozen copy of the poem card.
    Card(CardSnapshot),
}

/// The poem card as it looked when the frame was composed.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSnapshot {
    /// Placement inside the frame.
    pub rect: Rect,
    pub doc: PoemDocument,
    pub settings: PresentationSettings,
    /// Texture drawn over aged paper.
    pub paper_texture_src: String,
}

/// A detached composition ready for rasterization.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub size: Size,
    pub layers: Vec<Layer>,
}

impl Frame {
    /// Opacity of the overlay layer.
    #[must_use]
    pub fn overlay_opacity(&self) -> Option<f64> {
        self.layers.iter().find_map(|layer| match layer {
            Layer::Overlay { opacity, .. } => Some(*opacity),
            _ => None,
        })
    }

    /// The card snapshot layer.
    #[must_use]
    pub fn card(&self) -> Option<&CardSnapshot> {
        self.layers.iter().find_map(|layer| match layer {
            Layer::Card(card) => Some(card),
            _ => None,
        })
    }
}

/// Compose an export frame.
///
/// `live_region` is the rendered size of the on-screen poem card. When it is
/// `None` (card not mounted yet) or empty, nothing is composed.
#[must_use]
pub fn compose(
    doc: &PoemDocument,
    settings: &PresentationSettings,
    live_region: Option<Size>,
    config: &ExportConfig,
) -> Option<Frame> {
    let card_size = live_region.filter(|size| size.is_drawable())?;
    let size = card_size.padded(config.padding);
    let full = Rect::from_size(size);

    let layers = vec![
        Layer::Background { src: config.background_src.clone(), rect: full },
        Layer::Overlay { rect: full, opacity: settings.overlay_opacity() },
        Layer::Card(CardSnapshot {
            rect: Rect::new(config.padding, config.padding, card_size.width, card_size.height),
            doc: doc.clone(),
            settings: *settings,
            paper_texture_src: config.paper_texture_src.clone(),
        }),
    ];

    Some(Frame { size, layers })
}
