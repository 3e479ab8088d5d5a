//! Frame composition, rasterization, and sharing for the poetry editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! export path end to end: snapshotting the poem into a detached frame,
//! painting that frame into a display list, replaying it onto an offscreen
//! canvas, encoding the result, and handing it to a share destination. The
//! Leptos client only wires buttons to the [`share::Dispatcher`] and renders
//! its [`share::ShareSession`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Poem, presentation settings, exported image |
//! | [`dim`] | Dim level to overlay opacity |
//! | [`frame`] | Frame compositor (background, overlay, card snapshot) |
//! | [`layout`] | Card text layout and word wrapping |
//! | [`paint`] | Frame to display list |
//! | [`render`] | Display list to Canvas2D |
//! | [`staging`] | Scoped offscreen surfaces |
//! | [`raster`] | Rasterizer seam and the Canvas2D rasterizer |
//! | [`share`] | Export/share state machine and destinations |
//! | [`config`] | Export configuration with JSON overrides |
//! | [`error`] | Capture and share errors |
//! | [`geom`] | Sizes, rectangles, cover cropping |
//! | [`consts`] | Shared constants (padding, scale, card metrics, colors) |

pub mod config;
pub mod consts;
pub mod dim;
pub mod doc;
pub mod error;
pub mod frame;
pub mod geom;
pub mod layout;
pub mod paint;
pub mod raster;
pub mod render;
pub mod share;
pub mod staging;
