//! # gradient-fill
//!
//! Color-stop gradient fills in pure Rust: build a 1-D color ramp from an
//! unordered set of stops, then paint 2-D shapes through one of four
//! geometric samplers — linear (angled line), bilinear (four corners),
//! radial (center + radius), and conical (angular sweep).
//!
//! ## Pipeline
//!
//! 1. **Color stops** — `(position, color)` anchors; positions clamp into
//!    [0, 1], order does not matter
//! 2. **Ramp builder** — sorts and edge-extends the stops, then rasterizes
//!    a fixed-resolution (default 1024-sample) color lookup table
//! 3. **Sampler** — maps each normalized `(u, v)` coordinate to a ramp
//!    position (or, for bilinear, mixes the corner colors directly)
//! 4. **Raster** — optional: materialize a sampler into a W×H RGBA8 buffer,
//!    or bake a ramp into a reusable 1-D texture
//!
//! Every stage is a pure, total function: same inputs, byte-identical
//! output, no hidden state. Interpolation is a plain per-channel linear mix
//! with alpha treated as an independent channel — no premultiplication, no
//! gamma correction.
//!
//! ```
//! use gradient_fill::color::Rgba;
//! use gradient_fill::color_stop::ColorStop;
//! use gradient_fill::gradient::LinearGradient;
//! use gradient_fill::ramp::Ramp;
//! use gradient_fill::raster::render;
//!
//! let ramp = Ramp::build(&[
//!     ColorStop::new(0.0, Rgba::new_rgb(0.2, 0.0, 0.6)),
//!     ColorStop::new(1.0, Rgba::new_rgb(1.0, 0.8, 0.0)),
//! ])?;
//! let raster = render(&LinearGradient::with_angle(&ramp, 45.0), 256, 256);
//! assert_eq!(raster.as_bytes().len(), 256 * 256 * 4);
//! # Ok::<(), gradient_fill::ramp::GradientError>(())
//! ```

// Foundation types & math
pub mod color;
pub mod color_stop;
pub mod math;

// Ramp construction
pub mod ramp;
pub mod ramp_cache;

// Samplers & output
pub mod gradient;
pub mod raster;
