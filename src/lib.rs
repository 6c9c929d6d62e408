//! Procedural color-curve engine.
//!
//! Synthesizes keyframed single-channel float curves from a library of shape families,
//! assembles four of them into an RGBA [`ColorCurveRecord`], and reduces records into an
//! RGBA preview image or a grayscale prefix-sum row.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so a seeded generator
//! reproduces a record exactly.
#![forbid(unsafe_code)]

pub mod assemble;
pub mod collab;
pub mod config;
pub mod foundation;
pub mod integral;
pub mod raster;
pub mod synth;
pub mod waveform;

pub use crate::assemble::assembler::{
    CatalogEntry, MetadataSink, NoMetadata, assemble_catalog_entry, assemble_from_spec,
    assemble_random, assemble_random_with,
};
pub use crate::assemble::export::{EngineExport, convert_to_engine_json};
pub use crate::assemble::record::{
    Adjustments, AssetImportData, Channel, ChannelCurves, ColorCurveRecord, CurveJson, MetaCurves,
    RecordOrigin,
};
pub use crate::assemble::spec::CurveSpec;
pub use crate::config::{KeyBounds, RasterSettings};
pub use crate::foundation::error::{CurveError, CurveResult};
pub use crate::integral::reduce::{
    ChannelRows, IntegralImage, compute_integral_image, compute_row_integral,
    compute_row_integral_json,
};
pub use crate::raster::preview::{GradientStats, RasterPreview, rasterize, rasterize_json};
pub use crate::synth::keyframe::{FloatCurve, InterpMode, Keyframe, TangentMode, TangentWeightMode};
pub use crate::synth::synthesizer::{synthesize_random, synthesize_scaled};
pub use crate::waveform::family::ShapeFamily;
