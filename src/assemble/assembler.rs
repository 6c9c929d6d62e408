use rand::Rng;
use uuid::Uuid;

use crate::{
    assemble::{
        record::{
            Adjustments, AssetImportData, Channel, ChannelCurves, ColorCurveRecord, MetaCurves,
            RecordOrigin,
        },
        spec::{CurveRequest, CurveSpec, OffsetAxis},
    },
    config::KeyBounds,
    foundation::{error::CurveResult, time::utc_now_iso8601},
    synth::{
        keyframe::FloatCurve,
        synthesizer::{synthesize_random, synthesize_scaled},
    },
    waveform::family::ShapeFamily,
};

/// Upper bound of adjustment draws in random assembly.
pub const RANDOM_ADJUSTMENT_RANGE: f64 = 0.1;

/// Receives `(id, name)` after every request-driven assembly.
pub trait MetadataSink {
    fn append_metadata(&mut self, id: Uuid, name: &str) -> CurveResult<()>;
}

/// A [`MetadataSink`] that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMetadata;

impl MetadataSink for NoMetadata {
    fn append_metadata(&mut self, _id: Uuid, _name: &str) -> CurveResult<()> {
        Ok(())
    }
}

/// Collects appended metadata in memory.
impl MetadataSink for Vec<(Uuid, String)> {
    fn append_metadata(&mut self, id: Uuid, name: &str) -> CurveResult<()> {
        self.push((id, name.to_string()));
        Ok(())
    }
}

/// A random record together with a request that describes it.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    /// Request-shaped descriptor; itself a valid input to [`assemble_from_spec`].
    pub spec: CurveSpec,
    pub record: ColorCurveRecord,
}

/// Random assembly with an independent family per channel.
pub fn assemble_random<R: Rng + ?Sized>(rng: &mut R) -> CurveResult<ColorCurveRecord> {
    assemble_random_with(None, rng)
}

/// Random assembly, optionally forcing one family onto all four channels.
///
/// Families are chosen first (R, G, B, A), then the curves are synthesized in
/// the same order, then the adjustments are drawn.
#[tracing::instrument(skip(rng))]
pub fn assemble_random_with<R: Rng + ?Sized>(
    family: Option<ShapeFamily>,
    rng: &mut R,
) -> CurveResult<ColorCurveRecord> {
    let families = Channel::ALL.map(|_| family.unwrap_or_else(|| ShapeFamily::choose(rng)));
    let float_curves = random_curves(families, rng)?;
    let adjustments = Adjustments::draw(RANDOM_ADJUSTMENT_RANGE, rng)?;

    Ok(new_record(
        family_signature(families),
        float_curves,
        adjustments,
        RecordOrigin::Random,
    ))
}

/// Request-driven assembly through scaled synthesis.
///
/// Draw order: channels R, G, B, A, then the x and y offset curves, then the
/// adjustments. The sink is notified once the record exists.
#[tracing::instrument(skip(rng, sink))]
pub fn assemble_from_spec<R, M>(
    spec: &CurveSpec,
    rng: &mut R,
    sink: &mut M,
) -> CurveResult<ColorCurveRecord>
where
    R: Rng + ?Sized,
    M: MetadataSink + ?Sized,
{
    let bounds = KeyBounds::default();
    let [r, g, b, a] = Channel::ALL.map(|c| spec.channel(c));
    let float_curves = ChannelCurves {
        r: scaled(r, bounds, rng)?,
        g: scaled(g, bounds, rng)?,
        b: scaled(b, bounds, rng)?,
        a: scaled(a, bounds, rng)?,
    };

    let meta_curves = MetaCurves {
        x_offset_curve: scaled(spec.offset(OffsetAxis::X), bounds, rng)?,
        y_offset_curve: scaled(spec.offset(OffsetAxis::Y), bounds, rng)?,
        x_offset_scale: spec.offset_scale(OffsetAxis::X),
        y_offset_scale: spec.offset_scale(OffsetAxis::Y),
    };

    let adjustments = Adjustments::draw(spec.randomize_adjustments.unwrap_or(0.0), rng)?;

    let record = new_record(
        spec.type_signature(),
        float_curves,
        adjustments,
        RecordOrigin::Specified {
            name: spec.resolved_name().to_string(),
            description: spec.resolved_description().to_string(),
            meta_curves,
        },
    );
    sink.append_metadata(record.id, spec.resolved_name())?;
    Ok(record)
}

/// A random record with zero adjustments plus a descriptor of how to regenerate
/// something like it through [`assemble_from_spec`].
#[tracing::instrument(skip(rng))]
pub fn assemble_catalog_entry<R: Rng + ?Sized>(rng: &mut R) -> CurveResult<CatalogEntry> {
    let families = Channel::ALL.map(|_| ShapeFamily::choose(rng));
    let float_curves = random_curves(families, rng)?;
    let meta_x = ShapeFamily::choose(rng);
    let meta_y = ShapeFamily::choose(rng);

    let record = new_record(
        family_signature(families),
        float_curves,
        Adjustments::default(),
        RecordOrigin::Random,
    );

    let name = format!("Random Curve {}", &record.id.simple().to_string()[..8]);
    let description = "Randomly generated color curve".to_string();
    let [fr, fg, fb, fa] = families.map(|f| Some(f.name().to_string()));
    let spec = CurveSpec {
        name: Some(name.clone()),
        description: Some(description.clone()),
        r_float_curve_type: fr,
        g_float_curve_type: fg,
        b_float_curve_type: fb,
        a_float_curve_type: fa,
        r_resolution_scale: Some(1.0),
        g_resolution_scale: Some(1.0),
        b_resolution_scale: Some(1.0),
        a_resolution_scale: Some(1.0),
        r_noise_scale: Some(0.1),
        g_noise_scale: Some(0.1),
        b_noise_scale: Some(0.1),
        a_noise_scale: Some(0.1),
        meta_x_offset_curve_type: Some(meta_x.name().to_string()),
        meta_y_offset_curve_type: Some(meta_y.name().to_string()),
        meta_x_resolution_scale: Some(1.0),
        meta_y_resolution_scale: Some(1.0),
        meta_x_noise_scale: Some(0.0),
        meta_y_noise_scale: Some(0.0),
        meta_x_offset_scale: Some(0.1),
        meta_y_offset_scale: Some(0.1),
        randomize_adjustments: None,
    };

    Ok(CatalogEntry {
        name,
        description,
        spec,
        record,
    })
}

fn random_curves<R: Rng + ?Sized>(
    families: [ShapeFamily; 4],
    rng: &mut R,
) -> CurveResult<ChannelCurves> {
    let bounds = KeyBounds::default();
    let [r, g, b, a] = families;
    Ok(ChannelCurves {
        r: synthesize_random(r, bounds, rng)?,
        g: synthesize_random(g, bounds, rng)?,
        b: synthesize_random(b, bounds, rng)?,
        a: synthesize_random(a, bounds, rng)?,
    })
}

fn scaled<R: Rng + ?Sized>(
    request: CurveRequest,
    bounds: KeyBounds,
    rng: &mut R,
) -> CurveResult<FloatCurve> {
    synthesize_scaled(
        request.family,
        request.resolution_scale,
        request.noise_scale,
        bounds,
        rng,
    )
}

fn family_signature(families: [ShapeFamily; 4]) -> String {
    families.map(ShapeFamily::name).join("-")
}

fn new_record(
    type_signature: String,
    float_curves: ChannelCurves,
    adjustments: Adjustments,
    origin: RecordOrigin,
) -> ColorCurveRecord {
    let record = ColorCurveRecord {
        id: Uuid::new_v4(),
        type_signature,
        float_curves,
        adjustments,
        asset_import_data: AssetImportData::default(),
        created_at: utc_now_iso8601(),
        origin,
    };
    tracing::debug!(id = %record.id, signature = %record.type_signature, "assembled record");
    record
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/assembler.rs"]
mod tests;
