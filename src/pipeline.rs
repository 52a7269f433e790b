//! Sequential batch driver with per-unit failure isolation.
//!
//! One variant at a time, one glyph file at a time within it. No failure is
//! fatal: a failed unit is logged, recorded in the summary, and the batch
//! moves on. No retries anywhere — one failed attempt is final for that
//! unit in that run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use iconhdr_emit::Emitter;
use iconhdr_ir::{FontVariantDescriptor, GlyphFile, IntermediateRepresentation, build_ir};

/// Outcome of one full batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Artifacts written, in production order.
    pub written: Vec<PathBuf>,
    /// Human-readable descriptions of units that failed, in encounter order.
    pub failures: Vec<String>,
}

impl BatchSummary {
    /// Whether every configured unit of work succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, unit: &str, err: &anyhow::Error) {
        log::error!("{unit}: {err:#}");
        self.failures.push(format!("{unit}: {err:#}"));
    }
}

/// Run the whole batch: every variant through every emitter, and — when
/// `embed_glyphs` is set — every glyph file of every variant whose emitter
/// supports embedding. Artifacts land in `out_dir` as full-file rewrites.
pub fn run_batch(
    descriptors: &[FontVariantDescriptor],
    emitters: &[Box<dyn Emitter>],
    out_dir: &Path,
    embed_glyphs: bool,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for descriptor in descriptors {
        let ir = match build_variant_ir(descriptor) {
            Ok(ir) => ir,
            Err(e) => {
                summary.record_failure(&descriptor.display_name, &e);
                continue;
            }
        };

        for emitter in emitters {
            let header_name = emitter.file_name(&ir);
            let unit = format!("{} ({})", descriptor.display_name, emitter.language_name());
            match write_header(emitter.as_ref(), &ir, out_dir, &header_name) {
                Ok(path) => summary.written.push(path),
                Err(e) => {
                    summary.record_failure(&unit, &e);
                    continue;
                }
            }

            if embed_glyphs && emitter.embeds_glyphs() {
                for glyph in &ir.descriptor.glyph_files {
                    let unit = format!(
                        "{} glyph {}",
                        descriptor.display_name, glyph.output_filename
                    );
                    match embed_glyph(glyph, &header_name, out_dir) {
                        Ok(path) => summary.written.push(path),
                        Err(e) => summary.record_failure(&unit, &e),
                    }
                }
            }
        }
    }

    log::info!(
        "batch done: {} artifacts written, {} failures",
        summary.written.len(),
        summary.failures.len()
    );
    summary
}

fn build_variant_ir(descriptor: &FontVariantDescriptor) -> Result<IntermediateRepresentation> {
    let raw = iconhdr_fetch::load(&descriptor.source_location)
        .context("retrieving metadata document")?;
    let ir = build_ir(&raw, descriptor).context("building intermediate representation")?;
    Ok(ir)
}

fn write_header(
    emitter: &dyn Emitter,
    ir: &IntermediateRepresentation,
    out_dir: &Path,
    header_name: &str,
) -> Result<PathBuf> {
    let path = out_dir.join(header_name);
    fs::write(&path, emitter.convert(ir))
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("saved {}", path.display());
    Ok(path)
}

fn embed_glyph(glyph: &GlyphFile, header_name: &str, out_dir: &Path) -> Result<PathBuf> {
    let bytes =
        iconhdr_fetch::load(&glyph.source_location).context("retrieving glyph binary")?;
    let array_name = iconhdr_emit::array_name(&glyph.output_filename);
    let text = iconhdr_emit::glyph_header(&bytes, &glyph.source_location, &array_name)
        .context("embedding glyph binary")?;
    let path = out_dir.join(format!("{header_name}_{}.h", glyph.output_filename));
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    log::info!("saved {}", path.display());
    Ok(path)
}
