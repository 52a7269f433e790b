use std::process::ExitCode;

use anyhow::Result;

use iconhdr::fonts;
use iconhdr_emit::{CHeaderEmitter, Emitter};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let descriptors = fonts::font_awesome_variants();
    log::info!("iconhdr starting: {} variants", descriptors.len());
    let emitters: Vec<Box<dyn Emitter>> = vec![Box::new(CHeaderEmitter)];
    let out_dir = std::env::current_dir()?;

    let summary = iconhdr::run_batch(&descriptors, &emitters, &out_dir, fonts::EMBED_GLYPHS);

    if summary.all_succeeded() {
        log::info!("all {} artifacts written", summary.written.len());
        Ok(ExitCode::SUCCESS)
    } else {
        // Every unit was still attempted; the exit code just tells CI that
        // the output set is incomplete.
        log::error!(
            "{} of {} units failed:",
            summary.failures.len(),
            summary.failures.len() + summary.written.len()
        );
        for failure in &summary.failures {
            log::error!("  {failure}");
        }
        Ok(ExitCode::FAILURE)
    }
}
