//! C and C++ preprocessor-macro emitter.

use std::fmt::Write;

use iconhdr_ir::{IconEntry, IntermediateRepresentation};

use crate::emitter::Emitter;

/// Emits `#define` macros for C and C++ consumers.
///
/// Symbol uniqueness across an output file shared by sibling variants rests
/// entirely on the short-code / boundary-code prefixes; the emitter itself
/// never renames anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct CHeaderEmitter;

impl Emitter for CHeaderEmitter {
    fn language_name(&self) -> &'static str {
        "C and C++"
    }

    fn file_name(&self, ir: &IntermediateRepresentation) -> String {
        format!("Icons{}.h", ir.descriptor.display_name.replace(' ', ""))
    }

    fn prelude(&self, ir: &IntermediateRepresentation) -> String {
        let glyph_sources: Vec<&str> = ir
            .descriptor
            .glyph_files
            .iter()
            .map(|g| g.source_location.as_str())
            .collect();
        let mut out = format!(
            "// Generated by iconhdr\n// from {}\n// for use with {}\n#pragma once\n\n",
            ir.descriptor.source_location,
            glyph_sources.join(", "),
        );
        for glyph in &ir.descriptor.glyph_files {
            let _ = writeln!(
                out,
                "#define FONT_ICON_FILE_NAME_{} \"{}\"",
                glyph.style_code, glyph.output_filename
            );
        }
        out.push('\n');
        out
    }

    fn boundary_lines(&self, ir: &IntermediateRepresentation) -> String {
        let code = ir.descriptor.boundary_code();
        format!(
            "#define ICON_MIN_{code} 0x{:04x}\n\
             #define ICON_MAX_16_{code} 0x{:04x}\n\
             #define ICON_MAX_{code} 0x{:04x}\n",
            ir.font_min, ir.font_max_16, ir.font_max,
        )
    }

    fn icon_line(&self, ir: &IntermediateRepresentation, icon: &IconEntry) -> String {
        format!(
            "#define ICON_{}_{} \"{}\"\t// U+{:04x}\n",
            ir.descriptor.short_code,
            icon.name.to_uppercase().replace('-', "_"),
            escape_utf8(icon.codepoint),
            icon.codepoint,
        )
    }

    fn embeds_glyphs(&self) -> bool {
        true
    }
}

/// Render `codepoint` as the contents of a C string literal: the scalar's
/// UTF-8 encoding with every byte escaped individually as `\xHH`, the way a
/// C-family literal embeds a multi-byte sequence.
fn escape_utf8(codepoint: u32) -> String {
    let ch = char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER);
    let mut buf = [0u8; 4];
    let mut out = String::new();
    for byte in ch.encode_utf8(&mut buf).bytes() {
        let _ = write!(out, "\\x{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconhdr_ir::{FontVariantDescriptor, GlyphFile, UNICODE_MAX, build_ir};

    fn fa6_descriptor() -> FontVariantDescriptor {
        FontVariantDescriptor {
            display_name: "Font Awesome 6".to_string(),
            short_code: "FA".to_string(),
            boundary_code: None,
            source_location: "icons.yml".to_string(),
            glyph_files: vec![
                GlyphFile {
                    style_code: "FAR".to_string(),
                    output_filename: "fa-regular-400.ttf".to_string(),
                    source_location: "fa-regular-400.ttf".to_string(),
                },
                GlyphFile {
                    style_code: "FAS".to_string(),
                    output_filename: "fa-solid-900.ttf".to_string(),
                    source_location: "fa-solid-900.ttf".to_string(),
                },
            ],
            included_styles: vec!["regular".to_string(), "solid".to_string()],
        }
    }

    fn music_ir() -> iconhdr_ir::IntermediateRepresentation {
        let doc = b"music:\n  styles:\n    - solid\n  unicode: f001\n";
        build_ir(doc, &fa6_descriptor()).unwrap()
    }

    #[test]
    fn test_file_name_strips_spaces() {
        assert_eq!(CHeaderEmitter.file_name(&music_ir()), "IconsFontAwesome6.h");
    }

    #[test]
    fn test_icon_line_music() {
        let ir = music_ir();
        let line = CHeaderEmitter.icon_line(&ir, &ir.icons[0]);
        assert_eq!(line, "#define ICON_FA_MUSIC \"\\xef\\x80\\x81\"\t// U+f001\n");
    }

    #[test]
    fn test_icon_line_kebab_case_name() {
        let doc = b"circle-user:\n  styles:\n    - solid\n  unicode: f2bd\n";
        let ir = build_ir(doc, &fa6_descriptor()).unwrap();
        let line = CHeaderEmitter.icon_line(&ir, &ir.icons[0]);
        assert!(line.starts_with("#define ICON_FA_CIRCLE_USER "));
    }

    #[test]
    fn test_boundary_lines_use_short_code_by_default() {
        let ir = music_ir();
        assert_eq!(
            CHeaderEmitter.boundary_lines(&ir),
            "#define ICON_MIN_FA 0xf001\n\
             #define ICON_MAX_16_FA 0xf001\n\
             #define ICON_MAX_FA 0xf001\n"
        );
    }

    #[test]
    fn test_boundary_lines_use_boundary_code_override() {
        let mut descriptor = fa6_descriptor();
        descriptor.boundary_code = Some("FAB".to_string());
        descriptor.included_styles = vec!["brands".to_string()];
        let doc = b"github:\n  styles:\n    - brands\n  unicode: f09b\n";
        let ir = build_ir(doc, &descriptor).unwrap();
        let lines = CHeaderEmitter.boundary_lines(&ir);
        assert!(lines.contains("#define ICON_MIN_FAB 0xf09b\n"));
        assert!(lines.contains("#define ICON_MAX_16_FAB 0xf09b\n"));
        assert!(lines.contains("#define ICON_MAX_FAB 0xf09b\n"));
    }

    #[test]
    fn test_boundary_lines_empty_variant() {
        let doc = b"music:\n  styles:\n    - solid\n  unicode: f001\n";
        let mut descriptor = fa6_descriptor();
        descriptor.included_styles = vec!["brands".to_string()];
        let ir = build_ir(doc, &descriptor).unwrap();
        assert_eq!(ir.font_min, UNICODE_MAX);
        let lines = CHeaderEmitter.boundary_lines(&ir);
        assert!(lines.contains("#define ICON_MIN_FA 0x10ffff\n"));
        assert!(lines.contains("#define ICON_MAX_FA 0x0000\n"));
    }

    #[test]
    fn test_prelude_declares_glyph_filenames() {
        let prelude = CHeaderEmitter.prelude(&music_ir());
        assert!(prelude.contains("#pragma once\n"));
        assert!(prelude.contains("#define FONT_ICON_FILE_NAME_FAR \"fa-regular-400.ttf\"\n"));
        assert!(prelude.contains("#define FONT_ICON_FILE_NAME_FAS \"fa-solid-900.ttf\"\n"));
        assert!(prelude.ends_with("\n\n"));
    }

    #[test]
    fn test_prelude_stable_across_runs() {
        let ir = music_ir();
        assert_eq!(CHeaderEmitter.prelude(&ir), CHeaderEmitter.prelude(&ir));
    }

    #[test]
    fn test_convert_concatenation_order() {
        let ir = music_ir();
        let text = CHeaderEmitter.convert(&ir);
        let prelude_pos = text.find("#pragma once").unwrap();
        let min_pos = text.find("#define ICON_MIN_FA").unwrap();
        let icon_pos = text.find("#define ICON_FA_MUSIC").unwrap();
        assert!(prelude_pos < min_pos);
        assert!(min_pos < icon_pos);
        // Default epilogue is empty, so the icon line closes the file.
        assert!(text.ends_with("// U+f001\n"));
    }

    #[test]
    fn test_convert_keeps_ir_order() {
        let doc = b"\
zebra:
  styles:
    - solid
  unicode: f2e0
music:
  styles:
    - solid
  unicode: f001
";
        let ir = build_ir(doc, &fa6_descriptor()).unwrap();
        let text = CHeaderEmitter.convert(&ir);
        let zebra = text.find("ICON_FA_ZEBRA").unwrap();
        let music = text.find("ICON_FA_MUSIC").unwrap();
        assert!(zebra < music, "icon lines must follow document order");
    }

    #[test]
    fn test_escape_utf8_multibyte() {
        assert_eq!(escape_utf8(0xf001), "\\xef\\x80\\x81");
        assert_eq!(escape_utf8(0x10fff), "\\xf0\\x90\\xbf\\xbf");
    }

    #[test]
    fn test_escape_utf8_every_byte_escaped() {
        // ASCII never reaches the emitter in practice, but the conversion
        // still escapes byte-by-byte rather than printing literals.
        assert_eq!(escape_utf8(0x0041), "\\x41");
    }
}
