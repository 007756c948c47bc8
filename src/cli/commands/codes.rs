//! Offline code commands: validation, conversion and generation.

use crate::barcode::{self, CodeType, checksum};
use crate::error::ResultExt;

use super::parse_code;

/// Check a code and show what it is
pub fn cmd_validate(raw: &str) -> anyhow::Result<()> {
    let code = parse_code(raw)?;
    let kind = code.code_type();

    println!("✓ {} is a valid {}", code, kind);

    // Only the EAN family carries a mod-10 check digit worth reporting
    if matches!(
        kind,
        CodeType::Ean8 | CodeType::UpcA | CodeType::Ean13 | CodeType::Isbn13
    ) {
        let status = if checksum::has_valid_ean_checksum(code.as_str()) {
            "correct"
        } else {
            "incorrect"
        };
        println!("  Check digit: {}", status);
    }

    let alternatives = code.alternatives();
    if !alternatives.is_empty() {
        println!("  Alternative formats:");
        for (format, converted) in alternatives {
            println!("    {:<8} {}", format!("{}:", format), converted);
        }
    }
    Ok(())
}

/// Convert a code to another format
pub fn cmd_convert(raw: &str, target: CodeType) -> anyhow::Result<()> {
    let code = parse_code(raw)?;
    let converted = code.convert(target);

    if converted == code && code.code_type() != target {
        tracing::debug!("No rule converts {} to {}", code.code_type(), target);
        eprintln!(
            "No conversion from {} to {}; code left unchanged.",
            code.code_type(),
            target
        );
    }
    println!("{}", converted);
    Ok(())
}

/// Generate EAN-13 codes from a country prefix and product code
pub fn cmd_generate(prefix: &str, product_code: &str, single: bool) -> anyhow::Result<()> {
    let context = format!("prefix '{}', product code '{}'", prefix, product_code);
    if single {
        let code = barcode::generate_single(prefix, product_code).with_context(context)?;
        println!("{}", code);
    } else {
        for code in barcode::generate_batch(prefix, product_code).with_context(context)? {
            println!("{}", code);
        }
    }
    Ok(())
}
