//! Institutional header and signature footer shared by every certificate.
//!
//! Settings may not be configured when a document is rendered; every line
//! therefore carries a literal fallback so the page always composes. Seal
//! images arrive as base64 payloads in settings and become temp-dir assets
//! next to the Typst source; a drawn placeholder stands in when absent.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::common::escape_typst_markup;
use super::resolver::BLANK_LINE;
use super::DocumentAsset;
use crate::settings::models::Settings;

pub const BARANGAY_SEAL_ASSET: &str = "barangay-seal.png";
pub const MUNICIPAL_SEAL_ASSET: &str = "municipal-seal.png";

/// Fallback "prepared by" name printed when none is supplied.
pub const PREPARED_BY_FALLBACK: &str = "JUANA P. REYES";

/// Header markup plus the image assets it references.
#[derive(Debug)]
pub struct ComposedHeader {
    pub source: String,
    pub assets: Vec<DocumentAsset>,
}

/// Compose the institutional header: seals left and right, a faint oversized
/// watermark of the barangay seal, four centered jurisdiction lines, and the
/// office title.
pub fn institutional_header(settings: &Settings) -> ComposedHeader {
    let mut assets = Vec::new();

    let barangay_seal = decode_seal(settings.barangay_seal.as_deref(), BARANGAY_SEAL_ASSET);
    if let Some(asset) = barangay_seal {
        assets.push(asset);
    }
    let municipal_seal = decode_seal(settings.municipal_seal.as_deref(), MUNICIPAL_SEAL_ASSET);
    if let Some(asset) = municipal_seal {
        assets.push(asset);
    }
    let has_barangay_seal = assets.iter().any(|a| a.filename == BARANGAY_SEAL_ASSET);
    let has_municipal_seal = assets.iter().any(|a| a.filename == MUNICIPAL_SEAL_ASSET);

    let province = fallback(&settings.province, "Province");
    let municipality = fallback(&settings.municipality, "Municipality");
    let barangay = if settings.barangay.trim().is_empty() {
        "BARANGAY".to_string()
    } else {
        settings.barangay.trim().to_uppercase()
    };

    let mut source = String::new();

    source.push_str(&seal_block("left", has_barangay_seal, BARANGAY_SEAL_ASSET));
    source.push_str(&seal_block(
        "right",
        has_municipal_seal,
        MUNICIPAL_SEAL_ASSET,
    ));
    if has_barangay_seal {
        // Watermark repeat of the barangay seal behind the page body.
        source.push_str(&format!(
            "#place(center + horizon, dy: 60pt, image(\"{BARANGAY_SEAL_ASSET}\", width: 400pt))\n"
        ));
    }

    source.push_str("#align(center)[\n");
    source.push_str("  #text(size: 16pt)[Republic of the Philippines] \\\n");
    source.push_str(&format!(
        "  #text(size: 16pt)[Province of {}] \\\n",
        escape_typst_markup(&province)
    ));
    source.push_str(&format!(
        "  #text(size: 16pt)[Municipality of {}] \\\n",
        escape_typst_markup(&municipality)
    ));
    source.push_str(&format!(
        "  #text(size: 16pt, weight: \"bold\")[BARANGAY {}]\n",
        escape_typst_markup(&barangay)
    ));
    source.push_str("]\n");
    source.push_str(
        "#align(center)[#text(size: 16pt, weight: \"bold\")[OFFICE OF THE PUNONG BARANGAY]]\n",
    );
    source.push_str("#v(10pt)\n");

    ComposedHeader { source, assets }
}

/// Signature footer used by certificates only.
///
/// Left column: certifying officer, optional assigned-official block, the
/// captain (blank line when unresolved). Right column: dry-seal notice,
/// O.R./date blank lines, amount, prepared-by.
pub fn certificate_footer(
    captain: Option<&str>,
    assigned_official: Option<&str>,
    amount: &str,
    prepared_by: Option<&str>,
) -> String {
    let captain = match captain {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => BLANK_LINE.to_string(),
    };
    let amount = if amount.trim().is_empty() {
        "_________".to_string()
    } else {
        amount.trim().to_string()
    };
    let prepared_by = match prepared_by {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => PREPARED_BY_FALLBACK.to_string(),
    };

    let mut left = String::new();
    left.push_str("Certifying Officer, \\\n");
    left.push_str("#v(10pt)\n");
    if let Some(official) = assigned_official.filter(|o| !o.trim().is_empty()) {
        left.push_str(&format!(
            "*HON. {}* \\\nOfficer of the day \\\n#v(10pt)\n",
            escape_typst_markup(official.trim())
        ));
    }
    left.push_str(&format!(
        "*HON. {}* \\\nPunong Barangay\n",
        escape_typst_markup(&captain)
    ));

    let mut right = String::new();
    right.push_str("*Not valid without dry seal* \\\n");
    right.push_str("#v(30pt)\n");
    right.push_str("O.R. No.: \\_\\_\\_\\_\\_\\_\\_\\_\\_\\_\\_\\_ \\\n");
    right.push_str("Date: \\_\\_\\_\\_\\_\\_\\_\\_\\_\\_\\_\\_\\_ \\\n");
    right.push_str(&format!(
        "Amount: PHP {} \\\n",
        escape_typst_markup(&amount)
    ));
    right.push_str(&format!(
        "Prepared by: {}\n",
        escape_typst_markup(&prepared_by)
    ));

    format!(
        "#v(20pt)\n#grid(\n  columns: (1fr, 1fr),\n  align(left)[\n{left}],\n  align(right)[\n{right}],\n)\n"
    )
}

fn fallback(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.trim().to_string()
    }
}

fn decode_seal(payload: Option<&str>, filename: &str) -> Option<DocumentAsset> {
    let payload = payload?;
    match BASE64.decode(payload.trim()) {
        Ok(bytes) if !bytes.is_empty() => Some(DocumentAsset {
            filename: filename.to_string(),
            bytes,
        }),
        Ok(_) => None,
        Err(err) => {
            log::warn!("ignoring undecodable seal image '{}': {}", filename, err);
            None
        }
    }
}

fn seal_block(side: &str, has_image: bool, asset: &str) -> String {
    if has_image {
        format!("#place(top + {side}, dx: 0pt, dy: 0pt, image(\"{asset}\", width: 68pt))\n")
    } else {
        // Placeholder artwork when settings carry no seal yet.
        format!("#place(top + {side}, circle(radius: 34pt, stroke: 1pt + gray))\n")
    }
}
