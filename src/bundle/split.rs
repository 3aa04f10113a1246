// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Multi-document YAML splitting

use crate::constants::bundle::DOCUMENT_SEPARATOR;
use crate::error::{BootstrapError, Result};

/// Split a bundle into its individual documents, in bundle order.
///
/// Segments holding nothing but whitespace or comments are dropped and the
/// rest are trimmed. Content is not validated here; a broken document only
/// fails once it is decoded.
pub fn split(bundle: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bundle)
        .map_err(|e| BootstrapError::MalformedBundle(format!("bundle is not valid UTF-8: {}", e)))?;

    let mut documents = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if let Some(inline) = separator_content(line) {
            push_document(&mut documents, &current);
            current.clear();
            // `--- {kind: A}` starts the next document on the separator line
            if !inline.is_empty() && !inline.starts_with('#') {
                current.push_str(inline);
                current.push('\n');
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    push_document(&mut documents, &current);

    Ok(documents)
}

/// For a separator line (`---`, optionally followed by whitespace and more
/// text), the trimmed text after the marker.
fn separator_content(line: &str) -> Option<&str> {
    line.strip_prefix(DOCUMENT_SEPARATOR)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .map(str::trim)
}

fn push_document(documents: &mut Vec<String>, segment: &str) {
    let has_content = segment.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });

    if has_content {
        documents.push(segment.trim().to_string());
    }
}
