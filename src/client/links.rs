//! Direct URLs for embedding in markup
//!
//! These builders never issue requests. They use the API base as configured,
//! which is relative (`/api`) in production so the links resolve against
//! whatever origin serves the page.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters a URI component keeps as-is; everything else is escaped
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL builder over the configured API base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    base: String,
}

impl Links {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// API base these links are built on
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Image file, or its thumbnail
    pub fn image_url(&self, id: &str, thumbnail: bool) -> String {
        let mut url = format!("{}/images/{}/file", self.base, id);
        if thumbnail {
            url.push_str("?thumbnail=true");
        }
        url
    }

    /// Stored document file
    pub fn document_url(&self, id: &str) -> String {
        format!("{}/documents/{}", self.base, id)
    }

    /// Generated insurance report for a property
    pub fn insurance_report_url(&self, property_id: &str) -> String {
        format!("{}/reports/insurance/{}", self.base, property_id)
    }

    /// QR code image pointing at the item's public page. `base_url` overrides
    /// the host encoded into the QR link.
    pub fn item_qr_code_url(&self, id: &str, base_url: Option<&str>) -> String {
        let mut url = format!("{}/items/{}/qr", self.base, id);
        if let Some(base_url) = base_url.filter(|b| !b.is_empty()) {
            url.push_str("?base_url=");
            url.extend(utf8_percent_encode(base_url, COMPONENT));
        }
        url
    }
}
