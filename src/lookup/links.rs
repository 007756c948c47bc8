//! External search links offered when every source came back empty.

use serde::Serialize;

use crate::barcode::Barcode;

/// A titled link to an external search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLink {
    pub title: &'static str,
    pub url: String,
}

/// Search pages for `code`, in display order.
pub fn fallback_links(code: &Barcode) -> Vec<SearchLink> {
    let code = urlencoding::encode(code.as_str());
    vec![
        SearchLink {
            title: "Search on Google",
            url: format!("https://www.google.com/search?q={}+barcode", code),
        },
        SearchLink {
            title: "Barcode Lookup",
            url: format!("https://www.barcodelookup.com/{}", code),
        },
        SearchLink {
            title: "UPC ItemDB",
            url: format!("https://www.upcitemdb.com/upc/{}", code),
        },
        SearchLink {
            title: "Google Shopping",
            url: format!("https://www.google.com/shopping/product/1?q={}", code),
        },
        SearchLink {
            title: "TEC-IT Barcode",
            url: format!("https://barcodes.tec-it.com/en/?barcode={}", code),
        },
    ]
}
