//! Fixed catalog of labs and tools offered on the dashboard.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const LABS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "sql-injection",
        title: "SQL Injection",
        summary: "Bypass a login form and dump the product table.",
    },
    CatalogEntry {
        id: "xss",
        title: "Cross-Site Scripting",
        summary: "Inject script through product reviews.",
    },
    CatalogEntry {
        id: "csrf",
        title: "Cross-Site Request Forgery",
        summary: "Change another shopper's email without their consent.",
    },
    CatalogEntry {
        id: "broken-auth",
        title: "Broken Authentication",
        summary: "Abuse weak session handling in the checkout flow.",
    },
    CatalogEntry {
        id: "idor",
        title: "Insecure Direct Object Reference",
        summary: "Read orders that belong to other customers.",
    },
    CatalogEntry {
        id: "ssrf",
        title: "Server-Side Request Forgery",
        summary: "Make the store fetch internal resources for you.",
    },
];

pub const TOOLS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "port-scanner",
        title: "Port Scanner",
        summary: "Probe a simulated host for open services.",
    },
    CatalogEntry {
        id: "hash-cracker",
        title: "Hash Cracker",
        summary: "Run a dictionary attack against sample hashes.",
    },
    CatalogEntry {
        id: "password-strength",
        title: "Password Strength",
        summary: "Estimate how long a password survives brute force.",
    },
    CatalogEntry {
        id: "encoder",
        title: "Encoder / Decoder",
        summary: "Convert between Base64, URL, and hex encodings.",
    },
    CatalogEntry {
        id: "header-analyzer",
        title: "Header Analyzer",
        summary: "Check HTTP responses for missing security headers.",
    },
];

/// Title for `id` in `catalog`, or the id itself when unknown.
pub fn title_for<'a>(catalog: &[CatalogEntry], id: &'a str) -> &'a str {
    catalog.iter().find(|entry| entry.id == id).map_or(id, |entry| entry.title)
}
