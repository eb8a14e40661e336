// Catalog of the security headers that make up a grade

use std::fmt;

/// Importance bucket of a header. Governs bonus eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Critical,
    Important,
    Recommended,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Critical => "critical",
            Tier::Important => "important",
            Tier::Recommended => "recommended",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub weight: u32,
    pub aliases: &'static [&'static str],
    pub tier: Tier,
}

pub const SECURITY_HEADERS: [HeaderSpec; 8] = [
    HeaderSpec {
        name: "Strict-Transport-Security",
        description: "Forces HTTPS connections to protect against man-in-the-middle attacks.",
        weight: 20,
        aliases: &[],
        tier: Tier::Critical,
    },
    HeaderSpec {
        name: "X-Content-Type-Options",
        description: "Prevents MIME-sniffing attacks by enforcing declared content types.",
        weight: 15,
        aliases: &[],
        tier: Tier::Critical,
    },
    HeaderSpec {
        name: "X-Frame-Options",
        description: "Protects against clickjacking by controlling iframe embedding.",
        weight: 15,
        aliases: &[],
        tier: Tier::Critical,
    },
    HeaderSpec {
        name: "Content-Security-Policy",
        description: "Helps prevent XSS attacks by defining allowed content sources.",
        weight: 20,
        aliases: &["Content-Security-Policy-Report-Only"],
        tier: Tier::Important,
    },
    HeaderSpec {
        name: "Referrer-Policy",
        description: "Controls how much referrer information is shared with requests.",
        weight: 15,
        aliases: &[],
        tier: Tier::Important,
    },
    HeaderSpec {
        name: "Permissions-Policy",
        description: "Controls which browser features and APIs can be used.",
        weight: 10,
        aliases: &["Feature-Policy"],
        tier: Tier::Recommended,
    },
    HeaderSpec {
        name: "Cross-Origin-Opener-Policy",
        description: "Prevents cross-origin attacks by isolating browsing context.",
        weight: 8,
        aliases: &[],
        tier: Tier::Recommended,
    },
    HeaderSpec {
        name: "Cross-Origin-Resource-Policy",
        description: "Protects resources from being loaded by other origins.",
        weight: 7,
        aliases: &[],
        tier: Tier::Recommended,
    },
];

pub fn catalog() -> &'static [HeaderSpec] {
    &SECURITY_HEADERS
}

pub fn total_weight(specs: &[HeaderSpec]) -> u32 {
    specs.iter().map(|spec| spec.weight).sum()
}

pub fn find(name: &str) -> Option<&'static HeaderSpec> {
    SECURITY_HEADERS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
}
