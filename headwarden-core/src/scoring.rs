// Weighted scoring with tiered bonuses

use crate::catalog::{HeaderSpec, Tier, catalog};
use crate::model::{AnalysisResult, Grade, HeaderSummary};
use crate::security::{HeaderLookup, is_https, is_present};
use std::collections::BTreeMap;

pub const HEADER_POINTS: u32 = 70;
pub const HTTPS_POINTS: u32 = 30;
pub const CRITICAL_BONUS_MAX: u32 = 10;
pub const IMPORTANT_BONUS_MAX: u32 = 5;
pub const MAX_SCORE: u32 = 100;

/// Every intermediate value that goes into a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub achieved_weight: u32,
    pub total_weight: u32,
    pub header_score: u32,
    pub https_score: u32,
    pub critical_count: u32,
    pub critical_bonus: u32,
    pub important_count: u32,
    pub important_bonus: u32,
    /// Sum before the cap at 100.
    pub raw_total: u32,
    pub score: u8,
}

impl ScoreBreakdown {
    pub fn compute<'a, I>(presence: I, url: &str) -> Self
    where
        I: IntoIterator<Item = (&'a HeaderSpec, bool)>,
    {
        let mut total = 0;
        let mut achieved = 0;
        let mut critical_count = 0;
        let mut important_count = 0;

        for (spec, present) in presence {
            total += spec.weight;
            if !present {
                continue;
            }
            achieved += spec.weight;
            match spec.tier {
                Tier::Critical => critical_count += 1,
                Tier::Important => important_count += 1,
                Tier::Recommended => {}
            }
        }

        let header_score = if total > 0 {
            achieved * HEADER_POINTS / total
        } else {
            0
        };
        let https_score = if is_https(url) { HTTPS_POINTS } else { 0 };

        // Coarse on purpose: 1/2/3 critical headers earn 3/6/10, 1/2 important earn 2/5.
        let critical_bonus = tier_bonus(critical_count, 3, CRITICAL_BONUS_MAX);
        let important_bonus = tier_bonus(important_count, 2, IMPORTANT_BONUS_MAX);

        let raw_total = header_score + https_score + critical_bonus + important_bonus;
        let score = raw_total.min(MAX_SCORE) as u8;

        Self {
            achieved_weight: achieved,
            total_weight: total,
            header_score,
            https_score,
            critical_count,
            critical_bonus,
            important_count,
            important_bonus,
            raw_total,
            score,
        }
    }

    /// Rebuilds the breakdown of a finished analysis from its presence map,
    /// weighted by the built-in catalog.
    pub fn for_result(result: &AnalysisResult) -> Self {
        Self::compute(
            catalog().iter().map(|spec| {
                let present = result.headers.get(spec.name).copied().unwrap_or(false);
                (spec, present)
            }),
            &result.url,
        )
    }
}

fn tier_bonus(count: u32, tier_size: u32, max: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    (count * max / tier_size).min(max)
}

/// Grades `headers` as served from `url` (already normalized).
pub fn score_headers<H: HeaderLookup + ?Sized>(headers: &H, url: &str) -> AnalysisResult {
    score_with_catalog(catalog(), headers, url)
}

pub(crate) fn score_with_catalog<H: HeaderLookup + ?Sized>(
    specs: &[HeaderSpec],
    headers: &H,
    url: &str,
) -> AnalysisResult {
    let presence: Vec<(&HeaderSpec, bool)> = specs
        .iter()
        .map(|spec| (spec, is_present(headers, spec)))
        .collect();

    let mut header_map = BTreeMap::new();
    let mut summary = Vec::with_capacity(specs.len());
    for (spec, present) in &presence {
        header_map.insert(spec.name.to_string(), *present);
        summary.push(HeaderSummary::from_spec(spec, *present));
    }

    let breakdown = ScoreBreakdown::compute(presence, url);

    AnalysisResult {
        headers: header_map,
        score: breakdown.score,
        grade: Grade::from_score(breakdown.score),
        summary,
        url: url.to_string(),
    }
}
