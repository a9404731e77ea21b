//! Sponsorship tiers and the default tiered layout
//!
//! A tier groups every sponsorship whose monthly amount reaches its threshold
//! (and no higher tier's). Each non-empty tier is drawn as an optional title
//! followed by a grid of badges, highest tier first.

use std::cmp::Ordering;

use log::debug;

use crate::error::ComposeError;
use crate::preset::BadgePreset;
use crate::renderer::SvgComposer;
use crate::sponsor::Sponsorship;

/// Space above each tier
pub const DEFAULT_TIER_PADDING_TOP: f64 = 20.0;
/// Space below each tier
pub const DEFAULT_TIER_PADDING_BOTTOM: f64 = 10.0;
/// Space between a tier title and its grid
pub const TITLE_GAP: f64 = 5.0;

/// One sponsorship tier
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    pub title: Option<String>,
    /// Minimum monthly amount for membership
    pub monthly_dollars: f64,
    /// Badge preset, `base` when absent
    pub preset: Option<BadgePreset>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
}

impl Tier {
    pub fn new(monthly_dollars: f64) -> Self {
        Self {
            title: None,
            monthly_dollars,
            preset: None,
            padding_top: None,
            padding_bottom: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_preset(mut self, preset: BadgePreset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn with_padding(mut self, top: f64, bottom: f64) -> Self {
        self.padding_top = Some(top);
        self.padding_bottom = Some(bottom);
        self
    }

    /// Catch-all tier used when no tiers are configured
    pub fn catch_all() -> Self {
        Self::new(f64::NEG_INFINITY)
    }

    pub fn preset_or_default(&self) -> BadgePreset {
        self.preset.clone().unwrap_or_default()
    }
}

/// Vertical padding around the whole document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentPadding {
    pub top: f64,
    pub bottom: f64,
}

impl Default for DocumentPadding {
    fn default() -> Self {
        Self {
            top: 20.0,
            bottom: 20.0,
        }
    }
}

/// Sponsorships assigned to one tier
#[derive(Debug, Clone)]
pub struct TierPartition {
    pub tier: Tier,
    pub sponsors: Vec<Sponsorship>,
}

/// Assign every sponsorship to the highest tier it qualifies for.
///
/// Partitions are returned highest tier first. Sponsorships below every
/// threshold are dropped. Within a partition, larger amounts come first and
/// ties keep the earliest `created_at` first.
pub fn partition_tiers(sponsorships: &[Sponsorship], tiers: &[Tier]) -> Vec<TierPartition> {
    let mut tiers: Vec<Tier> = if tiers.is_empty() {
        vec![Tier::catch_all()]
    } else {
        tiers.to_vec()
    };
    tiers.sort_by(|a, b| a.monthly_dollars.total_cmp(&b.monthly_dollars));

    let mut partitions: Vec<TierPartition> = tiers
        .into_iter()
        .map(|tier| TierPartition {
            tier,
            sponsors: vec![],
        })
        .collect();

    for s in sponsorships {
        let slot = partitions
            .iter()
            .rposition(|p| p.tier.monthly_dollars <= s.monthly_dollars);
        match slot {
            Some(i) => partitions[i].sponsors.push(s.clone()),
            None => debug!(
                "dropping sponsor '{}': ${} is below every tier",
                s.sponsor.login, s.monthly_dollars
            ),
        }
    }

    for p in &mut partitions {
        p.sponsors.sort_by(compare_sponsorships);
    }
    partitions.reverse();
    partitions
}

fn compare_sponsorships(a: &Sponsorship, b: &Sponsorship) -> Ordering {
    b.monthly_dollars
        .total_cmp(&a.monthly_dollars)
        .then_with(|| match (&a.created_at, &b.created_at) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Lay out all tiers into `composer`
pub fn compose_tiers<'a>(
    composer: &'a mut SvgComposer,
    sponsorships: &[Sponsorship],
    tiers: &[Tier],
    padding: DocumentPadding,
) -> Result<&'a mut SvgComposer, ComposeError> {
    composer.add_span(padding.top);

    for partition in partition_tiers(sponsorships, tiers) {
        let tier = &partition.tier;
        let preset = tier.preset_or_default();
        if partition.sponsors.is_empty() || preset.avatar.size == 0.0 {
            continue;
        }

        debug!(
            "tier {:?} (${}): {} sponsor(s)",
            tier.title.as_deref().unwrap_or("<untitled>"),
            tier.monthly_dollars,
            partition.sponsors.len()
        );

        composer.add_span(tier.padding_top.unwrap_or(DEFAULT_TIER_PADDING_TOP));
        if let Some(title) = &tier.title {
            composer.add_title(title, None).add_span(TITLE_GAP);
        }
        composer
            .add_sponsor_grid(&partition.sponsors, &preset)?
            .add_span(tier.padding_bottom.unwrap_or(DEFAULT_TIER_PADDING_BOTTOM));
    }

    composer.add_span(padding.bottom);
    Ok(composer)
}
