//! Slot and tier registry.
//!
//! Banner slots are fixed placements on storefront pages, each mapped to a
//! pricing tier. Both tables are compiled-in and immutable: slots and tiers
//! change with a release, never at runtime, so lookups are pure functions
//! over static data with no I/O and no error channel beyond `Option`.

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

/// A pricing/priority class one or more slots belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TierDefinition {
    pub key: &'static str,
    pub label: &'static str,
    /// Package price in currency minor-unit precision.
    pub price: Decimal,
    pub duration_days: i64,
    pub description: &'static str,
}

/// A fixed, named placement location on a page.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SlotDefinition {
    pub key: &'static str,
    pub label: &'static str,
    /// Tier this slot is sold under. Must reference an entry in [`TIERS`].
    pub tier_key: &'static str,
    /// Display prominence, lower = more prominent. Fractional values splice
    /// new slots between existing ones without renumbering.
    pub priority: f64,
    pub description: &'static str,
}

/// Sort priority assigned to rows whose slot key is no longer configured,
/// so orphaned placements still sort (last) in admin listings.
pub const UNKNOWN_SLOT_PRIORITY: f64 = 999.0;

macro_rules! dec {
    ($lit:literal) => {
        Decimal::from_parts($lit, 0, 0, false, 2)
    };
}

/// Tier pricing table. Prices are stored with two decimal places
/// (`dec!` scales the raw mantissa by 10^-2).
pub static TIERS: &[TierDefinition] = &[
    TierDefinition {
        key: "tier1",
        label: "Tier 1 · Premium Hero",
        price: dec!(1000000), // 10000.00
        duration_days: 7,
        description: "Highest-visibility hero banners for home, category, and search tops.",
    },
    TierDefinition {
        key: "tier2",
        label: "Tier 2 · Mid Fold Highlight",
        price: dec!(500000), // 5000.00
        duration_days: 7,
        description: "Mid-page and dashboard placements for strong-but-accessible visibility.",
    },
    TierDefinition {
        key: "tier3",
        label: "Tier 3 · Offer & Support",
        price: dec!(250000), // 2500.00
        duration_days: 7,
        description: "Deals, footer, sidebar and checkout placements for budget sellers.",
    },
];

/// Slot table. Ordered by priority for stable grouped output.
pub static SLOTS: &[SlotDefinition] = &[
    SlotDefinition {
        key: "slot_home_top",
        label: "Home · Top Hero Banner",
        tier_key: "tier1",
        priority: 1.0,
        description: "Top hero banner on the home page.",
    },
    SlotDefinition {
        key: "slot_category_top",
        label: "Category · Top Hero Banner",
        tier_key: "tier1",
        priority: 2.0,
        description: "Category page masthead for niche targeting.",
    },
    SlotDefinition {
        key: "slot_search_top",
        label: "Search · Sponsored Top Banner",
        tier_key: "tier1",
        priority: 3.0,
        description: "Search sponsored hero with highest CTR.",
    },
    SlotDefinition {
        key: "slot_home_mid",
        label: "Home · Mid Section Banner",
        tier_key: "tier2",
        priority: 4.0,
        description: "Between homepage categories for second-level visibility.",
    },
    SlotDefinition {
        key: "slot_home_slider_banner",
        label: "Home · Below Slider Banner",
        tier_key: "tier2",
        priority: 4.1,
        description: "Banner placed directly under the hero slider.",
    },
    SlotDefinition {
        key: "slot_home_categories_banner",
        label: "Home · Below Categories Banner",
        tier_key: "tier2",
        priority: 4.2,
        description: "Banner placed under the shop-by-category grid.",
    },
    SlotDefinition {
        key: "slot_category_mid",
        label: "Category · Mid Banner",
        tier_key: "tier2",
        priority: 5.0,
        description: "Mid-category grid interstitial for mid-level sellers.",
    },
    SlotDefinition {
        key: "slot_search_mid",
        label: "Search · Mid Banner",
        tier_key: "tier2",
        priority: 6.0,
        description: "Search result mid placement.",
    },
    SlotDefinition {
        key: "slot_home_offer_box",
        label: "Home · Deals & Offers Banner",
        tier_key: "tier3",
        priority: 7.0,
        description: "Deals & offers section highlight for budget sellers.",
    },
    SlotDefinition {
        key: "slot_product_sidebar",
        label: "Product · Sidebar Banner",
        tier_key: "tier3",
        priority: 8.0,
        description: "Small ad inside product detail related section.",
    },
    SlotDefinition {
        key: "slot_search_bottom",
        label: "Search · Bottom Banner",
        tier_key: "tier3",
        priority: 9.0,
        description: "Search footer banner for awareness.",
    },
    SlotDefinition {
        key: "slot_footer_banner",
        label: "Global Footer Banner",
        tier_key: "tier3",
        priority: 10.0,
        description: "Site-wide footer branding banner.",
    },
    SlotDefinition {
        key: "slot_cart_checkout",
        label: "Cart · Checkout Offer Banner",
        tier_key: "tier3",
        priority: 11.0,
        description: "Checkout promo slot for bank/shipping offers.",
    },
    SlotDefinition {
        key: "slot_blog_featured",
        label: "Blog · Featured Banner",
        tier_key: "tier2",
        priority: 12.0,
        description: "High-value banner on blog detail pages.",
    },
    SlotDefinition {
        key: "slot_seller_dashboard",
        label: "Seller Dashboard · Internal Promo",
        tier_key: "tier2",
        priority: 13.0,
        description: "Internal ads promoting seller upgrades and packages.",
    },
    SlotDefinition {
        key: "slot_product_grid",
        label: "Product Grid · Between Rows",
        tier_key: "tier3",
        priority: 14.0,
        description: "Small rectangle ad between product grid rows.",
    },
    SlotDefinition {
        key: "slot_global_footer",
        label: "Global Footer · Site Bottom",
        tier_key: "tier3",
        priority: 15.0,
        description: "Very bottom of site footer. Low price, always seen by long scrollers.",
    },
];

static SLOT_INDEX: LazyLock<HashMap<&'static str, &'static SlotDefinition>> =
    LazyLock::new(|| SLOTS.iter().map(|s| (s.key, s)).collect());

static TIER_INDEX: LazyLock<HashMap<&'static str, &'static TierDefinition>> =
    LazyLock::new(|| TIERS.iter().map(|t| (t.key, t)).collect());

/// Look up a slot by key.
pub fn slot(key: &str) -> Option<&'static SlotDefinition> {
    SLOT_INDEX.get(key).copied()
}

/// All configured slots, in priority order.
pub fn slots() -> &'static [SlotDefinition] {
    SLOTS
}

/// Slots grouped by tier, preserving each slot's relative priority within
/// its tier. Tiers appear in [`TIERS`] order; tiers with no slots are
/// omitted. Used to render ordered slot choice lists in admin forms.
pub fn slots_grouped_by_tier() -> Vec<(&'static TierDefinition, Vec<&'static SlotDefinition>)> {
    TIERS
        .iter()
        .filter_map(|tier| {
            let group: Vec<_> = SLOTS.iter().filter(|s| s.tier_key == tier.key).collect();
            (!group.is_empty()).then_some((tier, group))
        })
        .collect()
}

/// Look up a tier by key.
pub fn tier(key: &str) -> Option<&'static TierDefinition> {
    TIER_INDEX.get(key).copied()
}

/// Price of a tier, or zero for an unknown key.
pub fn tier_price(key: &str) -> Decimal {
    tier(key).map(|t| t.price).unwrap_or_default()
}

/// Run duration of a tier in days, or zero for an unknown key.
pub fn tier_duration_days(key: &str) -> i64 {
    tier(key).map(|t| t.duration_days).unwrap_or(0)
}

/// Display priority of a slot, or [`UNKNOWN_SLOT_PRIORITY`] for an
/// unknown key.
pub fn slot_priority(key: &str) -> f64 {
    slot(key).map(|s| s.priority).unwrap_or(UNKNOWN_SLOT_PRIORITY)
}
