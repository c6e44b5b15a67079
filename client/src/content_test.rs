use super::*;

#[test]
fn pricing_tiers_are_in_fixed_order() {
    let titles: Vec<&str> = PRICING_TIERS.iter().map(|t| t.title).collect();
    assert_eq!(titles, ["Starter", "Professional", "Enterprise"]);
    let prices: Vec<u32> = PRICING_TIERS.iter().map(|t| t.price).collect();
    assert_eq!(prices, [29, 79, 199]);
}

#[test]
fn exactly_one_tier_is_highlighted() {
    let highlighted: Vec<&str> = PRICING_TIERS.iter().filter(|t| t.highlighted).map(|t| t.title).collect();
    assert_eq!(highlighted, ["Professional"]);
}

#[test]
fn every_tier_lists_features() {
    for tier in PRICING_TIERS {
        assert!(!tier.features.is_empty(), "{} has no features", tier.title);
    }
}

#[test]
fn price_label_prefixes_dollar() {
    assert_eq!(PRICING_TIERS[2].price_label(), "$199");
}

#[test]
fn three_features_and_three_showcase_tiles() {
    assert_eq!(FEATURES.len(), 3);
    assert_eq!(SHOWCASE.len(), 3);
    assert!(SHOWCASE.iter().all(|tile| tile.image_url.starts_with("https://")));
}

#[test]
fn in_page_anchors_match_section_ids() {
    let anchors: Vec<&str> = NAV_LINKS.iter().map(|l| l.href).collect();
    assert_eq!(anchors, ["#features", "#pricing"]);
    let product = FOOTER_COLUMNS.iter().find(|c| c.heading == "Product").unwrap();
    assert!(product.links.iter().any(|l| l.href == "#pricing"));
}
