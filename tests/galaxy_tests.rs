// Host-side tests for the card collection.

use galaxy_core::{AmplitudeBuffer, Galaxy, GalaxyConfig, Gallery, LayoutMode, Smoothing};

fn gallery() -> Gallery {
    Gallery::new(["a.jpg", "b.jpg", "c.jpg"])
}

fn galaxy_with(count: usize, layout: LayoutMode) -> Galaxy {
    let config = GalaxyConfig {
        count,
        layout,
        ..GalaxyConfig::default()
    };
    Galaxy::new(gallery(), &config, 42)
}

#[test]
fn new_galaxy_fills_count_from_a_cycled_gallery() {
    let g = galaxy_with(400, LayoutMode::Sphere);
    assert_eq!(g.len(), 400);
    assert_eq!(g.positions().len(), 400);
    assert_eq!(g.url_for(0), Some("a.jpg"));
    assert_eq!(g.url_for(4), Some("b.jpg"));
    assert_eq!(g.url_for(399), Some("a.jpg"));
    assert_eq!(g.url_for(400), None);
    for (i, card) in g.cards().iter().enumerate() {
        assert_eq!(card.index(), i);
    }
}

#[test]
fn empty_gallery_yields_no_cards() {
    let g = Galaxy::new(Gallery::from_manifest(" , ,"), &GalaxyConfig::default(), 1);
    assert!(g.is_empty());
    assert_eq!(g.count(), GalaxyConfig::default().count);
    assert_eq!(g.click(0), None);
}

#[test]
fn set_mode_relayouts_only_on_change() {
    let mut g = galaxy_with(50, LayoutMode::Sphere);
    let before = g.positions();
    assert!(!g.set_mode(LayoutMode::Sphere));
    assert_eq!(g.positions(), before);

    assert!(g.set_mode(LayoutMode::Wave));
    assert_eq!(g.mode(), LayoutMode::Wave);
    assert!(g.positions().iter().all(|p| p.y == 0.0));
    assert_eq!(g.len(), 50);
}

#[test]
fn mode_changes_keep_each_card_on_its_index_and_photo() {
    let mut g = galaxy_with(50, LayoutMode::Sphere);
    let urls: Vec<Option<String>> = (0..g.len())
        .map(|i| g.url_for(i).map(str::to_owned))
        .collect();
    for from in LayoutMode::ALL {
        for to in LayoutMode::ALL {
            g.set_mode(from);
            g.set_mode(to);
            assert_eq!(g.mode(), to);
            assert_eq!(g.len(), 50, "{from} -> {to}");
            for (i, card) in g.cards().iter().enumerate() {
                assert_eq!(card.index(), i, "{from} -> {to}");
                assert_eq!(g.url_for(i).map(str::to_owned), urls[i], "{from} -> {to}");
            }
        }
    }
}

#[test]
fn changing_count_keeps_surviving_card_state() {
    let mut g = galaxy_with(400, LayoutMode::Helix);
    assert!(g.set_hovered(Some(3)));
    g.tick(1.0, &AmplitudeBuffer::new());
    let scale = g.cards()[3].scale();
    assert!(scale > 1.0);

    assert!(g.set_count(100));
    assert_eq!(g.len(), 100);
    assert_eq!(g.hovered(), Some(3));
    assert!(g.cards()[3].is_hovered());
    assert_eq!(g.cards()[3].scale(), scale);

    assert!(g.set_count(150));
    assert_eq!(g.len(), 150);
    assert!(!g.cards()[120].is_hovered());
    assert!(!g.set_count(150));
}

#[test]
fn shrinking_past_the_hovered_card_clears_hover() {
    let mut g = galaxy_with(400, LayoutMode::Sphere);
    g.set_hovered(Some(300));
    g.set_count(100);
    assert_eq!(g.hovered(), None);
}

#[test]
fn hover_moves_between_cards() {
    let mut g = galaxy_with(50, LayoutMode::Sphere);
    assert!(g.set_hovered(Some(1)));
    assert!(!g.set_hovered(Some(1)));
    assert!(g.set_hovered(Some(2)));
    assert!(!g.cards()[1].is_hovered());
    assert!(g.cards()[2].is_hovered());
    // out of range counts as leaving
    assert!(g.set_hovered(Some(10_000)));
    assert_eq!(g.hovered(), None);
    assert!(!g.cards()[2].is_hovered());
}

#[test]
fn click_returns_the_card_asset() {
    let g = galaxy_with(50, LayoutMode::Donut);
    assert_eq!(g.click(2), Some("c.jpg"));
    assert_eq!(g.click(5), Some("c.jpg"));
    assert_eq!(g.click(50), None);
}

#[test]
fn tick_accumulates_time_and_drives_wave_height() {
    let mut g = galaxy_with(50, LayoutMode::Wave);
    g.set_smoothing(Smoothing::PerFrame);
    let mut amps = AmplitudeBuffer::new();
    amps.as_mut_slice().fill(255);
    for _ in 0..3 {
        g.tick(0.5, &amps);
    }
    assert!((g.elapsed_sec() - 1.5).abs() < 1e-6);
    assert!(g.transforms().all(|t| t.position.y > 0.0));
}

#[test]
fn set_radius_rescales_layout() {
    let mut g = galaxy_with(50, LayoutMode::Sphere);
    g.set_radius(6.0);
    assert_eq!(g.radius(), 6.0);
    assert!(g.positions().iter().all(|p| (p.length() - 6.0).abs() < 1e-3));
}

#[test]
fn gallery_cycles_sources_and_skips_blank_entries() {
    let g = Gallery::from_manifest("a.jpg, ,b.jpg,");
    assert_eq!(g.len(), 2);
    let slots: Vec<&str> = g.slots(5).collect();
    assert_eq!(slots, ["a.jpg", "b.jpg", "a.jpg", "b.jpg", "a.jpg"]);
    assert_eq!(g.source_index(3), Some(1));
    assert_eq!(Gallery::default().slots(5).count(), 0);
}

#[test]
fn thread_rng_generation_matches_requested_count() {
    for mode in LayoutMode::ALL {
        assert_eq!(galaxy_core::generate(mode, 30, 12.0).len(), 30);
    }
}
