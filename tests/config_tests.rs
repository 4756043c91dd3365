// Host-side tests for start-up configuration.

use galaxy_core::{GalaxyConfig, GalaxyError, LayoutMode, Smoothing, DEFAULT_AUDIO_URL};

#[test]
fn defaults_match_the_initial_scene() {
    let c = GalaxyConfig::default();
    assert_eq!(c.layout, LayoutMode::Sphere);
    assert_eq!(c.count, 400);
    assert_eq!(c.radius, 12.0);
    assert_eq!(c.smoothing, Smoothing::TimeNormalized);
    assert_eq!(c.audio_url, DEFAULT_AUDIO_URL);
}

#[test]
fn clamp_count_snaps_to_slider_steps() {
    let cases = [
        (0, 50),
        (49, 50),
        (74, 50),
        (75, 100),
        (420, 400),
        (430, 450),
        (1000, 1000),
        (5000, 1000),
        (usize::MAX, 1000),
    ];
    for (input, expected) in cases {
        assert_eq!(GalaxyConfig::clamp_count(input), expected, "input {input}");
    }
}

#[test]
fn apply_param_parses_each_key() {
    let mut c = GalaxyConfig::default();
    c.apply_param("layout", "Heart").unwrap();
    c.apply_param("count", " 620 ").unwrap();
    c.apply_param("radius", "8.5").unwrap();
    c.apply_param("smoothing", "frame").unwrap();
    c.apply_param("audio", "media/song.ogg").unwrap();
    assert_eq!(c.layout, LayoutMode::Heart);
    assert_eq!(c.count, 600);
    assert_eq!(c.radius, 8.5);
    assert_eq!(c.smoothing, Smoothing::PerFrame);
    assert_eq!(c.audio_url, "media/song.ogg");
}

#[test]
fn huge_count_from_the_query_clamps_to_the_maximum() {
    let mut c = GalaxyConfig::default();
    c.apply_param("count", &usize::MAX.to_string()).unwrap();
    assert_eq!(c.count, 1000);
}

#[test]
fn apply_param_rejects_bad_values() {
    let mut c = GalaxyConfig::default();
    for (k, v) in [
        ("layout", "spiral"),
        ("count", "many"),
        ("radius", "-1"),
        ("radius", "NaN"),
        ("smoothing", "fast"),
        ("audio", "  "),
        ("volume", "11"),
    ] {
        assert_eq!(
            c.apply_param(k, v),
            Err(GalaxyError::invalid_param(k, v)),
            "{k}={v}"
        );
    }
    assert_eq!(c, GalaxyConfig::default());
}

#[test]
fn apply_params_skips_bad_pairs_and_keeps_good_ones() {
    let mut c = GalaxyConfig::default();
    c.apply_params([("layout", "wave"), ("count", "lots"), ("radius", "20")]);
    assert_eq!(c.layout, LayoutMode::Wave);
    assert_eq!(c.count, 400);
    assert_eq!(c.radius, 20.0);
}

#[test]
fn every_known_key_is_accepted() {
    let sample = |k: &str| match k {
        "layout" => "donut",
        "count" => "200",
        "radius" => "5",
        "smoothing" => "time",
        _ => "x.mp3",
    };
    let mut c = GalaxyConfig::default();
    for k in GalaxyConfig::KEYS {
        assert!(c.apply_param(k, sample(k)).is_ok(), "{k}");
    }
}
