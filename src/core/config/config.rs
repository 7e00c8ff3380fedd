use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Drift Banner".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}
impl SpawnRange<f32> {
    /// Uniform sample; degenerate ranges (min >= max) yield `min`.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> f32 {
        if self.min < self.max {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BubbleConfig {
    /// Viewport area (px^2) per floating bubble; count = round(area / this) + 1.
    pub area_per_bubble: f32,
    pub radius_range: SpawnRange<f32>,
    /// Per-step drag factor in [0, 1); converted to Rapier's per-second
    /// linear damping at spawn.
    pub air_friction: f32,
}
impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            area_per_bubble: 50_000.0,
            radius_range: SpawnRange {
                min: 50.0,
                max: 100.0,
            },
            air_friction: 0.03,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Coalescing window for wheel input (ms).
    pub throttle_ms: u64,
    /// Scroll delta (px) divided by this before scaling the kicks.
    pub distance_divisor: f32,
    pub kick_x: SpawnRange<f32>,
    pub kick_y: SpawnRange<f32>,
    /// Pixels per line-unit wheel event.
    pub line_height: f32,
}
impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 50,
            distance_divisor: 50.0,
            kick_x: SpawnRange {
                min: -0.5,
                max: 0.5,
            },
            kick_y: SpawnRange { min: 0.5, max: 1.5 },
            line_height: 40.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MagnetConfig {
    /// Coalescing window for button offset sync after physics steps (ms).
    pub throttle_ms: u64,
    /// Displacements with both axes below this (px) snap the button back to
    /// its base position.
    pub rest_epsilon: f32,
    /// Spring pull toward the rest point, 1/s^2.
    pub stiffness: f32,
    /// Velocity damping applied with the spring, 1/s.
    pub damping: f32,
    /// Button center as fractions of the viewport.
    pub center_x: f32,
    pub center_y: f32,
    pub button_width: f32,
    pub button_height: f32,
    pub label: String,
}
impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 100,
            rest_epsilon: 0.1,
            stiffness: 3.6,
            damping: 6.0,
            center_x: 0.5,
            center_y: 0.5,
            button_width: 120.0,
            button_height: 48.0,
            label: "Buy".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ResizeConfig {
    /// Coalescing window for window-resize events (ms).
    pub throttle_ms: u64,
}
impl Default for ResizeConfig {
    fn default() -> Self {
        Self { throttle_ms: 400 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct BannerConfig {
    pub window: WindowConfig,
    pub bubbles: BubbleConfig,
    pub scroll: ScrollConfig,
    pub magnet: MagnetConfig,
    pub resize: ResizeConfig,
    pub rapier_debug: bool,
}
impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            bubbles: Default::default(),
            scroll: Default::default(),
            magnet: Default::default(),
            resize: Default::default(),
            rapier_debug: false,
        }
    }
}

/// What the layered loader did at startup, kept around so a logging system can
/// report it once the log backend exists.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

impl BannerConfig {
    // Single-file helpers retained for tools & tests; the layered loader is
    // the production startup path.
    #[allow(dead_code)]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    #[allow(dead_code)]
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep
    /// merge). Missing files are skipped; returns
    /// (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        if let Some(val) = merged {
            match val.clone().into_rust::<BannerConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (BannerConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (BannerConfig::default(), used, errors)
        }
    }

    /// Validate the configuration returning a list of human-readable warning
    /// strings. These represent suspicious / potentially unintended values but
    /// are not hard errors. Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width * self.window.height > 10_000_000.0 {
            w.push(format!(
                "very large window area: {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }

        if self.bubbles.area_per_bubble <= 0.0 {
            w.push("bubbles.area_per_bubble must be > 0".into());
        } else if self.bubbles.area_per_bubble < 1_000.0 {
            w.push(format!(
                "bubbles.area_per_bubble {} very small; spawns a huge bubble count",
                self.bubbles.area_per_bubble
            ));
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!(
                    "{label} min ({}) greater than max ({})",
                    r.min, r.max
                ));
            }
            if (r.max - r.min).abs() < f32::EPSILON {
                w.push(format!("{label} min == max ({}) -> zero variation", r.min));
            }
        }
        check_range_f32(&mut w, "bubbles.radius_range", &self.bubbles.radius_range);
        if self.bubbles.radius_range.min <= 0.0 {
            w.push("bubbles.radius_range.min must be > 0".into());
        }
        if !(0.0..1.0).contains(&self.bubbles.air_friction) {
            w.push(format!(
                "bubbles.air_friction {} outside 0..1 (per-step drag factor)",
                self.bubbles.air_friction
            ));
        }

        if self.scroll.throttle_ms == 0 {
            w.push("scroll.throttle_ms is 0; wheel bursts are not coalesced".into());
        }
        if self.scroll.distance_divisor <= 0.0 {
            w.push("scroll.distance_divisor must be > 0".into());
        }
        if self.scroll.line_height <= 0.0 {
            w.push("scroll.line_height must be > 0".into());
        }
        check_range_f32(&mut w, "scroll.kick_x", &self.scroll.kick_x);
        check_range_f32(&mut w, "scroll.kick_y", &self.scroll.kick_y);

        if self.magnet.throttle_ms == 0 {
            w.push("magnet.throttle_ms is 0; button syncs on every physics step".into());
        }
        if self.magnet.rest_epsilon < 0.0 {
            w.push("magnet.rest_epsilon negative -> button never snaps to rest".into());
        }
        if self.magnet.stiffness <= 0.0 {
            w.push("magnet.stiffness must be > 0 (anchor would drift away)".into());
        }
        if self.magnet.damping < 0.0 {
            w.push("magnet.damping negative -> anchor oscillation grows".into());
        } else if self.magnet.damping == 0.0 {
            w.push("magnet.damping is 0; anchor oscillates indefinitely".into());
        }
        if !(0.0..=1.0).contains(&self.magnet.center_x)
            || !(0.0..=1.0).contains(&self.magnet.center_y)
        {
            w.push(format!(
                "magnet.center ({}, {}) outside 0..=1 viewport fractions",
                self.magnet.center_x, self.magnet.center_y
            ));
        }
        if self.magnet.button_width <= 0.0 || self.magnet.button_height <= 0.0 {
            w.push("magnet button dimensions must be > 0".into());
        }
        if self.magnet.label.is_empty() {
            w.push("magnet.label empty; button renders without text".into());
        }

        if self.resize.throttle_ms == 0 {
            w.push("resize.throttle_ms is 0; every resize event rebuilds the scene".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            bubbles: (
                area_per_bubble: 40000.0,
                radius_range: (min: 10.0, max: 20.0),
                air_friction: 0.05,
            ),
            scroll: (
                throttle_ms: 40,
                distance_divisor: 25.0,
                kick_x: (min: -1.0, max: 1.0),
                kick_y: (min: 0.0, max: 2.0),
                line_height: 16.0,
            ),
            magnet: (
                throttle_ms: 80,
                rest_epsilon: 0.2,
                stiffness: 2.0,
                damping: 4.0,
                center_x: 0.5,
                center_y: 0.4,
                button_width: 100.0,
                button_height: 40.0,
                label: "Go",
            ),
            resize: (throttle_ms: 300),
            rapier_debug: false,
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = BannerConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.bubbles.area_per_bubble, 40_000.0);
        assert_eq!(cfg.scroll.throttle_ms, 40);
        assert_eq!(cfg.magnet.label, "Go");
        assert_eq!(cfg.resize.throttle_ms, 300);
        assert!((cfg.magnet.rest_epsilon - 0.2).abs() < 1e-6);
        // Should produce no warnings for the nominal sample config
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config"
        );
    }

    #[test]
    fn validate_detects_warnings() {
        // Intentionally craft a config with multiple issues
        let bad = BannerConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
                auto_close: -5.0,
            },
            bubbles: BubbleConfig {
                area_per_bubble: 0.0,
                radius_range: SpawnRange { min: 0.0, max: 0.0 }, // zero + invalid min
                air_friction: 1.2,
            },
            scroll: ScrollConfig {
                throttle_ms: 0,
                distance_divisor: 0.0,
                kick_x: SpawnRange {
                    min: 1.0,
                    max: -1.0,
                }, // inverted
                kick_y: SpawnRange { min: 0.5, max: 0.5 }, // zero variation
                line_height: 0.0,
            },
            magnet: MagnetConfig {
                throttle_ms: 0,
                rest_epsilon: -0.1,
                stiffness: 0.0,
                damping: -1.0,
                center_x: 1.5,
                center_y: 0.5,
                button_width: 0.0,
                button_height: 40.0,
                label: String::new(),
            },
            resize: ResizeConfig { throttle_ms: 0 },
            rapier_debug: false,
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose -5 negative"));
        assert!(joined.contains("bubbles.area_per_bubble must be > 0"));
        assert!(joined.contains("bubbles.radius_range.min must be > 0"));
        assert!(joined.contains("bubbles.radius_range min == max"));
        assert!(joined.contains("bubbles.air_friction 1.2 outside 0..1"));
        assert!(joined.contains("scroll.distance_divisor must be > 0"));
        assert!(joined.contains("scroll.kick_x min (1"));
        assert!(joined.contains("magnet.stiffness must be > 0"));
        assert!(joined.contains("magnet.damping negative"));
        assert!(joined.contains("magnet.center (1.5, 0.5)"));
        assert!(joined.contains("magnet button dimensions must be > 0"));
        assert!(
            warnings.len() >= 14,
            "expected many warnings, got {}: {joined}",
            warnings.len()
        );
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = BannerConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        // Defaults applied
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r"(
            window: (width: 900.0),
            bubbles: (area_per_bubble: 30000.0),
            scroll: (distance_divisor: 10.0),
        )";
        let override_one = r#"(
            window: (title: "Custom Title"),
            scroll: (distance_divisor: 75.0),
        )"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(override_one.as_bytes()).unwrap();
        let (cfg, used, errors) = BannerConfig::load_layered([f1.path(), f2.path()]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 900.0); // from base
        assert_eq!(cfg.window.title, "Custom Title"); // overridden
        assert_eq!(cfg.bubbles.area_per_bubble, 30_000.0); // from base
        assert_eq!(cfg.scroll.distance_divisor, 75.0); // overridden
                                                       // Height default still present
        assert_eq!(cfg.window.height, WindowConfig::default().height);
    }

    #[test]
    fn missing_layers_fall_back_to_defaults() {
        let (cfg, used, errors) =
            BannerConfig::load_layered(["nope/banner.ron", "nope/banner.local.ron"]);
        assert!(used.is_empty());
        assert_eq!(errors.len(), 2);
        assert_eq!(cfg, BannerConfig::default());
    }

    #[test]
    fn parse_autoclose_and_validate() {
        let sample = r"(window: (autoClose: 3.25))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = BannerConfig::load_from_file(file.path()).expect("parse config");
        assert!((cfg.window.auto_close - 3.25).abs() < 1e-6);
        // negative -> warning
        let neg_sample = r"(window: (autoClose: -5.0))";
        let mut file2 = tempfile::NamedTempFile::new().unwrap();
        file2.write_all(neg_sample.as_bytes()).unwrap();
        let cfg2 = BannerConfig::load_from_file(file2.path()).expect("parse config");
        assert!(
            cfg2.validate()
                .iter()
                .any(|w| w.contains("window.autoClose")),
            "expected warning for negative autoClose"
        );
    }

    #[test]
    fn degenerate_range_samples_min() {
        let mut rng = rand::thread_rng();
        let r = SpawnRange {
            min: 7.0_f32,
            max: 7.0,
        };
        assert_eq!(r.sample(&mut rng), 7.0);
        let inverted = SpawnRange {
            min: 5.0_f32,
            max: 1.0,
        };
        assert_eq!(inverted.sample(&mut rng), 5.0);
    }
}
