use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::future::Future;

pub const DEFAULT_TITLE: &str = "World Scenic Wonders";

pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_DEVELOPER: &str = "data-developer";
pub const ATTR_SPOTS_URL: &str = "data-spots-url";

/// One location record. Every field may be missing, null or of the wrong
/// type in the source data; such fields fall back to blank / zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spot {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_degrees")]
    pub lat: f32,
    #[serde(deserialize_with = "lenient_degrees")]
    pub lon: f32,
    #[serde(deserialize_with = "lenient_text")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient_text")]
    pub desc_en: String,
    #[serde(deserialize_with = "lenient_text")]
    pub desc_zh: String,
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Numbers and numeric strings are accepted; anything else reads as 0.
fn lenient_degrees<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
    let v = match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64().map(|v| v as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    };
    Ok(v.filter(|v| v.is_finite()).unwrap_or(0.0))
}

#[derive(Debug, thiserror::Error)]
pub enum SpotsError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid spots JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON array of spots. Only a body that is not an array is an
/// error; see [`spots_from_values`] for per-entry handling.
pub fn parse_spots_json(text: &str) -> Result<Vec<Spot>, SpotsError> {
    let items: Vec<Value> = serde_json::from_str(text)?;
    Ok(spots_from_values(items))
}

/// Convert raw array entries into spots. Entries that are not objects are
/// skipped with a warning; bad fields inside an object only blank that field.
pub fn spots_from_values(items: Vec<Value>) -> Vec<Spot> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match Spot::deserialize(item) {
            Ok(spot) => Some(spot),
            Err(e) => {
                log::warn!("[spots] skipping entry {}: {}", i, e);
                None
            }
        })
        .collect()
}

/// Widget configuration read from the container's attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobeConfig {
    pub title: String,
    pub developer_name: String,
    pub spots_url: Option<String>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            developer_name: String::new(),
            spots_url: None,
        }
    }
}

impl GlobeConfig {
    /// Empty attribute values count as absent.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Self {
        let attr = |name: &str| get(name).filter(|v| !v.trim().is_empty());
        Self {
            title: attr(ATTR_TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            developer_name: attr(ATTR_DEVELOPER).unwrap_or_default(),
            spots_url: attr(ATTR_SPOTS_URL),
        }
    }

    pub fn attribution(&self) -> Option<String> {
        (!self.developer_name.is_empty()).then(|| format!("By {}", self.developer_name))
    }
}

/// Pick the data set: inline data wins, then the remote URL, then the demo
/// set. A failed fetch falls back to the demo set.
pub async fn resolve_spots<F, Fut>(
    inline: Option<Vec<Spot>>,
    spots_url: Option<&str>,
    fetch: F,
) -> Vec<Spot>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Vec<Spot>, SpotsError>>,
{
    if let Some(spots) = inline {
        log::info!("[spots] using {} inline spots", spots.len());
        return spots;
    }
    if let Some(url) = spots_url {
        return match fetch(url.to_string()).await {
            Ok(spots) => {
                log::info!("[spots] fetched {} spots from {}", spots.len(), url);
                spots
            }
            Err(e) => {
                log::warn!("[spots] fetch of {} failed ({}); using demo set", url, e);
                demo_spots()
            }
        };
    }
    demo_spots()
}

fn spot(name: &str, lat: f32, lon: f32, image_url: &str, desc_en: &str, desc_zh: &str) -> Spot {
    Spot {
        name: name.to_string(),
        lat,
        lon,
        image_url: image_url.to_string(),
        desc_en: desc_en.to_string(),
        desc_zh: desc_zh.to_string(),
    }
}

/// Built-in fallback data set.
pub fn demo_spots() -> Vec<Spot> {
    vec![
        spot(
            "Great Wall of China",
            40.4319,
            116.5704,
            "https://upload.wikimedia.org/wikipedia/commons/2/23/The_Great_Wall_of_China_at_Jinshanling-edit.jpg",
            "A series of fortifications stretching thousands of kilometres across northern China.",
            "横跨中国北方数千公里的古代防御工程。",
        ),
        spot(
            "Machu Picchu",
            -13.1631,
            -72.5450,
            "https://upload.wikimedia.org/wikipedia/commons/e/eb/Machu_Picchu%2C_Peru.jpg",
            "A 15th-century Inca citadel high in the Andes of Peru.",
            "位于秘鲁安第斯山脉的十五世纪印加古城。",
        ),
        spot(
            "Grand Canyon",
            36.1069,
            -112.1129,
            "https://upload.wikimedia.org/wikipedia/commons/a/aa/Dawn_on_the_S_rim_of_the_Grand_Canyon_%288645178272%29.jpg",
            "A steep-sided canyon carved by the Colorado River in Arizona.",
            "科罗拉多河在亚利桑那州切割出的壮丽峡谷。",
        ),
        spot(
            "Mount Fuji",
            35.3606,
            138.7274,
            "https://upload.wikimedia.org/wikipedia/commons/1/1b/080103_hakkai_fuji.jpg",
            "Japan's highest mountain, an active stratovolcano on Honshu.",
            "日本最高峰，本州岛上的活火山。",
        ),
        spot(
            "Santorini",
            36.3932,
            25.4615,
            "https://upload.wikimedia.org/wikipedia/commons/3/3f/Santorini_Oia.jpg",
            "A volcanic island in the Aegean Sea known for its white villages.",
            "爱琴海上的火山岛，以白色村庄闻名。",
        ),
        spot(
            "Victoria Falls",
            -17.9243,
            25.8572,
            "https://upload.wikimedia.org/wikipedia/commons/6/6b/Victoria_Falls.jpg",
            "One of the largest waterfalls in the world, on the Zambezi River.",
            "位于赞比西河上的世界最大瀑布之一。",
        ),
        spot(
            "Great Barrier Reef",
            -18.2871,
            147.6992,
            "https://upload.wikimedia.org/wikipedia/commons/6/6b/Great_Barrier_Reef.jpg",
            "The world's largest coral reef system, off Queensland, Australia.",
            "澳大利亚昆士兰州外海的世界最大珊瑚礁群。",
        ),
        spot(
            "Northern Lights, Tromsø",
            69.6492,
            18.9553,
            "https://upload.wikimedia.org/wikipedia/commons/a/aa/Polarlicht_2.jpg",
            "A prime spot above the Arctic Circle for watching the aurora.",
            "北极圈内观赏极光的绝佳地点。",
        ),
    ]
}
