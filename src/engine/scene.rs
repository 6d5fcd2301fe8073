//! Scene view state machine.
//!
//! A scene is one room photograph plus its named region outlines. Opening a
//! scene issues every region's outline fetch concurrently on worker threads;
//! the results are only ever applied by [`SceneView::pump`] on the caller's
//! thread, one at a time, so selection state never contends with loading.
//!
//! Each `open_scene` bumps a generation counter and workers tag their
//! results with the generation they were spawned under. `pump` discards any
//! result from an older generation, so switching scenes while fetches are
//! in flight can never leak stale geometry into the new scene. A region
//! whose fetch or parse fails is recorded as unavailable and simply never
//! becomes tintable; the rest of the scene is unaffected.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use image::RgbImage;
use indexmap::IndexMap;

use crate::color::{Rgb, hex_to_rgb};

use super::fetch::OutlineSource;
use super::mask::{RegionMask, rasterize_outline};
use super::outline::parse_outline;
use super::render::composite;

/// Loading status of one region's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStatus {
    /// Fetch still in flight
    Loading,
    /// Geometry parsed and rasterised; the region is tintable
    Ready,
    /// Fetch or parse failed; the region stays untintable this session
    Unavailable,
}

/// Result of one region's fetch + parse + rasterise, tagged with the
/// generation it was spawned under.
struct OutlineOutcome {
    generation: u64,
    region: String,
    mask: Option<RegionMask>,
}

/// State for the currently open scene.
struct ActiveScene {
    name: String,
    base: RgbImage,
    regions: Vec<String>,
    masks: HashMap<String, RegionMask>,
    unavailable: Vec<String>,
    settled: usize,
    selections: IndexMap<String, String>,
    generation: u64,
}

/// Interactive view of one scene at a time.
pub struct SceneView {
    source: Arc<dyn OutlineSource>,
    generation: Arc<AtomicU64>,
    sender: Sender<OutlineOutcome>,
    receiver: Receiver<OutlineOutcome>,
    scene: Option<ActiveScene>,
}

impl SceneView {
    /// Create a view over the given outline source.
    pub fn new(source: Arc<dyn OutlineSource>) -> Self {
        let (sender, receiver) = channel();
        Self {
            source,
            generation: Arc::new(AtomicU64::new(0)),
            sender,
            receiver,
            scene: None,
        }
    }

    /// Open a scene, discarding any previous scene's state and geometry.
    ///
    /// One fetch per region is issued immediately; call [`pump`] from the
    /// host loop to apply completions. The view is usable right away; it
    /// just reports loading until every region has settled.
    ///
    /// [`pump`]: SceneView::pump
    pub fn open_scene(&mut self, name: &str, base: RgbImage, regions: &[&str]) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (width, height) = base.dimensions();

        log::info!(
            "Opening scene '{}' ({}x{}, {} regions, generation {})",
            name,
            width,
            height,
            regions.len(),
            generation
        );

        self.scene = Some(ActiveScene {
            name: name.to_string(),
            base,
            regions: regions.iter().map(|r| r.to_string()).collect(),
            masks: HashMap::new(),
            unavailable: Vec::new(),
            settled: 0,
            selections: IndexMap::new(),
            generation,
        });

        for region in regions {
            let source = Arc::clone(&self.source);
            let sender = self.sender.clone();
            let scene = name.to_string();
            let region = region.to_string();
            thread::spawn(move || {
                let mask = match source
                    .fetch(&scene, &region)
                    .and_then(|doc| parse_outline(&region, &doc))
                {
                    Ok(outline) => Some(rasterize_outline(&outline, width, height)),
                    Err(e) => {
                        log::warn!("Region '{}' of scene '{}' unavailable: {}", region, scene, e);
                        None
                    }
                };
                // The receiver may already be gone; a failed send is fine
                let _ = sender.send(OutlineOutcome {
                    generation,
                    region,
                    mask,
                });
            });
        }
    }

    /// Close the current scene, discarding selections and geometry.
    pub fn close_scene(&mut self) {
        // Bump the generation so in-flight results get dropped on arrival
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.scene = None;
    }

    /// Apply settled outline results, one at a time.
    ///
    /// Returns the number of results applied to the current scene; results
    /// from a previous generation are discarded, not applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.receiver.try_recv() {
            let Some(scene) = self.scene.as_mut() else {
                continue;
            };
            if outcome.generation != scene.generation {
                log::debug!(
                    "Discarding stale outline result for '{}' (generation {} != {})",
                    outcome.region,
                    outcome.generation,
                    scene.generation
                );
                continue;
            }
            scene.settled += 1;
            match outcome.mask {
                Some(mask) => {
                    scene.masks.insert(outcome.region, mask);
                }
                None => scene.unavailable.push(outcome.region),
            }
            applied += 1;
        }
        applied
    }

    /// Whether region geometry is still loading.
    ///
    /// Hosts should show a non-blocking loading indication while this is
    /// true instead of presenting a partially-tinted scene.
    pub fn is_loading(&self) -> bool {
        self.scene
            .as_ref()
            .is_some_and(|scene| scene.settled < scene.regions.len())
    }

    /// Name of the open scene, if any.
    pub fn scene_name(&self) -> Option<&str> {
        self.scene.as_ref().map(|scene| scene.name.as_str())
    }

    /// Loading status of a region, or `None` for unknown regions.
    pub fn region_status(&self, region: &str) -> Option<RegionStatus> {
        let scene = self.scene.as_ref()?;
        if !scene.regions.iter().any(|r| r == region) {
            return None;
        }
        Some(if scene.masks.contains_key(region) {
            RegionStatus::Ready
        } else if scene.unavailable.iter().any(|r| r == region) {
            RegionStatus::Unavailable
        } else {
            RegionStatus::Loading
        })
    }

    /// Regions whose geometry is ready for tinting.
    pub fn tintable_regions(&self) -> Vec<&str> {
        let Some(scene) = self.scene.as_ref() else {
            return Vec::new();
        };
        scene
            .regions
            .iter()
            .map(String::as_str)
            .filter(|region| scene.masks.contains_key(*region))
            .collect()
    }

    /// Select a colour for a region. Synchronous local mutation, no I/O.
    ///
    /// Returns false when no scene is open or the region is unknown. Picks
    /// made while geometry is still loading are kept and take effect as
    /// soon as the region's mask lands.
    pub fn pick_color(&mut self, region: &str, hex: &str) -> bool {
        let Some(scene) = self.scene.as_mut() else {
            return false;
        };
        if !scene.regions.iter().any(|r| r == region) {
            log::warn!("Ignoring colour pick for unknown region '{}'", region);
            return false;
        }
        scene.selections.insert(region.to_string(), hex.to_string());
        true
    }

    /// Remove the selection for one region.
    pub fn clear_selection(&mut self, region: &str) {
        if let Some(scene) = self.scene.as_mut() {
            scene.selections.shift_remove(region);
        }
    }

    /// Reset all selections for the open scene.
    pub fn reset_selections(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.selections.clear();
        }
    }

    /// Current selections as (region, hex) pairs in pick order.
    pub fn selections(&self) -> Vec<(&str, &str)> {
        let Some(scene) = self.scene.as_ref() else {
            return Vec::new();
        };
        scene
            .selections
            .iter()
            .map(|(region, hex)| (region.as_str(), hex.as_str()))
            .collect()
    }

    /// Render the scene: base photograph with every selected, ready region
    /// tinted. Returns `None` when no scene is open.
    ///
    /// An unparseable selection hex degrades to a white tint, which
    /// multiplies to a visible no-op rather than an error.
    pub fn render(&self) -> Option<RgbImage> {
        let scene = self.scene.as_ref()?;
        let layers: Vec<(&RegionMask, Rgb)> = scene
            .selections
            .iter()
            .filter_map(|(region, hex)| {
                scene.masks.get(region).map(|mask| {
                    let tint = hex_to_rgb(hex).unwrap_or(Rgb::new(255, 255, 255));
                    (mask, tint)
                })
            })
            .collect();
        Some(composite(&scene.base, &layers))
    }
}
