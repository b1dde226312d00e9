//! Biome palette and angular surface regions.
//!
//! A planet's surface is split into contiguous angular slices, each tagged with a biome.
//! Together the slices always tile the full circle: region `i` ends where region `i + 1`
//! starts and the last region ends at exactly 360°.

use engine_core::{angle_in_arc, Color};
use rand::prelude::*;

/// Surface biome of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    Forest,
    Desert,
    Ocean,
    Mountain,
    Tundra,
    Volcanic,
    Plains,
    Swamp,
}

impl Biome {
    /// Every biome, in palette order.
    pub const ALL: [Biome; 8] = [
        Biome::Forest,
        Biome::Desert,
        Biome::Ocean,
        Biome::Mountain,
        Biome::Tundra,
        Biome::Volcanic,
        Biome::Plains,
        Biome::Swamp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Biome::Forest => "Forest",
            Biome::Desert => "Desert",
            Biome::Ocean => "Ocean",
            Biome::Mountain => "Mountain",
            Biome::Tundra => "Tundra",
            Biome::Volcanic => "Volcanic",
            Biome::Plains => "Plains",
            Biome::Swamp => "Swamp",
        }
    }

    /// Terrain color used for the overhead texture and the ground view.
    pub fn color(&self) -> Color {
        match self {
            Biome::Forest => Color::GREEN,
            Biome::Desert => Color::YELLOW,
            Biome::Ocean => Color::BLUE,
            Biome::Mountain => Color::GRAY,
            Biome::Tundra => Color::WHITE,
            Biome::Volcanic => Color::RED,
            Biome::Plains => Color::rgb(144, 238, 144),
            Biome::Swamp => Color::rgb(85, 107, 47),
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An angular slice `[start_angle, end_angle)` of a planet's surface, in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub biome: Biome,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl Region {
    pub fn color(&self) -> Color {
        self.biome.color()
    }

    /// Angular extent in degrees. A region whose start and end coincide covers the whole circle.
    pub fn span(&self) -> f32 {
        let span = (self.end_angle - self.start_angle).rem_euclid(360.0);
        if span == 0.0 {
            360.0
        } else {
            span
        }
    }

    /// Whether a surface angle (already in `[0, 360)`) falls inside this region.
    pub fn contains_angle(&self, angle: f32) -> bool {
        if self.span() >= 360.0 {
            return true;
        }
        let end = if self.end_angle >= 360.0 { 360.0 } else { self.end_angle };
        angle_in_arc(angle, self.start_angle, end)
    }
}

/// Generate `count` regions from the full biome palette.
pub fn generate_regions(count: usize, rng: &mut impl Rng) -> Vec<Region> {
    generate_regions_from(count, &Biome::ALL, rng)
}

/// Generate `count` regions tiling `[0, 360)`, choosing biomes from `palette`.
///
/// Consecutive regions never share a biome unless the palette has a single entry.
/// Slice widths are drawn with ±20% jitter, then every boundary is re-derived from the
/// nominal step so the result is contiguous regardless of the jitter.
pub fn generate_regions_from(count: usize, palette: &[Biome], rng: &mut impl Rng) -> Vec<Region> {
    if count == 0 || palette.is_empty() {
        return Vec::new();
    }

    let step = 360.0 / count as f32;
    let mut regions = Vec::with_capacity(count);
    let mut last_biome: Option<Biome> = None;
    let mut current = 0.0_f32;

    for i in 0..count {
        let start = current;
        let slice = step + rng.gen_range(-step * 0.2..=step * 0.2);
        let end = if i == count - 1 { 360.0 } else { start + slice };
        current = end;

        let mut biome = palette[rng.gen_range(0..palette.len())];
        if palette.len() > 1 && Some(biome) == last_biome {
            let others: Vec<Biome> = palette.iter().copied().filter(|b| Some(*b) != last_biome).collect();
            if !others.is_empty() {
                biome = others[rng.gen_range(0..others.len())];
            }
        }
        last_biome = Some(biome);

        let wrapped_end = end.rem_euclid(360.0);
        regions.push(Region {
            biome,
            start_angle: start.rem_euclid(360.0),
            end_angle: if wrapped_end == 0.0 { 360.0 } else { wrapped_end },
        });
    }

    normalize_regions(&mut regions, step);
    regions
}

/// Re-derive boundaries from the nominal step so the regions tile the circle exactly.
fn normalize_regions(regions: &mut [Region], step: f32) {
    let count = regions.len();
    for i in 0..count {
        if i > 0 {
            regions[i].start_angle = regions[i - 1].end_angle.rem_euclid(360.0);
        }
        if i < count - 1 {
            let start = regions[i].start_angle;
            let end = (start + step).rem_euclid(360.0);
            regions[i].end_angle = if end == 0.0 && start != 0.0 { 360.0 } else { end };
        } else {
            regions[i].end_angle = 360.0;
        }
    }

    // Snap float seams at the ends of the circle.
    if let Some(last) = regions.last_mut() {
        if last.end_angle > 359.9 && last.end_angle < 360.01 {
            last.end_angle = 360.0;
        }
    }
    if let Some(first) = regions.first_mut() {
        if first.start_angle > -0.01 && first.start_angle < 0.01 {
            first.start_angle = 0.0;
        }
    }
}

/// Index of the region containing `angle`, if any.
pub fn region_at_angle(regions: &[Region], angle: f32) -> Option<usize> {
    regions.iter().position(|r| r.contains_angle(angle))
}
