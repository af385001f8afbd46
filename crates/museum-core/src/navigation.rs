//! Carousel position and the per-card values derived from it.
//!
//! Position 0 sits just before the first exhibit, so the first piece is one
//! step forward from the entrance. Every visual quantity is a function of the
//! distance `|exhibit.position - position|` only.

use crate::config::GalleryConfig;
use crate::constants::{BASE_Z_INDEX, OPACITY_BY_DISTANCE, SCALE_BY_DISTANCE};
use crate::error::{GalleryError, GalleryResult};
use crate::exhibit::{Catalog, Exhibit};
use glam::Vec2;
use smallvec::SmallVec;

/// Direction of a single carousel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Render inputs for one visible card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout<'a> {
    pub exhibit: &'a Exhibit,
    /// x: horizontal offset from the centre (negative is left), y: downward lift.
    pub offset: Vec2,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    /// Only the centred card opens the detail view.
    pub selectable: bool,
}

pub type CardLayouts<'a> = SmallVec<[CardLayout<'a>; 5]>;

#[inline]
pub fn distance(exhibit_position: u32, position: u32) -> u32 {
    exhibit_position.abs_diff(position)
}

/// Card scale: 1.0 centred, 0.7 one step away, 0.4 two steps, 0.0 beyond.
#[inline]
pub fn scale_for(exhibit_position: u32, position: u32) -> f32 {
    let d = distance(exhibit_position, position) as usize;
    SCALE_BY_DISTANCE.get(d).copied().unwrap_or(0.0)
}

/// Card opacity: 1.0 centred, 0.6 one step away, 0.3 two steps, 0.0 beyond.
#[inline]
pub fn opacity_for(exhibit_position: u32, position: u32) -> f32 {
    let d = distance(exhibit_position, position) as usize;
    OPACITY_BY_DISTANCE.get(d).copied().unwrap_or(0.0)
}

/// Horizontal offset; linear in the signed relative position so cards read
/// left to right in display order.
#[inline]
pub fn offset_for(exhibit_position: u32, position: u32, spacing_px: f32) -> f32 {
    (exhibit_position as i64 - position as i64) as f32 * spacing_px
}

#[derive(Clone, Debug)]
pub struct Navigator {
    position: u32,
    max_position: u32,
    visibility_radius: u32,
    card_spacing_px: f32,
    card_lift_px: f32,
}

impl Navigator {
    pub fn new(max_position: u32, config: &GalleryConfig) -> Self {
        Self {
            position: 0,
            max_position,
            visibility_radius: config.visibility_radius,
            card_spacing_px: config.card_spacing_px,
            card_lift_px: config.card_lift_px,
        }
    }

    pub fn for_catalog(catalog: &Catalog, config: &GalleryConfig) -> Self {
        Self::new(catalog.max_position(), config)
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn max_position(&self) -> u32 {
        self.max_position
    }

    pub fn can_move_forward(&self) -> bool {
        self.position < self.max_position
    }

    pub fn can_move_backward(&self) -> bool {
        self.position > 0
    }

    /// Take one step, failing with `OutOfRangeNavigation` at either end.
    pub fn step(&mut self, direction: Direction) -> GalleryResult<u32> {
        let attempted = match direction {
            Direction::Forward => self.position as i64 + 1,
            Direction::Backward => self.position as i64 - 1,
        };
        if attempted < 0 || attempted > self.max_position as i64 {
            return Err(GalleryError::OutOfRangeNavigation {
                attempted,
                max: self.max_position,
            });
        }
        self.position = attempted as u32;
        Ok(self.position)
    }

    /// Step forward; inert at the last slot. Returns whether the position changed.
    pub fn move_forward(&mut self) -> bool {
        self.step_or_absorb(Direction::Forward)
    }

    /// Step backward; inert at the entrance. Returns whether the position changed.
    pub fn move_backward(&mut self) -> bool {
        self.step_or_absorb(Direction::Backward)
    }

    fn step_or_absorb(&mut self, direction: Direction) -> bool {
        match self.step(direction) {
            Ok(position) => {
                log::info!("[nav] {:?} -> position {}", direction, position);
                true
            }
            Err(e) => {
                log::debug!("[nav] ignored: {}", e);
                false
            }
        }
    }

    pub fn is_visible(&self, exhibit: &Exhibit) -> bool {
        distance(exhibit.position, self.position) <= self.visibility_radius
    }

    pub fn is_selectable(&self, exhibit: &Exhibit) -> bool {
        exhibit.position == self.position
    }

    /// Exhibits within the visibility radius, ascending by display position.
    pub fn visible_exhibits<'a>(&self, catalog: &'a Catalog) -> SmallVec<[&'a Exhibit; 5]> {
        catalog.iter().filter(|e| self.is_visible(e)).collect()
    }

    /// The exhibit at the centre of the viewport, if any.
    pub fn centred<'a>(&self, catalog: &'a Catalog) -> Option<&'a Exhibit> {
        catalog.at_position(self.position)
    }

    pub fn card_layout<'a>(&self, exhibit: &'a Exhibit) -> CardLayout<'a> {
        let d = distance(exhibit.position, self.position);
        CardLayout {
            exhibit,
            offset: Vec2::new(
                offset_for(exhibit.position, self.position, self.card_spacing_px),
                d as f32 * self.card_lift_px,
            ),
            scale: scale_for(exhibit.position, self.position),
            opacity: opacity_for(exhibit.position, self.position),
            z_index: BASE_Z_INDEX - d as i32,
            selectable: self.is_selectable(exhibit),
        }
    }

    pub fn card_layouts<'a>(&self, catalog: &'a Catalog) -> CardLayouts<'a> {
        self.visible_exhibits(catalog)
            .into_iter()
            .map(|e| self.card_layout(e))
            .collect()
    }
}
