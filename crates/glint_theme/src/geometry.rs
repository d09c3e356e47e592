//! Transition geometry table
//!
//! Static visual parameters per origin corner: the clip-path reveal of the
//! full-screen overlay, where the glow sits, and the particle ring that
//! radiates from it. Pure data; drawing is left to the renderer.

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use glint_animation::Easing;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ThemeError;

/// Distance the glow sits beyond each adjacent viewport edge
const GLOW_INSET_PX: f32 = -100.0;
const GLOW_SIZE_PX: f32 = 200.0;
/// Radius that covers the viewport from any corner
const REVEAL_COVER_PCT: f32 = 150.0;

const PARTICLE_RING: ParticleRing = ParticleRing {
    count: 8,
    distance_px: 100.0,
    size_px: 4.0,
};

/// Screen corner a transition grows from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopRight,
        Corner::TopLeft,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::TopRight => "top-right",
            Corner::TopLeft => "top-left",
            Corner::BottomRight => "bottom-right",
            Corner::BottomLeft => "bottom-left",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corner {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Corner::ALL
            .into_iter()
            .find(|corner| corner.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownCorner(s.to_string()))
    }
}

/// `circle(<radius>% at <x>% <y>%)` clip shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClipCircle {
    pub radius_pct: f32,
    pub center_x_pct: f32,
    pub center_y_pct: f32,
}

impl ClipCircle {
    const fn at(radius_pct: f32, center_x_pct: f32, center_y_pct: f32) -> Self {
        Self {
            radius_pct,
            center_x_pct,
            center_y_pct,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "circle({}% at {}% {}%)",
            self.radius_pct, self.center_x_pct, self.center_y_pct
        )
    }
}

/// Absolute placement of the glow, in CSS inset terms
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnchorOffset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
}

impl AnchorOffset {
    pub fn to_css(&self) -> String {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
        .into_iter()
        .filter_map(|(side, px)| px.map(|px| format!("{side}: {px}px;")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Short-lived particles radiating from the glow center
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParticleRing {
    pub count: usize,
    pub distance_px: f32,
    pub size_px: f32,
}

impl ParticleRing {
    /// End offset of each particle relative to the glow center, evenly
    /// spaced by angle starting at 0 rad (pointing right), y down
    pub fn offsets(&self) -> SmallVec<[(f32, f32); 8]> {
        (0..self.count)
            .map(|i| {
                let angle = TAU * i as f32 / self.count as f32;
                (angle.cos() * self.distance_px, angle.sin() * self.distance_px)
            })
            .collect()
    }
}

/// Visual parameters for one corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeometrySpec {
    pub corner: Corner,
    /// Overlay clip when hidden
    pub reveal_from: ClipCircle,
    /// Overlay clip when covering the viewport
    pub reveal_to: ClipCircle,
    pub anchor: AnchorOffset,
    pub glow_size_px: f32,
    pub particles: ParticleRing,
}

impl GeometrySpec {
    const fn for_corner(corner: Corner, x_pct: f32, y_pct: f32, anchor: AnchorOffset) -> Self {
        Self {
            corner,
            reveal_from: ClipCircle::at(0.0, x_pct, y_pct),
            reveal_to: ClipCircle::at(REVEAL_COVER_PCT, x_pct, y_pct),
            anchor,
            glow_size_px: GLOW_SIZE_PX,
            particles: PARTICLE_RING,
        }
    }

    /// Clip shape at `progress` through the reveal
    pub fn reveal_at(&self, progress: f32, easing: Easing) -> ClipCircle {
        let t = easing.apply(progress);
        ClipCircle {
            radius_pct: self.reveal_from.radius_pct
                + (self.reveal_to.radius_pct - self.reveal_from.radius_pct) * t,
            ..self.reveal_from
        }
    }
}

static GEOMETRY: [GeometrySpec; 4] = [
    GeometrySpec::for_corner(
        Corner::TopRight,
        100.0,
        0.0,
        AnchorOffset {
            top: Some(GLOW_INSET_PX),
            right: Some(GLOW_INSET_PX),
            bottom: None,
            left: None,
        },
    ),
    GeometrySpec::for_corner(
        Corner::TopLeft,
        0.0,
        0.0,
        AnchorOffset {
            top: Some(GLOW_INSET_PX),
            right: None,
            bottom: None,
            left: Some(GLOW_INSET_PX),
        },
    ),
    GeometrySpec::for_corner(
        Corner::BottomRight,
        100.0,
        100.0,
        AnchorOffset {
            top: None,
            right: Some(GLOW_INSET_PX),
            bottom: Some(GLOW_INSET_PX),
            left: None,
        },
    ),
    GeometrySpec::for_corner(
        Corner::BottomLeft,
        0.0,
        100.0,
        AnchorOffset {
            top: None,
            right: None,
            bottom: Some(GLOW_INSET_PX),
            left: Some(GLOW_INSET_PX),
        },
    ),
];

/// Geometry for `corner`
pub fn lookup(corner: Corner) -> &'static GeometrySpec {
    let index = match corner {
        Corner::TopRight => 0,
        Corner::TopLeft => 1,
        Corner::BottomRight => 2,
        Corner::BottomLeft => 3,
    };
    &GEOMETRY[index]
}
