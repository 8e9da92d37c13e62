//! Source kind tags for collaborators that must branch on geometry.

use std::fmt;

/// The geometry family of a field source.
///
/// The engine itself never branches on this tag; it exists so that
/// collaborators such as a renderer can discriminate members of a
/// collection without type identity checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    /// Homogeneously magnetized cuboid.
    BoxMagnet,
    /// Homogeneously magnetized cylinder.
    CylinderMagnet,
    /// Homogeneously magnetized sphere.
    SphereMagnet,
    /// Current flowing along a polyline.
    LineCurrent,
    /// Current flowing around a circular loop.
    CircularCurrent,
    /// Point magnetic dipole.
    Dipole,
    /// Any source defined outside this workspace.
    Custom,
}

impl SourceKind {
    /// `true` for the permanent-magnet kinds.
    pub fn is_magnet(self) -> bool {
        matches!(
            self,
            Self::BoxMagnet | Self::CylinderMagnet | Self::SphereMagnet
        )
    }

    /// `true` for the current-carrying kinds.
    pub fn is_current(self) -> bool {
        matches!(self, Self::LineCurrent | Self::CircularCurrent)
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BoxMagnet => "box",
            Self::CylinderMagnet => "cylinder",
            Self::SphereMagnet => "sphere",
            Self::LineCurrent => "line",
            Self::CircularCurrent => "circular",
            Self::Dipole => "dipole",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
