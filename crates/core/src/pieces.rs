//! Pieces module - precomputed piece masks
//!
//! Four rotation variants per piece kind, stored as ready-made offset lists
//! rather than rotated at runtime. The bar, S, and Z only have two distinct
//! silhouettes, so their opposite rotations share a mask.

use gridfall_types::{PieceKind, Rotation};

/// Offset of a single occupied cell from the piece's top-left origin
pub type CellOffset = (i8, i8);

/// Mask of a piece at one rotation - 4 occupied-cell offsets
pub type ShapeMask = [CellOffset; 4];

/// Spawn position for new pieces (x, y): top-left corner of the grid
pub const SPAWN_POSITION: (i8, i8) = (0, 0);

/// Look up the mask for a piece kind at a rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> ShapeMask {
    match kind {
        PieceKind::O => o_shape(rotation),
        PieceKind::I => i_shape(rotation),
        PieceKind::L => l_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
    }
}

/// O piece: 2x2 square, identical in every rotation
fn o_shape(_rotation: Rotation) -> ShapeMask {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// I piece: vertical bar at R0/R180, horizontal at R90/R270
fn i_shape(rotation: Rotation) -> ShapeMask {
    match rotation {
        Rotation::R0 | Rotation::R180 => [(0, 0), (0, 1), (0, 2), (0, 3)],
        Rotation::R90 | Rotation::R270 => [(0, 0), (1, 0), (2, 0), (3, 0)],
    }
}

/// L piece: column with a foot to the right
fn l_shape(rotation: Rotation) -> ShapeMask {
    match rotation {
        Rotation::R0 => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Rotation::R90 => [(0, 0), (1, 0), (2, 0), (0, 1)],
        Rotation::R180 => [(0, 0), (1, 0), (1, 1), (1, 2)],
        Rotation::R270 => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}

/// J piece: column with a foot to the left
fn j_shape(rotation: Rotation) -> ShapeMask {
    match rotation {
        Rotation::R0 => [(1, 0), (1, 1), (0, 2), (1, 2)],
        Rotation::R90 => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::R180 => [(0, 0), (1, 0), (0, 1), (0, 2)],
        Rotation::R270 => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

/// S piece: two distinct silhouettes
fn s_shape(rotation: Rotation) -> ShapeMask {
    match rotation {
        Rotation::R0 | Rotation::R180 => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::R90 | Rotation::R270 => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Z piece: two distinct silhouettes
fn z_shape(rotation: Rotation) -> ShapeMask {
    match rotation {
        Rotation::R0 | Rotation::R180 => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::R90 | Rotation::R270 => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}
