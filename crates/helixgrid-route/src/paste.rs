//! Placement hints for pasting copied helices onto the lattice.

use helixgrid_core::{HelixId, LatticeCoord, Occupancy, Position};
use helixgrid_lattice::Lattice;

use crate::session::CreateHint;

/// One copied helix: its id in the source design and the site it sat on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClipboardEntry {
    /// Id in the design it was copied from.
    pub id: HelixId,
    /// Site it occupied there.
    pub coord: LatticeCoord,
}

/// Where a paste would land.
#[derive(Clone, Debug, PartialEq)]
pub struct PastePreview {
    /// Clipboard entry placed on the hovered site.
    pub anchor: HelixId,
    /// Target sites in clipboard order, with the ids they would receive.
    pub hints: Vec<CreateHint>,
    /// Model-space offset from the anchor's old centre to its new one.
    pub translation: Position,
}

/// Preview pasting `clipboard` so that one entry lands on `hovered`.
///
/// The anchor is the lowest-id entry whose site parity matches the
/// hovered site, so every pasted helix keeps its parity. Every entry is
/// shifted by the same row/column offset. Pasted helices are numbered
/// `id_base`, `id_base + 1`, ... in clipboard order.
///
/// Returns `None` if the clipboard has no entry of matching parity, if
/// any target site is occupied, or if a shifted site or id overflows.
pub fn preview_paste(
    lattice: &dyn Lattice,
    clipboard: &[ClipboardEntry],
    hovered: LatticeCoord,
    occupancy: &dyn Occupancy,
    id_base: HelixId,
) -> Option<PastePreview> {
    let parity = lattice.parity(hovered);
    let anchor = clipboard
        .iter()
        .filter(|e| lattice.parity(e.coord) == parity)
        .min_by_key(|e| e.id)?;
    let (d_row, d_col) = hovered.delta_from(anchor.coord)?;

    let mut hints = Vec::with_capacity(clipboard.len());
    for (i, entry) in clipboard.iter().enumerate() {
        let target = entry.coord.offset(d_row, d_col)?;
        if occupancy.is_occupied(target) {
            return None;
        }
        let id = u32::try_from(i).ok().and_then(|i| id_base.0.checked_add(i))?;
        hints.push(CreateHint {
            coord: target,
            id: HelixId(id),
        });
    }

    let translation =
        lattice.coordinate_to_position(hovered) - lattice.coordinate_to_position(anchor.coord);
    Some(PastePreview {
        anchor: anchor.id,
        hints,
        translation,
    })
}
