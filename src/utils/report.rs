// src/utils/report.rs

use crate::error::Result;
use crate::model::molecule::Molecule;
use crate::utils::geometry;

/// Text summary of the coordination sphere around `metal_idx`
///
/// Lists the `max_neighbors` atoms nearest the metal (nearest first) and the
/// L-M-L angle between each consecutive pair of them.
pub fn coordination_report(molecule: &Molecule, metal_idx: usize, max_neighbors: usize) -> Result<String> {
    let (metal_el, metal_pos) = molecule.atom(metal_idx)?;
    let dists = molecule.dist_vector(metal_idx)?;

    let mut order: Vec<usize> = (0..molecule.len()).filter(|&i| i != metal_idx).collect();
    order.sort_by(|&a, &b| dists[a].total_cmp(&dists[b]));
    order.truncate(max_neighbors);

    let mut out = String::new();
    out.push_str(&format!("Formula: {}\n", molecule.formula()));
    out.push_str(&format!(
        "Metal: {} (#{}) at [{:.4}, {:.4}, {:.4}]\n",
        metal_el, metal_idx, metal_pos[0], metal_pos[1], metal_pos[2]
    ));
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!("{:<8} {:<8} {:<10}\n", "Index", "Element", "Dist (Å)"));
    out.push_str("--------------------------------------------------\n");

    for &i in &order {
        out.push_str(&format!("{:<8} {:<8} {:<10.4}\n", i, molecule.elements()[i], dists[i]));
    }

    if order.len() >= 2 {
        out.push_str("\nAngles:\n");
        let coords = molecule.coordinates();
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            // an arm sitting on the metal has no defined angle
            match geometry::get_three_point_angle(metal_pos, coords[a], coords[b]) {
                Ok(theta) => out.push_str(&format!(
                    "{}#{} - {} - {}#{}: {:.2}°\n",
                    molecule.elements()[a],
                    a,
                    metal_el,
                    molecule.elements()[b],
                    b,
                    theta
                )),
                Err(e) => log::warn!("skipping angle {}-{}-{}: {}", a, metal_idx, b, e),
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_planar() -> Molecule {
        Molecule::new(
            vec!["Pt", "Cl", "Cl", "N", "N", "H"],
            vec![
                [0.0, 0.0, 0.0],
                [2.3, 0.0, 0.0],
                [0.0, 2.3, 0.0],
                [-2.0, 0.0, 0.0],
                [0.0, -2.0, 0.0],
                [0.0, -2.9, 0.4],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_report_lists_nearest_first() {
        let text = coordination_report(&square_planar(), 0, 4).unwrap();
        assert!(text.starts_with("Formula: Cl2HN2Pt\n"));
        assert!(text.contains("Metal: Pt (#0)"));

        let n3 = text.find("3        N").unwrap();
        let cl1 = text.find("1        Cl").unwrap();
        assert!(n3 < cl1);
        // hydrogen is the fifth neighbour and is cut off
        assert!(!text.contains("5        H"));
    }

    #[test]
    fn test_report_angles() {
        let text = coordination_report(&square_planar(), 0, 2).unwrap();
        assert!(text.contains("N#3 - Pt - N#4: 90.00°"));
    }

    #[test]
    fn test_report_single_neighbor_has_no_angles() {
        let text = coordination_report(&square_planar(), 0, 1).unwrap();
        assert!(!text.contains("Angles:"));
    }

    #[test]
    fn test_report_bad_index() {
        assert!(coordination_report(&square_planar(), 42, 4).is_err());
    }
}
