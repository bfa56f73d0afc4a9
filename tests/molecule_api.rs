use coordgeom::{
    coordination_report, get_carbon_single_nitro, get_central_carbon, get_closest_atom_to_metal,
    Config, GeometryError, Molecule, MotifConfig,
};

// Cu(II) with a diimine-like N,N chelate and a chloride, slightly distorted
fn cu_chelate() -> Molecule {
    Molecule::new(
        vec!["Cu", "N", "N", "C", "C", "C", "C", "H", "Cl"],
        vec![
            [0.000, 0.000, 0.000],
            [1.380, 1.380, 0.000],
            [-1.380, 1.380, 0.000],
            [0.740, 2.500, 0.000],
            [-0.740, 2.620, 0.000],
            [2.760, 1.600, 0.000],
            [-2.760, 1.600, 0.000],
            [3.300, 2.500, 0.000],
            [0.000, -2.250, 0.000],
        ],
    )
    .unwrap()
}

#[test]
fn bite_angle_and_backbone() {
    let m = cu_chelate();
    let n_idx = m.all_closest_atom_to_metal("N", 0).unwrap();
    assert_eq!(n_idx, vec![1, 2]);

    let bite = m.angle(n_idx[0], 0, n_idx[1]).unwrap();
    assert!((bite - 90.0).abs() < 1e-6);

    assert_eq!(get_central_carbon(m.elements(), m.coordinates(), 0).unwrap(), 3);
    assert_eq!(get_carbon_single_nitro(m.elements(), m.coordinates(), 0).unwrap(), 3);
}

#[test]
fn halide_is_nearest_ligand_of_its_kind() {
    let m = cu_chelate();
    assert_eq!(get_closest_atom_to_metal("Cl", m.elements(), 0, m.coordinates()).unwrap(), 8);
    assert_eq!(
        get_closest_atom_to_metal("Br", m.elements(), 0, m.coordinates()),
        Err(GeometryError::EmptySelection { atom: "Br".to_string() })
    );
}

#[test]
fn report_uses_configured_neighbor_count() {
    let m = cu_chelate();
    let cfg = Config {
        report_max_neighbors: 3,
        ..Default::default()
    };
    let text = coordination_report(&m, 0, cfg.report_max_neighbors).unwrap();
    assert!(text.contains("Metal: Cu (#0)"));
    assert!(text.contains("N#1 - Cu - N#2: 90.00°"));
    assert!(text.contains("8        Cl"));
    assert!(!text.contains("\n3        C"));
}

#[test]
fn configured_donor_symbol() {
    let m = Molecule::new(
        vec!["Ni", "O", "O", "C", "C"],
        vec![
            [0.0, 0.0, 0.0],
            [1.4, 1.4, 0.0],
            [-1.4, 1.4, 0.0],
            [0.0, 2.7, 0.0],
            [0.0, 6.0, 0.0],
        ],
    )
    .unwrap();

    let cfg = MotifConfig::oxygen_donor();
    assert_eq!(m.central_carbon(0, &cfg).unwrap(), 3);
    assert_eq!(
        m.central_carbon(0, &MotifConfig::default()),
        Err(GeometryError::InsufficientAtoms {
            element: "N".to_string(),
            required: 2,
            found: 0,
        })
    );
}
