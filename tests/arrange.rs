mod common;

use common::*;
use fragcoords::prelude::*;
use fragcoords::COLLISION_LIMIT_BOND_ROTATION;

/// Two separate ethane-like bonds: atoms 0-1 and 2-3.
fn two_bonds() -> Molecule {
    let mut mol = Builder::new();
    for _ in 0..4 {
        mol.add_atom(6);
    }
    mol.add_bond(0, 1, 1);
    mol.add_bond(2, 3, 1);
    mol.finish()
}

fn closest_approach(a: &Fragment, b: &Fragment) -> f64 {
    a.positions()
        .iter()
        .flat_map(|&p| b.positions().iter().map(move |&q| p.distance(q)))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn horizontal_bonds_are_stacked() {
    trace_capture!();
    let mol = two_bonds();
    let coords = [Point(0.0, 0.0), Point(1.0, 0.0)];
    let first = placed(&mol, 0..2, &coords, LayoutMode::default());
    let mut second = placed(&mol, 2..4, &coords, LayoutMode::default());
    for corner in Corner::ALL {
        assert_eq!(first.corner_distance(corner), 0.0);
    }
    assert_eq!(first.arrange_with(&mut second), Placement::Topped);
    assert_all_close(second.positions(), &[Point(0.0, 1.0), Point(1.0, 1.0)]);
    assert!(closest_approach(&first, &second) >= COLLISION_LIMIT_BOND_ROTATION);
}

#[test]
fn vertical_bonds_go_beside() {
    let mol = two_bonds();
    let coords = [Point(0.0, 0.0), Point(0.0, 1.0)];
    let first = placed(&mol, 0..2, &coords, LayoutMode::default());
    let mut second = placed(&mol, 2..4, &coords, LayoutMode::default());
    assert_eq!(first.arrange_with(&mut second), Placement::Beside);
    assert_all_close(second.positions(), &[Point(1.0, 0.0), Point(1.0, 1.0)]);
    assert!(closest_approach(&first, &second) >= COLLISION_LIMIT_BOND_ROTATION);
}

#[test]
fn diagonals_nest_into_corner() {
    let mol = chain(14);
    let coords = (0..7)
        .map(|n| Point(n as f64, (6 - n) as f64))
        .collect::<Vec<_>>();
    let first = placed(&mol, 0..7, &coords, LayoutMode::default());
    let mut second = placed(&mol, 7..14, &coords, LayoutMode::default());
    assert_eq!(first.corner_distance(Corner::BottomRight), 3.0);
    assert_eq!(second.corner_distance(Corner::TopLeft), 3.0);
    assert_eq!(
        first.arrange_with(&mut second),
        Placement::Corner(Corner::BottomRight)
    );
    assert_close(second.position(0), Point(1.0, 7.0));
    assert_eq!(second.bounds().min_x, 1.0);
    assert_eq!(second.bounds().min_y, 1.0);
    assert!(closest_approach(&first, &second) >= COLLISION_LIMIT_BOND_ROTATION);
}

#[test]
fn arranged_fragments_stay_clean() {
    let mol = two_bonds();
    let shapes = [
        [Point(0.0, 0.0), Point(1.0, 0.0)],
        [Point(0.0, 0.0), Point(0.0, 1.0)],
        [Point(0.0, 0.0), Point(0.5, 3.0f64.sqrt() / 2.0)],
        [Point(0.0, 0.0), Point(0.5, -(3.0f64.sqrt()) / 2.0)],
    ];
    for a in &shapes {
        for b in &shapes {
            let mut first = placed(&mol, 0..2, a, LayoutMode::default());
            let mut second = placed(&mol, 2..4, b, LayoutMode::default());
            first.collision_list();
            second.collision_list();
            assert!(first.collision_penalty() < TOLERANCE);
            assert!(second.collision_penalty() < TOLERANCE);
            first.arrange_with(&mut second);
            assert!(
                closest_approach(&first, &second) >= COLLISION_LIMIT_BOND_ROTATION,
                "{a:?} and {b:?} ended up too close"
            );
        }
    }
}
