#![allow(dead_code)]

use fragcoords::prelude::*;

pub const TOLERANCE: f64 = 1e-9;

macro_rules! trace_capture {
    () => {
        use tracing_subscriber::filter::{LevelFilter, Targets};
        use tracing_subscriber::prelude::*;

        let targets = Targets::new()
            .with_target("fragcoords::coordgen", LevelFilter::TRACE)
            .with_target("fragcoords::sketcher", LevelFilter::DEBUG);

        let formatter = tracing_subscriber::fmt::layer().with_test_writer();

        let _guard = tracing_subscriber::registry()
            .with(targets)
            .with(formatter)
            .set_default();
    };
}

pub(crate) use trace_capture;

/// Unbranched carbon chain, bond `n` connecting atoms `n` and `n + 1`.
pub fn chain(len: usize) -> Molecule {
    marked_chain(len, &[])
}

/// Carbon chain with the given atoms marked as core atoms.
pub fn marked_chain(len: usize, marked: &[usize]) -> Molecule {
    let mut mol = Builder::new();
    for n in 0..len {
        if marked.contains(&n) {
            mol.add_marked_atom(6);
        } else {
            mol.add_atom(6);
        }
    }
    for n in 1..len {
        mol.add_bond(n - 1, n, 1);
    }
    mol.finish()
}

/// Build a fragment from the given atoms and place them at `coords`.
pub fn placed<'a>(
    mol: &'a Molecule,
    atoms: impl IntoIterator<Item = usize>,
    coords: &[Point],
    mode: LayoutMode,
) -> Fragment<'a> {
    let mut frag = Fragment::new(mol, atoms, mode).expect("valid fragment atoms");
    assert_eq!(frag.size(), coords.len());
    for (n, &c) in coords.iter().enumerate() {
        frag.set_position(n, c);
    }
    frag
}

/// Standard 120° zigzag with unit bonds along the x axis.
pub fn zigzag(len: usize) -> Vec<Point> {
    let dx = 3.0f64.sqrt() / 2.0;
    (0..len)
        .map(|n| Point(n as f64 * dx, if n % 2 == 1 { 0.5 } else { 0.0 }))
        .collect()
}

#[track_caller]
pub fn assert_close(actual: Point, expected: Point) {
    assert!(
        (actual.0 - expected.0).abs() < TOLERANCE && (actual.1 - expected.1).abs() < TOLERANCE,
        "expected {expected:?}, got {actual:?}"
    );
}

#[track_caller]
pub fn assert_all_close(actual: &[Point], expected: &[Point]) {
    assert_eq!(actual.len(), expected.len());
    for (&a, &e) in actual.iter().zip(expected) {
        assert_close(a, e);
    }
}
