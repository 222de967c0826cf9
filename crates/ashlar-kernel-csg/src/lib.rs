#![warn(missing_docs)]

//! Boolean operations over polygon-soup solids.
//!
//! Implements the csg.js BSP-tree algorithm: each operand is compiled
//! into a binary space partition, the trees clip each other's facets,
//! and the surviving facets form the result. Subtraction and
//! intersection are order-sensitive; the first operand is the base.

mod bsp;

use ashlar_kernel_mesh::Solid;
use bsp::BspNode;

/// Union of two solids.
pub fn union(a: &Solid, b: &Solid) -> Solid {
    let mut ta = BspNode::from_polygons(a.polygons().to_vec());
    let mut tb = BspNode::from_polygons(b.polygons().to_vec());
    ta.clip_to(&tb);
    tb.clip_to(&ta);
    tb.invert();
    tb.clip_to(&ta);
    tb.invert();
    ta.build(tb.all_polygons());
    Solid::from_polygons(ta.all_polygons())
}

/// Subtract `b` from `a`.
pub fn subtract(a: &Solid, b: &Solid) -> Solid {
    let mut ta = BspNode::from_polygons(a.polygons().to_vec());
    let mut tb = BspNode::from_polygons(b.polygons().to_vec());
    ta.invert();
    ta.clip_to(&tb);
    tb.clip_to(&ta);
    tb.invert();
    tb.clip_to(&ta);
    tb.invert();
    ta.build(tb.all_polygons());
    ta.invert();
    Solid::from_polygons(ta.all_polygons())
}

/// Intersection of `a` and `b`.
pub fn intersect(a: &Solid, b: &Solid) -> Solid {
    let mut ta = BspNode::from_polygons(a.polygons().to_vec());
    let mut tb = BspNode::from_polygons(b.polygons().to_vec());
    ta.invert();
    tb.clip_to(&ta);
    tb.invert();
    ta.clip_to(&tb);
    tb.clip_to(&ta);
    ta.build(tb.all_polygons());
    ta.invert();
    Solid::from_polygons(ta.all_polygons())
}

/// Union of any number of solids, folded left to right.
pub fn union_all<'a, I: IntoIterator<Item = &'a Solid>>(parts: I) -> Solid {
    let mut iter = parts.into_iter();
    let Some(first) = iter.next() else {
        return Solid::default();
    };
    iter.fold(first.clone(), |acc, s| union(&acc, s))
}
