//! Binary space partitioning tree, after csg.js.

use ashlar_kernel_mesh::{split_polygon, Plane, Polygon};

/// A BSP node: a dividing plane, the facets coplanar with it, and the
/// front/back subtrees.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Build a tree from a facet list.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Insert facets into the tree, splitting as needed. The first
    /// facet's plane becomes the divider of an empty node.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        let plane = *self
            .plane
            .get_or_insert_with(|| polygons[0].plane);

        let mut front = Vec::new();
        let mut back = Vec::new();
        for poly in &polygons {
            let mut coplanar_back = Vec::new();
            split_polygon(
                &plane,
                poly,
                &mut self.polygons,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
            self.polygons.extend(coplanar_back);
        }
        if !front.is_empty() {
            self.front
                .get_or_insert_with(Default::default)
                .build(front);
        }
        if !back.is_empty() {
            self.back.get_or_insert_with(Default::default).build(back);
        }
    }

    /// Convert solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for poly in &mut self.polygons {
            poly.flip();
        }
        if let Some(p) = &mut self.plane {
            p.flip();
        }
        if let Some(f) = &mut self.front {
            f.invert();
        }
        if let Some(b) = &mut self.back {
            b.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Remove the parts of `polygons` inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };
        let mut front = Vec::new();
        let mut back = Vec::new();
        for poly in &polygons {
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            split_polygon(
                &plane,
                poly,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
            // Coplanar facets route with the half-space they face.
            front.extend(coplanar_front);
            back.extend(coplanar_back);
        }
        let mut front = match &self.front {
            Some(f) => f.clip_polygons(front),
            None => front,
        };
        let back = match &self.back {
            Some(b) => b.clip_polygons(back),
            // No back subtree: the back half-space is solid, discard.
            None => Vec::new(),
        };
        front.extend(back);
        front
    }

    /// Remove the parts of this tree's facets inside `other`'s solid.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(f) = &mut self.front {
            f.clip_to(other);
        }
        if let Some(b) = &mut self.back {
            b.clip_to(other);
        }
    }

    /// Collect every facet in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut out = self.polygons.clone();
        if let Some(f) = &self.front {
            out.extend(f.all_polygons());
        }
        if let Some(b) = &self.back {
            out.extend(b.all_polygons());
        }
        out
    }
}
