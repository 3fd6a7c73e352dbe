use crate::marker::{Marker, MarkerId};
use crate::palette::PaletteColor;
use egui::Pos2;

/// Placed dots in placement order.
#[derive(Debug)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    next_id: u64,
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self {
            markers: Vec::new(),
            next_id: 1,
        }
    }
}

impl MarkerStore {
    /// Replaces the whole sequence. Later appends get ids past every seeded one.
    pub fn seed(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
        if let Some(highest) = self.markers.iter().map(|m| m.id.value()).max() {
            self.next_id = self.next_id.max(highest + 1);
        }
        tracing::debug!(count = self.markers.len(), "store seeded");
    }

    pub fn append(&mut self, position: Pos2, color: Option<PaletteColor>) -> &Marker {
        let id = MarkerId::new(self.next_id);
        self.next_id += 1;
        self.markers.push(Marker::new(id, position, color));
        tracing::debug!(%id, x = position.x, y = position.y, "dot placed");
        &self.markers[self.markers.len() - 1]
    }

    pub fn undo_last(&mut self) -> Option<Marker> {
        let removed = self.markers.pop();
        match &removed {
            Some(marker) => tracing::debug!(id = %marker.id, remaining = self.markers.len(), "dot undone"),
            None => tracing::trace!("undo on empty canvas ignored"),
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn last(&self) -> Option<&Marker> {
        self.markers.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(count: u64) -> MarkerStore {
        let mut store = MarkerStore::default();
        store.seed(
            (1..=count)
                .map(|i| Marker::new(MarkerId::new(i), Pos2::new(50.0, 50.0), None))
                .collect(),
        );
        store
    }

    #[test]
    fn append_grows_by_one() {
        let mut store = seeded(23);
        for n in 1..=5 {
            store.append(Pos2::new(10.0, 10.0), None);
            assert_eq!(store.len(), 23 + n);
        }
    }

    #[test]
    fn undo_on_empty_is_noop() {
        let mut store = MarkerStore::default();
        assert!(store.undo_last().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn undo_past_empty_stops_at_zero() {
        let mut store = seeded(3);
        store.append(Pos2::new(20.0, 20.0), None);
        for _ in 0..10 {
            store.undo_last();
        }
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn undo_removes_most_recent() {
        let mut store = seeded(2);
        let first = store.append(Pos2::new(10.0, 10.0), None).id;
        let second = store.append(Pos2::new(20.0, 20.0), None).id;

        assert_eq!(store.undo_last().map(|m| m.id), Some(second));
        assert_eq!(store.last().map(|m| m.id), Some(first));
    }

    #[test]
    fn appended_ids_do_not_collide_with_seed_or_each_other() {
        let mut store = seeded(23);
        store.append(Pos2::new(10.0, 10.0), None);
        store.undo_last();
        store.append(Pos2::new(10.0, 10.0), None);
        store.append(Pos2::new(30.0, 30.0), None);

        let ids: HashSet<_> = store.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn order_is_placement_order() {
        let mut store = seeded(1);
        store.append(Pos2::new(10.0, 10.0), Some(PaletteColor::Red));
        store.append(Pos2::new(20.0, 20.0), Some(PaletteColor::Green));

        let colors: Vec<_> = store.as_slice().iter().map(|m| m.color).collect();
        assert_eq!(colors, vec![None, Some(PaletteColor::Red), Some(PaletteColor::Green)]);
    }
}
