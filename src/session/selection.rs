use uuid::Uuid;

pub const CAPACITY: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Removed,
    Added,
    /// A third id arrived while two were selected: the pair restarts from it.
    Reseeded,
}

/// Up to two selected waypoint ids in the order they were picked.
#[derive(Debug, Default)]
pub struct Selection {
    ids: Vec<Uuid>,
}

impl Selection {
    pub fn toggle(&mut self, id: Uuid) -> Toggle {
        if let Some(index) = self.ids.iter().position(|selected| selected == &id) {
            self.ids.remove(index);
            return Toggle::Removed;
        }

        if self.ids.len() < CAPACITY {
            self.ids.push(id);
            return Toggle::Added;
        }

        self.ids.clear();
        self.ids.push(id);
        Toggle::Reseeded
    }

    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.ids.contains(id)
    }

    /// Origin and destination, once exactly two ids are selected.
    pub fn pair(&self) -> Option<(Uuid, Uuid)> {
        match self.ids.as_slice() {
            [origin, destination] => Some((*origin, *destination)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
