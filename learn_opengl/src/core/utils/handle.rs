use std::fmt::Debug;

/// Handles for resources like buffers and shaders.
/// We use a concrete type to ensure that resource handles are always of the
/// same type no matter the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(super) index: u32,
    pub(super) generation: u32,
}

impl Handle {
    #[inline(always)]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline(always)]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[inline(always)]
    fn array_index(&self) -> usize {
        self.index as usize
    }
}

/// Generational index allocator. Freed slots are reused, but with a bumped
/// generation so that old handles to the slot stop resolving.
pub struct Allocator<V> {
    free: Vec<usize>,
    entries: Vec<AllocatorEntry<V>>,
}

struct AllocatorEntry<V> {
    value: Option<V>,
    generation: u32,
}

impl<V> Default for Allocator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Allocator<V> {
    pub fn new() -> Self {
        Allocator {
            free: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn allocate(&mut self, value: V) -> Handle {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index];
            debug_assert!(entry.value.is_none(), "Free list points to a live entry");
            entry.value = Some(value);
            return Handle {
                index: index as u32,
                generation: entry.generation,
            };
        }

        let index = self.entries.len();
        self.entries.push(AllocatorEntry {
            value: Some(value),
            generation: 0,
        });
        Handle {
            index: index as u32,
            generation: 0,
        }
    }

    /// Release the value behind `handle`. Returns `None` if the handle is stale.
    pub fn free(&mut self, handle: Handle) -> Option<V> {
        if !self.is_live(handle) {
            return None;
        }

        let index = handle.array_index();
        let entry = &mut self.entries[index];
        let value = entry.value.take();
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(index);
        value
    }

    pub fn is_live(&self, handle: Handle) -> bool {
        match self.entries.get(handle.array_index()) {
            Some(entry) => entry.generation == handle.generation && entry.value.is_some(),
            None => false,
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&V> {
        self.entries
            .get(handle.array_index())
            .filter(|entry| entry.generation == handle.generation)
            .and_then(|entry| entry.value.as_ref())
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut V> {
        self.entries
            .get_mut(handle.array_index())
            .filter(|entry| entry.generation == handle.generation)
            .and_then(|entry| entry.value.as_mut())
    }

    /// Amount of live values
    pub fn len(&self) -> usize {
        self.entries.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all live handles and their values
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &V)> {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            entry.value.as_ref().map(|value| {
                (
                    Handle {
                        index: index as u32,
                        generation: entry.generation,
                    },
                    value,
                )
            })
        })
    }
}

impl<V: Debug> Debug for Allocator<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
