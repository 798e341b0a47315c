/*

ecs.rs - Sparse-set component storage for Sidim
Copyright (C) 2024  The Sidim Authors

This file is part of Sidim.

Sidim is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, version 3 of the License.

Sidim is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Sidim.  If not, see <https://www.gnu.org/licenses/>.

*/

//! Entity/component storage
//!
//! A small sparse-set store, independent of the rest of the crate. Any
//! `'static` type can be a component, which includes
//! [`Quantity`][crate::quantity::Quantity].
//!
//! Each [`ComponentPool`] keeps a sparse table from entity id to slot and a
//! packed array of components, so insertion, lookup and removal are O(1) and
//! iteration touches only live components.

use std::{
    any::{self, Any, TypeId},
    collections::HashMap,
    fmt,
};

/// Entity id. Ids index the sparse table directly, so keep them small.
pub type Entity = usize;

/// # Sparse set of components of one type
#[derive(Clone, Debug)]
pub struct ComponentPool<T> {
    sparse: Vec<Option<usize>>,
    entities: Vec<Entity>,
    dense: Vec<T>,
}

impl<T> ComponentPool<T> {
    pub fn new() -> Self {
        Self {
            sparse: Vec::new(),
            entities: Vec::new(),
            dense: Vec::new(),
        }
    }

    /// Attach `component` to `entity`.
    ///
    /// Returns the component it replaces, if the entity already had one.
    pub fn assign(&mut self, entity: Entity, component: T) -> Option<T> {
        if entity >= self.sparse.len() {
            self.sparse.resize(entity + 1, None);
        }
        match self.sparse[entity] {
            Some(slot) => Some(std::mem::replace(&mut self.dense[slot], component)),
            None => {
                self.sparse[entity] = Some(self.dense.len());
                self.entities.push(entity);
                self.dense.push(component);
                None
            }
        }
    }

    fn slot(&self, entity: Entity) -> Option<usize> {
        self.sparse.get(entity).copied().flatten()
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.slot(entity).map(|slot| &self.dense[slot])
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.slot(entity).map(move |slot| &mut self.dense[slot])
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.slot(entity).is_some()
    }

    /// Detach and return the component of `entity`.
    ///
    /// The last component is moved into the freed slot, so the dense array
    /// stays packed but its order changes.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.slot(entity)?;
        self.sparse[entity] = None;
        self.entities.swap_remove(slot);
        let component = self.dense.swap_remove(slot);
        if let Some(&moved) = self.entities.get(slot) {
            self.sparse[moved] = Some(slot);
        }
        Some(component)
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Entities with a component, in packed order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.dense.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter().copied().zip(self.dense.iter_mut())
    }
}

impl<T> Default for ComponentPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// # Component registry
///
/// Holds one [`ComponentPool`] per component type, created on first use.
#[derive(Default)]
pub struct Registry {
    pools: HashMap<TypeId, Box<dyn Any>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool for components of type `T`, if one has been created.
    pub fn pool<T: 'static>(&self) -> Option<&ComponentPool<T>> {
        self.pools.get(&TypeId::of::<T>())?.downcast_ref()
    }

    /// Pool for components of type `T`, created if missing.
    pub fn pool_mut<T: 'static>(&mut self) -> &mut ComponentPool<T> {
        let pool = self.pools.entry(TypeId::of::<T>()).or_insert_with(|| {
            tracing::trace!(component = any::type_name::<T>(), "creating component pool");
            Box::new(ComponentPool::<T>::new())
        });
        pool.downcast_mut()
            .expect("component pools are keyed by the TypeId of their component type")
    }

    pub fn assign<T: 'static>(&mut self, entity: Entity, component: T) -> Option<T> {
        self.pool_mut::<T>().assign(entity, component)
    }

    pub fn get<T: 'static>(&self, entity: Entity) -> Option<&T> {
        self.pool::<T>()?.get(entity)
    }

    pub fn remove<T: 'static>(&mut self, entity: Entity) -> Option<T> {
        self.pools
            .get_mut(&TypeId::of::<T>())?
            .downcast_mut::<ComponentPool<T>>()?
            .remove(entity)
    }

    /// Visit every entity which has both an `A` and a `B`.
    ///
    /// Entities are visited in the packed order of the `A` pool. If `A` and
    /// `B` are the same type, every entity with that component is visited and
    /// the `B` argument is a copy of the component taken before `f` runs.
    pub fn view2<A: 'static, B: Clone + 'static>(
        &mut self,
        mut f: impl FnMut(Entity, &mut A, &B),
    ) {
        if TypeId::of::<A>() == TypeId::of::<B>() {
            let Some(pool) = self
                .pools
                .get_mut(&TypeId::of::<A>())
                .and_then(|pool| pool.downcast_mut::<ComponentPool<A>>())
            else {
                return;
            };
            for (entity, a) in pool.iter_mut() {
                let before = (&*a as &dyn Any).downcast_ref::<B>().cloned();
                if let Some(b) = before {
                    f(entity, a, &b);
                }
            }
            return;
        }

        let Some(mut boxed) = self.pools.remove(&TypeId::of::<A>()) else {
            return;
        };
        if let (Some(leader), Some(other)) =
            (boxed.downcast_mut::<ComponentPool<A>>(), self.pool::<B>())
        {
            let ComponentPool {
                entities, dense, ..
            } = leader;
            for (entity, a) in entities.iter().copied().zip(dense.iter_mut()) {
                if let Some(b) = other.get(entity) {
                    f(entity, a, b);
                }
            }
        }
        self.pools.insert(TypeId::of::<A>(), boxed);
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("pools", &self.pools.len())
            .finish()
    }
}
