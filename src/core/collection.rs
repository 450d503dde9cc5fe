use crate::domain::model::CollectionKind;
use crate::domain::ports::{Collection, ContainerFactory};
use crate::utils::error::Result;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

impl<T> Collection<T> for Vec<T> {
    fn add(&mut self, element: T) -> Result<()> {
        self.push(element);
        Ok(())
    }
}

impl<T> Collection<T> for VecDeque<T> {
    fn add(&mut self, element: T) -> Result<()> {
        self.push_back(element);
        Ok(())
    }
}

impl<T, S> Collection<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn add(&mut self, element: T) -> Result<()> {
        // 重複元素由 set 自己處理
        self.insert(element);
        Ok(())
    }
}

impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn add(&mut self, element: T) -> Result<()> {
        self.insert(element);
        Ok(())
    }
}

/// Creates a container with `factory` and adds `elements` to it in order.
///
/// The factory is called exactly once. Elements are handed to the container
/// untouched, so deduplication (if any) is the container's business. The first
/// error from the factory or from `add` is returned as-is.
///
/// ```
/// use small_lambdas::core::collection::init_collection;
/// use std::collections::HashSet;
///
/// let set: HashSet<&str> = init_collection(HashSet::new, ["First", "Second"]).unwrap();
/// assert_eq!(set.len(), 2);
/// ```
pub fn init_collection<T, C, F>(factory: F, elements: impl IntoIterator<Item = T>) -> Result<C>
where
    F: ContainerFactory<C>,
    C: Collection<T>,
{
    let mut collection = factory.produce()?;
    for element in elements {
        collection.add(element)?;
    }
    Ok(collection)
}

/// Fills a container of the given kind and returns its elements in iteration order.
pub fn build_collection(kind: CollectionKind, elements: &[String]) -> Result<Vec<String>> {
    let elements = elements.iter().cloned();
    let filled: Vec<String> = match kind {
        CollectionKind::HashSet => {
            let set: HashSet<String> = init_collection(HashSet::new, elements)?;
            set.into_iter().collect()
        }
        CollectionKind::BTreeSet => {
            let set: BTreeSet<String> = init_collection(BTreeSet::new, elements)?;
            set.into_iter().collect()
        }
        CollectionKind::Vec => init_collection(Vec::new, elements)?,
        CollectionKind::VecDeque => {
            let deque: VecDeque<String> = init_collection(VecDeque::new, elements)?;
            deque.into_iter().collect()
        }
    };
    Ok(filled)
}
