//! Read-only traversal of a menu tree.
//!
//! Depths are 1-based: the receiver's own items, and the receiver itself
//! among item lists, are at depth 1. Flattened results are depth-major and
//! keep insertion order within each depth.

use std::collections::{BTreeMap, VecDeque};

use crate::content::ContentKind;
use crate::tree::{Item, ItemList};

impl ItemList {
    /// Items of the whole subtree grouped by depth.
    pub fn items_with_depth(&self) -> BTreeMap<usize, Vec<&Item>> {
        fn collect<'a>(items: &'a [Item], depth: usize, out: &mut BTreeMap<usize, Vec<&'a Item>>) {
            for item in items {
                out.entry(depth).or_default().push(item);
                if let Some(children) = &item.children {
                    collect(&children.items, depth + 1, out);
                }
            }
        }

        let mut results = BTreeMap::new();
        collect(&self.items, 1, &mut results);
        results
    }

    /// Item lists of the whole subtree, including `self`, grouped by depth.
    pub fn item_lists_with_depth(&self) -> BTreeMap<usize, Vec<&ItemList>> {
        fn collect<'a>(
            list: &'a ItemList,
            depth: usize,
            out: &mut BTreeMap<usize, Vec<&'a ItemList>>,
        ) {
            out.entry(depth).or_default().push(list);
            for children in list.items.iter().filter_map(|item| item.children.as_ref()) {
                collect(children, depth + 1, out);
            }
        }

        let mut results = BTreeMap::new();
        collect(self, 1, &mut results);
        results
    }

    pub fn all_items(&self) -> Vec<&Item> {
        self.items_with_depth().into_values().flatten().collect()
    }

    pub fn all_item_lists(&self) -> Vec<&ItemList> {
        self.item_lists_with_depth().into_values().flatten().collect()
    }

    /// All items whose content is of `kind`.
    pub fn items_by_content_type(&self, kind: ContentKind) -> Vec<&Item> {
        self.all_items()
            .into_iter()
            .filter(|item| item.content().kind() == kind)
            .collect()
    }

    pub fn items_at_depth(&self, depth: usize) -> Vec<&Item> {
        self.items_with_depth().remove(&depth).unwrap_or_default()
    }

    pub fn item_lists_at_depth(&self, depth: usize) -> Vec<&ItemList> {
        self.item_lists_with_depth()
            .remove(&depth)
            .unwrap_or_default()
    }

    /// Items with `from <= depth <= to`, depth-major.
    pub fn items_at_depth_range(&self, from: usize, to: usize) -> Vec<&Item> {
        self.items_with_depth()
            .range(from..=to.max(from))
            .filter(|(depth, _)| **depth <= to)
            .flat_map(|(_, items)| items.iter().copied())
            .collect()
    }

    /// Item lists with `from <= depth <= to`, depth-major.
    pub fn item_lists_at_depth_range(&self, from: usize, to: usize) -> Vec<&ItemList> {
        self.item_lists_with_depth()
            .range(from..=to.max(from))
            .filter(|(depth, _)| **depth <= to)
            .flat_map(|(_, lists)| lists.iter().copied())
            .collect()
    }

    /// First list named `name`, searching `self` and then its descendants
    /// depth by depth.
    pub fn find_item_list_by_name(&self, name: &str) -> Option<&ItemList> {
        self.all_item_lists()
            .into_iter()
            .find(|list| list.name() == Some(name))
    }

    /// Shorthand for [`find_item_list_by_name`](Self::find_item_list_by_name).
    pub fn find(&self, name: &str) -> Option<&ItemList> {
        self.find_item_list_by_name(name)
    }

    /// Alias of [`find_item_list_by_name`](Self::find_item_list_by_name).
    pub fn find_by_name(&self, name: &str) -> Option<&ItemList> {
        self.find_item_list_by_name(name)
    }

    /// Mutable variant of [`find`](Self::find), with the same search order.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ItemList> {
        let mut queue = VecDeque::from([self]);
        while let Some(list) = queue.pop_front() {
            if list.name.as_deref() == Some(name) {
                return Some(list);
            }
            queue.extend(
                list.items
                    .iter_mut()
                    .filter_map(|item| item.children.as_mut()),
            );
        }
        None
    }

    /// First list whose wrapping element has attribute `key` set to `value`.
    pub fn find_item_list_by_attribute(&self, key: &str, value: &str) -> Option<&ItemList> {
        self.all_item_lists()
            .into_iter()
            .find(|list| list.attributes().get(key) == Some(value))
    }

    /// First link item whose unevaluated URL equals `url`.
    pub fn find_item_by_url(&self, url: &str) -> Option<&Item> {
        self.items_by_content_type(ContentKind::Link)
            .into_iter()
            .find(|item| item.content().url() == Some(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use crate::tree::ItemOptions;

    fn with_children(list: &mut ItemList, url: &str, children: ItemList) {
        list.add_with(url, url, Attributes::new(), ItemOptions::new().children(children))
            .unwrap();
    }

    /// ```text
    /// root
    /// ├── /a
    /// │   ├── /a/1
    /// │   │   └── /a/1/x
    /// │   └── /a/2
    /// └── /b
    ///     └── /b/1
    /// ```
    fn sample_tree() -> ItemList {
        let mut a1 = ItemList::named("a1-list");
        a1.add("/a/1/x", "x").unwrap();

        let mut a = ItemList::named("a-list");
        with_children(&mut a, "/a/1", a1);
        a.add("/a/2", "2").unwrap();

        let mut b = ItemList::named("b-list");
        b.add("/b/1", "1").unwrap();

        let mut root = ItemList::named("root");
        with_children(&mut root, "/a", a);
        with_children(&mut root, "/b", b);
        root
    }

    fn urls<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<&'a str> {
        items
            .into_iter()
            .filter_map(|item| item.content().url())
            .collect()
    }

    fn names<'a>(lists: impl IntoIterator<Item = &'a ItemList>) -> Vec<&'a str> {
        lists.into_iter().filter_map(ItemList::name).collect()
    }

    #[test]
    fn test_items_with_depth() {
        let tree = sample_tree();

        let by_depth = tree.items_with_depth();

        assert_eq!(by_depth.len(), 3);
        assert_eq!(urls(by_depth[&1].iter().copied()), vec!["/a", "/b"]);
        assert_eq!(
            urls(by_depth[&2].iter().copied()),
            vec!["/a/1", "/a/2", "/b/1"]
        );
        assert_eq!(urls(by_depth[&3].iter().copied()), vec!["/a/1/x"]);
    }

    #[test]
    fn test_all_items_is_depth_major() {
        let tree = sample_tree();

        assert_eq!(
            urls(tree.all_items()),
            vec!["/a", "/b", "/a/1", "/a/2", "/b/1", "/a/1/x"]
        );
    }

    #[test]
    fn test_item_lists_with_depth_includes_self() {
        let tree = sample_tree();

        let by_depth = tree.item_lists_with_depth();

        assert_eq!(names(by_depth[&1].iter().copied()), vec!["root"]);
        assert_eq!(names(by_depth[&2].iter().copied()), vec!["a-list", "b-list"]);
        assert_eq!(names(by_depth[&3].iter().copied()), vec!["a1-list"]);
        assert_eq!(
            names(tree.all_item_lists()),
            vec!["root", "a-list", "b-list", "a1-list"]
        );
    }

    #[test]
    fn test_depth_slices() {
        let tree = sample_tree();

        assert_eq!(urls(tree.items_at_depth(3)), vec!["/a/1/x"]);
        assert!(tree.items_at_depth(7).is_empty());
        assert!(tree.items_at_depth(0).is_empty());
        assert_eq!(names(tree.item_lists_at_depth(2)), vec!["a-list", "b-list"]);
        assert!(tree.item_lists_at_depth(4).is_empty());
    }

    #[test]
    fn test_depth_range_slices() {
        let tree = sample_tree();

        assert_eq!(
            urls(tree.items_at_depth_range(2, 3)),
            vec!["/a/1", "/a/2", "/b/1", "/a/1/x"]
        );
        assert_eq!(urls(tree.items_at_depth_range(1, 1)), vec!["/a", "/b"]);
        assert!(tree.items_at_depth_range(3, 2).is_empty());
        assert!(tree.items_at_depth_range(5, 9).is_empty());
        assert_eq!(
            names(tree.item_lists_at_depth_range(1, 2)),
            vec!["root", "a-list", "b-list"]
        );
    }

    #[test]
    fn test_items_by_content_type() {
        let mut tree = sample_tree();
        tree.raw("<hr>");
        tree.find_mut("a1-list").unwrap().raw("<span>deep</span>");

        let raws = tree.items_by_content_type(ContentKind::Raw);
        let links = tree.items_by_content_type(ContentKind::Link);

        assert_eq!(raws.len(), 2);
        assert!(raws.iter().all(|item| !item.content().is_link()));
        assert_eq!(links.len(), 6);
    }

    #[test]
    fn test_find_by_name() {
        let tree = sample_tree();

        assert_eq!(tree.find("root").and_then(ItemList::name), Some("root"));
        assert_eq!(
            tree.find_item_list_by_name("a1-list").map(ItemList::len),
            Some(1)
        );
        assert!(tree.find("missing").is_none());
        assert_eq!(
            tree.find_by_name("a1-list").map(ItemList::len),
            Some(1)
        );
        assert!(tree.find_by_name("missing").is_none());
    }

    #[test]
    fn test_find_mut_allows_extending_nested_list() {
        let mut tree = sample_tree();

        tree.find_mut("b-list").unwrap().add("/b/2", "2").unwrap();

        assert_eq!(urls(tree.items_at_depth(2)).len(), 4);
        assert!(tree.find_mut("nope").is_none());
    }

    #[test]
    fn test_find_item_list_by_attribute() {
        let mut tree = sample_tree();
        tree.find_mut("a-list")
            .unwrap()
            .set_attribute("data-section", "admin");

        let found = tree.find_item_list_by_attribute("data-section", "admin");

        assert_eq!(found.and_then(ItemList::name), Some("a-list"));
        assert!(tree.find_item_list_by_attribute("data-section", "x").is_none());
    }

    #[test]
    fn test_find_item_by_url_uses_raw_url() {
        let mut tree = sample_tree();
        tree.add("/users/{id}", "User").unwrap();

        assert!(tree.find_item_by_url("/a/1/x").is_some());
        assert!(tree.find_item_by_url("/users/{id}").is_some());
        assert!(tree.find_item_by_url("/nowhere").is_none());
    }
}
