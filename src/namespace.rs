//! Scoped name tables with TeX grouping semantics
//!
//! A [`Namespace`] resolves names through three layers: definitions made
//! during the current render (an owned overlay), the caller's table, and a
//! static built-in table. Only the overlay is ever written. Local definitions
//! are undone when their group ends, through an undo stack the way TeX
//! implements `\begingroup`/`\endgroup`.

use rapidhash::{RapidHashMap, RapidHashSet};

/// Hash map used for every registry.
pub type KeyMap<K, V> = RapidHashMap<K, V>;
/// Hash set matching [`KeyMap`].
pub type KeySet<K> = RapidHashSet<K>;
/// Map keyed by command or macro name.
pub type Mapping<V> = KeyMap<String, V>;

/// Scoped definitions: built-ins, then the caller's globals, then
/// definitions made during the render.
///
/// Each group records what it overwrote so [`Namespace::end_group`] can put
/// it back.
#[derive(Debug)]
pub struct Namespace<'a, V: Clone + 'static> {
    current: Mapping<V>,
    globals: &'a Mapping<V>,
    builtins: &'static phf::Map<&'static str, V>,
    undef_stack: Vec<KeyMap<String, Option<V>>>,
}

impl<'a, V: Clone> Namespace<'a, V> {
    /// A namespace with no groups open.
    #[must_use]
    pub fn new(builtins: &'static phf::Map<&'static str, V>, globals: &'a Mapping<V>) -> Self {
        Self {
            current: Mapping::default(),
            globals,
            builtins,
            undef_stack: Vec::new(),
        }
    }

    /// Opens a group; definitions made in it are undone when it ends.
    pub fn begin_group(&mut self) {
        self.undef_stack.push(KeyMap::default());
    }

    fn restore_changes(&mut self, undefs: KeyMap<String, Option<V>>) {
        for (name, previous) in undefs {
            match previous {
                Some(v) => {
                    self.current.insert(name, v);
                }
                None => {
                    self.current.remove(&name);
                }
            }
        }
    }

    /// Undoes every local definition made since the matching `begin_group`.
    ///
    /// Returns `false` when no group is open.
    pub fn end_group(&mut self) -> bool {
        let Some(undefs) = self.undef_stack.pop() else {
            return false;
        };
        self.restore_changes(undefs);
        true
    }

    /// Closes every open group, returning how many were closed.
    pub fn end_groups(&mut self) -> usize {
        let mut count = 0;
        while self.end_group() {
            count += 1;
        }
        count
    }

    /// Number of open groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.undef_stack.len()
    }

    /// Whether `name` is defined at any layer.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The innermost definition of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.current
            .get(name)
            .or_else(|| self.globals.get(name))
            .or_else(|| self.builtins.get(name))
    }

    /// Defines `name` in the overlay; `None` removes the overlay entry.
    ///
    /// A local definition is undone at the end of the innermost group. A
    /// global one survives every open group.
    pub fn set(&mut self, name: &str, value: Option<V>, global: bool) {
        if global {
            for level in &mut self.undef_stack {
                level.remove(name);
            }
            if let Some(top) = self.undef_stack.last_mut() {
                top.insert(name.to_owned(), value.clone());
            }
        } else if let Some(top) = self.undef_stack.last_mut()
            && !top.contains_key(name)
        {
            let prev = self.current.get(name).cloned();
            top.insert(name.to_owned(), prev);
        }

        match value {
            Some(v) => {
                self.current.insert(name.to_owned(), v);
            }
            None => {
                self.current.remove(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BUILTINS: phf::Map<&'static str, u32> = phf::phf_map! {
        "a" => 1,
        "b" => 2,
    };

    #[test]
    fn lookup_order() {
        let mut globals = Mapping::default();
        globals.insert("b".to_owned(), 20);
        let mut ns = Namespace::new(&BUILTINS, &globals);
        assert_eq!(ns.get("a"), Some(&1));
        assert_eq!(ns.get("b"), Some(&20));
        ns.set("b", Some(200), false);
        assert_eq!(ns.get("b"), Some(&200));
        assert!(!ns.has("c"));
    }

    #[test]
    fn local_definitions_end_with_their_group() {
        let globals = Mapping::default();
        let mut ns = Namespace::new(&BUILTINS, &globals);
        ns.begin_group();
        ns.set("x", Some(5), false);
        ns.begin_group();
        ns.set("x", Some(6), false);
        assert_eq!(ns.get("x"), Some(&6));
        assert!(ns.end_group());
        assert_eq!(ns.get("x"), Some(&5));
        assert!(ns.end_group());
        assert_eq!(ns.get("x"), None);
        assert!(!ns.end_group());
    }

    #[test]
    fn global_definitions_survive_groups() {
        let globals = Mapping::default();
        let mut ns = Namespace::new(&BUILTINS, &globals);
        ns.begin_group();
        ns.begin_group();
        ns.set("x", Some(7), true);
        assert_eq!(ns.end_groups(), 2);
        assert_eq!(ns.get("x"), Some(&7));
    }

    #[test]
    fn caller_table_is_untouched() {
        let mut globals = Mapping::default();
        globals.insert("y".to_owned(), 1);
        {
            let mut ns = Namespace::new(&BUILTINS, &globals);
            ns.set("y", Some(2), true);
            assert_eq!(ns.get("y"), Some(&2));
        }
        assert_eq!(globals.get("y"), Some(&1));
    }
}
