//! 变量表

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::value::Variable;

/// 变量名到变量值的映射
///
/// 键唯一, `len` 为条目数, 用于占位符数量校验.
/// 序列类型 (`[V]`, `Vec<V>`, `[V; N]`) 以十进制下标 `"0"`, `"1"`, ... 作为变量名.
pub trait Variables {
    type Value: Variable;

    fn len(&self) -> usize;

    fn get(&self, name: &str) -> Option<&Self::Value>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<K, V, S> Variables for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Variable,
    S: BuildHasher,
{
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, name: &str) -> Option<&V> {
        HashMap::get(self, name)
    }
}

impl<K, V> Variables for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Variable,
{
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, name: &str) -> Option<&V> {
        BTreeMap::get(self, name)
    }
}

impl Variables for serde_json::Map<String, serde_json::Value> {
    type Value = serde_json::Value;

    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }

    fn get(&self, name: &str) -> Option<&serde_json::Value> {
        serde_json::Map::get(self, name)
    }
}

/// 解析规范十进制下标 (无符号, 无前导零)
fn index(name: &str) -> Option<usize> {
    let canonical = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_digit())
        && (name.len() == 1 || !name.starts_with('0'));
    if canonical { name.parse().ok() } else { None }
}

impl<V: Variable> Variables for [V] {
    type Value = V;

    fn len(&self) -> usize {
        <[V]>::len(self)
    }

    fn get(&self, name: &str) -> Option<&V> {
        index(name).and_then(|i| <[V]>::get(self, i))
    }
}

impl<V: Variable> Variables for Vec<V> {
    type Value = V;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, name: &str) -> Option<&V> {
        Variables::get(self.as_slice(), name)
    }
}

impl<V: Variable, const N: usize> Variables for [V; N] {
    type Value = V;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, name: &str) -> Option<&V> {
        Variables::get(self.as_slice(), name)
    }
}

impl<T: Variables + ?Sized> Variables for &T {
    type Value = T::Value;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, name: &str) -> Option<&T::Value> {
        (**self).get(name)
    }
}

/// 从 `name => value` 列表创建 `HashMap<&'static str, _>` 变量表
#[macro_export]
macro_rules! variables {
    () => {
        ::std::collections::HashMap::<&'static str, &'static str>::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = ::std::collections::HashMap::new();
        $(map.insert($name, $value);)+
        map
    }};
}

#[test]
#[cfg(test)]
fn test_map_variables() {
    let map = variables! { "world" => "w", "0" => "zero" };
    assert_eq!(Variables::len(&map), 2);
    assert_eq!(Variables::get(&map, "0"), Some(&"zero"));
    assert!(!Variables::contains(&map, "extra"));

    let tree: BTreeMap<String, i32> = [("n".to_string(), 3)].into();
    assert_eq!(Variables::get(&tree, "n"), Some(&3));

    let json = serde_json::json!({ "a": 1, "b": null });
    let object = json.as_object().unwrap();
    assert_eq!(Variables::len(object), 2);
    assert!(Variables::contains(object, "b"));
}

#[test]
#[cfg(test)]
fn test_sequence_variables() {
    let list = vec!["a", "b", "c"];
    assert_eq!(Variables::get(&list, "0"), Some(&"a"));
    assert_eq!(Variables::get(&list, "2"), Some(&"c"));
    assert_eq!(Variables::get(&list, "3"), None);
    assert_eq!(Variables::get(&list, "01"), None);
    assert_eq!(Variables::get(&list, "+1"), None);
    assert_eq!(Variables::get(&list, ""), None);

    let array = [1.5, 2.5];
    assert_eq!(Variables::len(&array), 2);
    assert_eq!(Variables::get(&array, "1"), Some(&2.5));
}
