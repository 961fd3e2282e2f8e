/// What [`LinkedList::find`](super::list::LinkedList::find) looks for.
///
/// The value is optional on its own, so a stored `0` or `""` is searched
/// for like any other value. When both a callback and a value are given,
/// each node is offered to the callback first.
///
/// ```
/// use linear_collections::{Find, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// list.from_array([0, 1, 2]);
///
/// assert_eq!(list.find(Find::value(&0)).map(|n| *n.value()), Some(0));
///
/// let odd = |v: &i32| v % 2 == 1;
/// assert_eq!(list.find(Find::callback(&odd)).map(|n| *n.value()), Some(1));
/// ```
pub struct Find<'a, T> {
    pub(crate) value: Option<&'a T>,
    pub(crate) callback: Option<&'a dyn Fn(&T) -> bool>,
}

impl<'a, T> Find<'a, T> {
    /// Matches nodes whose value the list's comparator deems equal to `value`.
    pub fn value(value: &'a T) -> Self {
        Self {
            value: Some(value),
            callback: None,
        }
    }

    /// Matches nodes for which `callback` returns `true`.
    pub fn callback(callback: &'a dyn Fn(&T) -> bool) -> Self {
        Self {
            value: None,
            callback: Some(callback),
        }
    }

    /// Adds a value to compare against when the callback does not match.
    pub fn or_value(mut self, value: &'a T) -> Self {
        self.value = Some(value);
        self
    }

    /// Adds a callback, tried before the value.
    pub fn with_callback(mut self, callback: &'a dyn Fn(&T) -> bool) -> Self {
        self.callback = Some(callback);
        self
    }
}

impl<T> Default for Find<'_, T> {
    /// Matches nothing.
    fn default() -> Self {
        Self {
            value: None,
            callback: None,
        }
    }
}

impl<T> Clone for Find<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Find<'_, T> {}
